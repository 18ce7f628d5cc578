use async_trait::async_trait;
use at_core::ports::{ApiError, ProfilePort};
use at_core::user::{ProfileUpdate, User};
use serde_json::Value;

use super::client::ApiClient;
use super::Method;

#[async_trait]
impl ProfilePort for ApiClient {
    async fn get_profile(&self) -> Result<User, ApiError> {
        let value = self.request("/api/profile", None, Method::GET).await?;
        decode_user(value)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        let body = serde_json::to_value(update).map_err(|e| ApiError::Decode(e.to_string()))?;
        let value = self.request("/api/profile", Some(&body), Method::PUT).await?;
        decode_user(value)
    }
}

/// Accepts both a bare user and a `{ "user": ... }` envelope.
fn decode_user(value: Value) -> Result<User, ApiError> {
    let value = match value {
        Value::Object(mut map) if map.contains_key("user") => {
            map.remove("user").unwrap_or(Value::Null)
        }
        other => other,
    };
    serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("/api/profile: {e}")))
}
