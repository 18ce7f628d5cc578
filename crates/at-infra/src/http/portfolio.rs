use async_trait::async_trait;
use at_core::portfolio::{InvestorDetails, StartupDetails};
use at_core::ports::{ApiError, InvestorDetailsPort, StartupDetailsPort};
use serde_json::Value;

use super::client::ApiClient;
use super::Method;

const STARTUP_DETAILS: &str = "/api/startup-details";
const INVESTOR_DETAILS: &str = "/api/investor-details";

#[async_trait]
impl StartupDetailsPort for ApiClient {
    async fn get_startup_details(&self) -> Result<StartupDetails, ApiError> {
        let value = self.request(STARTUP_DETAILS, None, Method::GET).await?;
        decode_or_default(value, STARTUP_DETAILS)
    }

    async fn save_startup_details(&self, details: &StartupDetails) -> Result<(), ApiError> {
        let body = serde_json::to_value(details).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(STARTUP_DETAILS, Some(&body), Method::PUT)
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl InvestorDetailsPort for ApiClient {
    async fn get_investor_details(&self) -> Result<InvestorDetails, ApiError> {
        let value = self.request(INVESTOR_DETAILS, None, Method::GET).await?;
        decode_or_default(value, INVESTOR_DETAILS)
    }

    async fn save_investor_details(&self, details: &InvestorDetails) -> Result<(), ApiError> {
        let body = serde_json::to_value(details).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(INVESTOR_DETAILS, Some(&body), Method::PUT)
            .await
            .map(|_| ())
    }
}

/// A user who never saved details gets `null` (or 304 `{}`): both mean "empty".
fn decode_or_default<T>(value: Value, path: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned + Default,
{
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("{path}: {e}")))
}
