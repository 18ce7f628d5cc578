use async_trait::async_trait;
use at_core::ports::{ApiError, AuthPort, Credentials, Registration};
use at_core::session::AuthSession;
use serde_json::json;

use super::client::ApiClient;
use super::Method;

#[async_trait]
impl AuthPort for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        let body = json!({
            "email": credentials.email,
            "password": credentials.password.expose(),
        });
        self.request_json("/api/auth/login", Some(&body), Method::POST)
            .await
    }

    async fn register(&self, registration: &Registration) -> Result<AuthSession, ApiError> {
        let body = json!({
            "email": registration.email,
            "password": registration.password.expose(),
            "username": registration.username,
            "role": registration.role,
        });
        self.request_json("/api/auth/register", Some(&body), Method::POST)
            .await
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let body = json!({ "email": email });
        self.request("/api/auth/forgot-password", Some(&body), Method::POST)
            .await
            .map(|_| ())
    }
}
