use async_trait::async_trait;
use at_core::admin::{PendingHolding, PendingStartup};
use at_core::ids::{CompanyId, HoldingId, UserId};
use at_core::ports::{AdminPort, ApiError};
use at_core::user::User;
use serde_json::json;

use super::client::ApiClient;
use super::Method;

#[async_trait]
impl AdminPort for ApiClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.request_json("/api/admin/users", None, Method::GET).await
    }

    async fn set_user_blocked(&self, user_id: &UserId, blocked: bool) -> Result<(), ApiError> {
        let action = if blocked { "block" } else { "unblock" };
        let path = format!("/api/admin/users/{user_id}/{action}");
        self.request(&path, None, Method::POST).await.map(|_| ())
    }

    async fn pending_startups(&self) -> Result<Vec<PendingStartup>, ApiError> {
        self.request_json("/api/admin/startups/pending", None, Method::GET)
            .await
    }

    async fn approve_startup(&self, id: &CompanyId) -> Result<(), ApiError> {
        let path = format!("/api/admin/startups/{id}/approve");
        self.request(&path, None, Method::POST).await.map(|_| ())
    }

    async fn reject_startup(&self, id: &CompanyId, reason: &str) -> Result<(), ApiError> {
        let path = format!("/api/admin/startups/{id}/reject");
        let body = json!({ "reason": reason });
        self.request(&path, Some(&body), Method::POST)
            .await
            .map(|_| ())
    }

    async fn pending_holdings(&self) -> Result<Vec<PendingHolding>, ApiError> {
        self.request_json("/api/admin/holdings/pending", None, Method::GET)
            .await
    }

    async fn approve_holding(&self, id: &HoldingId) -> Result<(), ApiError> {
        let path = format!("/api/admin/holdings/{id}/approve");
        self.request(&path, None, Method::POST).await.map(|_| ())
    }

    async fn reject_holding(&self, id: &HoldingId, reason: &str) -> Result<(), ApiError> {
        let path = format!("/api/admin/holdings/{id}/reject");
        let body = json!({ "reason": reason });
        self.request(&path, Some(&body), Method::POST)
            .await
            .map(|_| ())
    }
}
