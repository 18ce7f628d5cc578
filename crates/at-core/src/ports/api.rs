//! Backend API ports.
//!
//! One trait per resource family; `at-infra`'s HTTP client implements all of
//! them. Every call is a single request with no retry.

use std::path::Path;

use async_trait::async_trait;

use crate::admin::{PendingHolding, PendingStartup};
use crate::comments::CommentNode;
use crate::ids::{CompanyId, HoldingId, ReelId, UserId};
use crate::portfolio::{DocumentKind, InvestorDetails, StartupDetails};
use crate::ports::ApiError;
use crate::post::Post;
use crate::security::SecretString;
use crate::session::AuthSession;
use crate::user::{ProfileUpdate, Role, User};

#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug)]
pub struct Registration {
    pub email: String,
    pub password: SecretString,
    pub username: String,
    pub role: Role,
}

#[async_trait]
pub trait AuthPort: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError>;
    async fn register(&self, registration: &Registration) -> Result<AuthSession, ApiError>;
    async fn forgot_password(&self, email: &str) -> Result<(), ApiError>;
}

#[async_trait]
pub trait ProfilePort: Send + Sync {
    async fn get_profile(&self) -> Result<User, ApiError>;
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError>;
}

#[async_trait]
pub trait PostsPort: Send + Sync {
    async fn my_posts(&self) -> Result<Vec<Post>, ApiError>;
}

/// File uploads. Each call returns the hosted URL of the uploaded file.
#[async_trait]
pub trait MediaUploadPort: Send + Sync {
    async fn upload_avatar(&self, path: &Path) -> Result<String, ApiError>;
    async fn upload_document(&self, kind: DocumentKind, path: &Path) -> Result<String, ApiError>;
    async fn upload_video(&self, path: &Path) -> Result<String, ApiError>;
}

#[async_trait]
pub trait StartupDetailsPort: Send + Sync {
    async fn get_startup_details(&self) -> Result<StartupDetails, ApiError>;
    async fn save_startup_details(&self, details: &StartupDetails) -> Result<(), ApiError>;
}

#[async_trait]
pub trait InvestorDetailsPort: Send + Sync {
    async fn get_investor_details(&self) -> Result<InvestorDetails, ApiError>;
    async fn save_investor_details(&self, details: &InvestorDetails) -> Result<(), ApiError>;
}

#[async_trait]
pub trait ReelsPort: Send + Sync {
    async fn reel_comments(&self, reel_id: &ReelId) -> Result<Vec<CommentNode>, ApiError>;
}

#[async_trait]
pub trait AdminPort: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn set_user_blocked(&self, user_id: &UserId, blocked: bool) -> Result<(), ApiError>;
    async fn pending_startups(&self) -> Result<Vec<PendingStartup>, ApiError>;
    async fn approve_startup(&self, id: &CompanyId) -> Result<(), ApiError>;
    async fn reject_startup(&self, id: &CompanyId, reason: &str) -> Result<(), ApiError>;
    async fn pending_holdings(&self) -> Result<Vec<PendingHolding>, ApiError>;
    async fn approve_holding(&self, id: &HoldingId) -> Result<(), ApiError>;
    async fn reject_holding(&self, id: &HoldingId, reason: &str) -> Result<(), ApiError>;
}
