//! Local key-value persistence port.

use async_trait::async_trait;

use crate::ports::StorageError;

/// Well-known storage keys.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USER: &str = "user";
    pub const API_BASE_URL: &str = "api.base_url";
    pub const PENDING_INVESTOR_DETAILS: &str = "pending.investor.details";
    pub const PENDING_STARTUP_DETAILS: &str = "pending.startup.details";
}

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
