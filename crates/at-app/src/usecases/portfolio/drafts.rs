use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use at_core::ports::KeyValueStorePort;

/// Best-effort local drafts of portfolio documents not yet saved to the server.
///
/// Every failure is logged and swallowed: a lost draft only costs the user
/// re-entering data.
#[derive(Clone)]
pub struct PendingDrafts {
    store: Arc<dyn KeyValueStorePort>,
}

impl PendingDrafts {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key).await {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(error = %err, key, "failed to read draft");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(error = %err, key, "discarding unreadable draft");
                None
            }
        }
    }

    pub async fn save<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, key, "failed to encode draft");
                return;
            }
        };
        if let Err(err) = self.store.set(key, &raw).await {
            warn!(error = %err, key, "failed to write draft");
        }
    }

    pub async fn clear(&self, key: &str) {
        if let Err(err) = self.store.remove(key).await {
            warn!(error = %err, key, "failed to clear draft");
        }
    }
}
