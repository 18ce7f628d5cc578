//! File-based key-value store
//!
//! Persists the client's small local state (token, cached user, base URL
//! override, pending drafts) as a single JSON object in the application data
//! directory.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use at_core::ports::{KeyValueStorePort, StorageError};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

pub const DEFAULT_STORE_FILE: &str = "store.json";

type Entries = BTreeMap<String, String>;

pub struct FileKeyValueStore {
    store_file_path: PathBuf,
    // Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create store with custom file path
    pub fn new(store_file_path: PathBuf) -> Self {
        Self {
            store_file_path,
            write_lock: Mutex::new(()),
        }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_STORE_FILE))
    }

    pub fn path(&self) -> &PathBuf {
        &self.store_file_path
    }

    fn tmp_path(&self) -> PathBuf {
        self.store_file_path.with_extension("json.tmp")
    }

    async fn load(&self) -> Result<Entries, StorageError> {
        if !fs::try_exists(&self.store_file_path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?
        {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.store_file_path)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to read store file: {e}")))?;

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| StorageError::Corrupt(format!("Failed to parse store file: {e}")))
    }

    async fn persist(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.store_file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Corrupt(format!("Failed to serialize store: {e}")))?;

        // Readers never observe a partially written store file.
        let tmp_path = self.tmp_path();
        let mut file = fs::File::create(&tmp_path)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to create temp store file: {e}")))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| StorageError::Io(format!("Failed to write temp store file: {e}")))?;

        file.sync_all()
            .await
            .map_err(|e| StorageError::Io(format!("Failed to sync temp store file: {e}")))?;
        drop(file);

        fs::rename(&tmp_path, &self.store_file_path)
            .await
            .map_err(|e| {
                StorageError::Io(format!(
                    "Failed to replace store file {} -> {}: {e}",
                    tmp_path.display(),
                    self.store_file_path.display()
                ))
            })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await?;
        debug!(key, "store entry written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
            debug!(key, "store entry removed");
        }
        Ok(())
    }
}
