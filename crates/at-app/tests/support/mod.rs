#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use at_core::ports::{AlertPort, SetupEventPort, VerificationEventPort};
use at_core::setup::ProfileSetupState;
use at_core::verification::VerificationSnapshot;
use at_infra::{ApiClient, ApiClientConfig, FileKeyValueStore};
use tempfile::TempDir;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
pub struct Recorder {
    pub alerts: Mutex<Vec<String>>,
    pub setup_states: Mutex<Vec<ProfileSetupState>>,
    pub snapshots: Mutex<Vec<VerificationSnapshot>>,
    completed: AtomicUsize,
}

impl Recorder {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AlertPort for Recorder {
    async fn alert(&self, _title: &str, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

#[async_trait]
impl SetupEventPort for Recorder {
    async fn emit_setup_state_changed(&self, state: ProfileSetupState) {
        self.setup_states.lock().unwrap().push(state);
    }
}

#[async_trait]
impl VerificationEventPort for Recorder {
    async fn emit_verification_changed(&self, snapshot: VerificationSnapshot) {
        self.snapshots.lock().unwrap().push(snapshot);
    }

    async fn verification_completed(&self) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}

/// HTTP client against `base_url` with its store in a fresh temp dir.
pub fn backend(base_url: String) -> (TempDir, Arc<FileKeyValueStore>, Arc<ApiClient>) {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileKeyValueStore::with_defaults(dir.path().to_path_buf()));
    let api = ApiClient::new(
        ApiClientConfig {
            base_url,
            timeout: Some(Duration::from_secs(5)),
        },
        store.clone(),
    )
    .unwrap();
    (dir, store, Arc::new(api))
}
