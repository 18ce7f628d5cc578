//! # Dependency Injection
//!
//! Creates the infra implementations (HTTP client, file store, clock) and
//! groups them with the host ports supplied by the front end into `AppDeps`.
//!
//! This is the only place allowed to depend on `at-infra` and `at-app`
//! simultaneously. No business logic and no config validation here: config
//! was already resolved in `config.rs`.

use std::sync::Arc;
use std::time::Duration;

use at_app::{AppDeps, SessionStore};
use at_core::config::AppConfig;
use at_core::ports::*;
use at_infra::{ApiClient, ApiClientConfig, FileKeyValueStore, SystemClock};
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("API client initialization failed: {0}")]
    ApiClientInit(#[from] ApiError),

    #[error("Storage initialization failed: {0}")]
    StorageInit(String),
}

/// Ports implemented by the front end (terminal, GUI shell, tests).
#[derive(Clone)]
pub struct HostPorts {
    pub alerts: Arc<dyn AlertPort>,
    pub picker: Arc<dyn MediaPickerPort>,
    pub setup_events: Arc<dyn SetupEventPort>,
    pub verification_events: Arc<dyn VerificationEventPort>,
}

/// Fully wired application.
pub struct AppRuntime {
    pub config: AppConfig,
    pub deps: AppDeps,
    pub session: Arc<SessionStore>,
}

/// Wire infra adapters and host ports into an [`AppRuntime`].
///
/// The session is restored from the key-value store before returning.
pub async fn wire_dependencies(config: AppConfig, host: HostPorts) -> WiringResult<AppRuntime> {
    std::fs::create_dir_all(&config.data_dir)
        .map_err(|err| WiringError::StorageInit(err.to_string()))?;
    let store = Arc::new(FileKeyValueStore::with_defaults(config.data_dir.clone()));
    info!(path = %store.path().display(), "key-value store ready");

    let timeout = (config.request_timeout_secs > 0)
        .then(|| Duration::from_secs(config.request_timeout_secs));
    let api = Arc::new(ApiClient::new(
        ApiClientConfig {
            base_url: config.api_base_url.clone(),
            timeout,
        },
        store.clone(),
    )?);

    let deps = AppDeps {
        auth: api.clone(),
        profile: api.clone(),
        posts: api.clone(),
        media: api.clone(),
        startup_details: api.clone(),
        investor_details: api.clone(),
        reels: api.clone(),
        admin: api,
        store: store.clone(),
        alerts: host.alerts,
        picker: host.picker,
        setup_events: host.setup_events,
        verification_events: host.verification_events,
        clock: Arc::new(SystemClock),
    };

    let session = Arc::new(SessionStore::new(store));
    session.restore().await;

    Ok(AppRuntime {
        config,
        deps,
        session,
    })
}
