//! # Configuration Loader
//!
//! `load_config` is pure data loading: read the TOML file and map it to the
//! `AppConfig` DTO, accepting whatever is in the file. Filling empty values
//! with defaults happens in `resolve_config`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use at_core::config::AppConfig;
use tracing::info;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Load configuration from a TOML file.
///
/// **NO validation is performed**: empty strings and missing sections are
/// returned as empty values.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Configuration when no file provides one.
pub fn default_config(data_dir: PathBuf) -> AppConfig {
    AppConfig {
        api_base_url: DEFAULT_API_BASE_URL.to_string(),
        request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        kyc_provider_url: String::new(),
        data_dir,
    }
}

/// Configuration for this run.
///
/// An explicit path must exist. Without one, `<data_dir>/config.toml` is used
/// when present, otherwise the defaults. Empty values in a loaded file fall
/// back to the defaults; an empty KYC provider URL stays empty.
pub fn resolve_config(explicit: Option<PathBuf>, data_dir: &Path) -> anyhow::Result<AppConfig> {
    let candidate = data_dir.join(CONFIG_FILE_NAME);
    let path = match explicit {
        Some(path) => Some(path),
        None if candidate.is_file() => Some(candidate),
        None => None,
    };

    let Some(path) = path else {
        info!(data_dir = %data_dir.display(), "no config file, using defaults");
        return Ok(default_config(data_dir.to_path_buf()));
    };

    let mut config = load_config(path.clone())?;
    if config.api_base_url.trim().is_empty() {
        config.api_base_url = DEFAULT_API_BASE_URL.to_string();
    }
    if config.request_timeout_secs == 0 {
        config.request_timeout_secs = DEFAULT_REQUEST_TIMEOUT_SECS;
    }
    if config.data_dir.as_os_str().is_empty() {
        config.data_dir = data_dir.to_path_buf();
    }
    info!(path = %path.display(), "config loaded");
    Ok(config)
}
