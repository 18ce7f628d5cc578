//! # Pure Data Module - Data Transfer Objects Only
//!
//! Configuration data structures and the TOML → DTO mapping.
//! No validation and no default value calculation happens here; empty values
//! are facts and the bootstrap layer decides what to do with them.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL (may be empty; a stored override can replace it).
    pub api_base_url: String,

    /// Per-request timeout in seconds, 0 means "not configured".
    pub request_timeout_secs: u64,

    /// Identity verification provider entry URL.
    pub kyc_provider_url: String,

    /// Directory holding the key-value store and logs.
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Missing sections and keys map to empty values.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            api_base_url: str_at("api", "base_url"),
            request_timeout_secs: toml_value
                .get("api")
                .and_then(|a| a.get("timeout_secs"))
                .and_then(|v| v.as_integer())
                .map(|secs| secs.max(0) as u64)
                .unwrap_or(0),
            kyc_provider_url: str_at("kyc", "provider_url"),
            data_dir: PathBuf::from(str_at("storage", "data_dir")),
        })
    }
}
