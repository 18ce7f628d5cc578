use std::path::PathBuf;

use anyhow::Context;

const APP_DIR_NAME: &str = "atmosphere";

/// `ATMOSPHERE_PROFILE` keeps separate local state per profile (e.g. staging).
fn resolved_app_dir_name(profile: Option<String>) -> String {
    match profile {
        Some(profile) if !profile.trim().is_empty() => {
            format!("{APP_DIR_NAME}-{}", profile.trim())
        }
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Local data directory of the client (key-value store, logs, default config).
pub fn resolve_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir().context("Failed to resolve local data directory")?;
    Ok(base.join(resolved_app_dir_name(
        std::env::var("ATMOSPHERE_PROFILE").ok(),
    )))
}
