use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use at_core::kyc::is_completion_url;
use at_core::verification::VerificationSnapshot;

use super::VerificationController;

/// Hosted identity verification page.
///
/// The embedding browser reports every navigation; the first URL that looks
/// like a completion page reports success to the controller exactly once per
/// step instance. A new instance is created each time the KYC tile is opened.
pub struct KycStep {
    provider_url: String,
    controller: Arc<VerificationController>,
    reported: AtomicBool,
}

impl KycStep {
    pub fn new(provider_url: impl Into<String>, controller: Arc<VerificationController>) -> Self {
        Self {
            provider_url: provider_url.into(),
            controller,
            reported: AtomicBool::new(false),
        }
    }

    /// Page to load in the embedded browser.
    pub fn provider_url(&self) -> &str {
        &self.provider_url
    }

    /// Open the KYC tile.
    pub async fn open(&self) -> VerificationSnapshot {
        self.controller.select_kyc().await
    }

    /// Handle a navigation of the embedded browser.
    ///
    /// Returns the controller state when this navigation reported success.
    pub async fn on_navigation(&self, url: &str) -> Option<VerificationSnapshot> {
        if !is_completion_url(url) {
            debug!(url, "kyc navigation");
            return None;
        }
        if self.reported.swap(true, Ordering::SeqCst) {
            debug!(url, "kyc completion already reported");
            return None;
        }
        info!("kyc provider reported completion");
        Some(self.controller.kyc_succeeded().await)
    }

    /// Leave the step without finishing it.
    pub async fn close(&self) -> VerificationSnapshot {
        self.controller.close().await
    }
}
