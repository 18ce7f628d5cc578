//! # Application Dependencies
//!
//! Dependency grouping for use case construction.
//!
//! **Note**: This is NOT a Builder pattern. No build steps, no default
//! values, no hidden logic; just parameter grouping.

use std::sync::Arc;

use at_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
#[derive(Clone)]
pub struct AppDeps {
    // Backend API
    pub auth: Arc<dyn AuthPort>,
    pub profile: Arc<dyn ProfilePort>,
    pub posts: Arc<dyn PostsPort>,
    pub media: Arc<dyn MediaUploadPort>,
    pub startup_details: Arc<dyn StartupDetailsPort>,
    pub investor_details: Arc<dyn InvestorDetailsPort>,
    pub reels: Arc<dyn ReelsPort>,
    pub admin: Arc<dyn AdminPort>,

    // Local storage
    pub store: Arc<dyn KeyValueStorePort>,

    // Host shell
    pub alerts: Arc<dyn AlertPort>,
    pub picker: Arc<dyn MediaPickerPort>,
    pub setup_events: Arc<dyn SetupEventPort>,
    pub verification_events: Arc<dyn VerificationEventPort>,

    // System
    pub clock: Arc<dyn ClockPort>,
}
