//! Profile setup wizard: basic profile, then role-specific verification.

mod orchestrator;

pub use orchestrator::ProfileSetupOrchestrator;

pub(crate) const PROFILE_ALERT_TITLE: &str = "Profile";
