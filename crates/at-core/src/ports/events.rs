use crate::setup::ProfileSetupState;
use crate::verification::VerificationSnapshot;

#[async_trait::async_trait]
pub trait SetupEventPort: Send + Sync {
    async fn emit_setup_state_changed(&self, state: ProfileSetupState);
}

#[async_trait::async_trait]
pub trait VerificationEventPort: Send + Sync {
    async fn emit_verification_changed(&self, snapshot: VerificationSnapshot);

    /// Verification finished and the final flags are persisted.
    async fn verification_completed(&self);
}
