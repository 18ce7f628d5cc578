use std::sync::Arc;

use tracing::info;

use at_core::ports::AuthPort;
use at_core::user::validate_email;

use super::AuthError;

/// Ask the backend to send a password reset email.
pub struct ForgotPassword {
    auth: Arc<dyn AuthPort>,
}

impl ForgotPassword {
    pub fn new(auth: Arc<dyn AuthPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, email: &str) -> Result<(), AuthError> {
        let email = email.trim();
        validate_email(email)?;
        self.auth.forgot_password(email).await?;
        info!("password reset requested");
        Ok(())
    }
}
