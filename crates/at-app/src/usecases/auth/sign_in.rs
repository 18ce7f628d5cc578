use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use at_core::ports::{AuthPort, Credentials};
use at_core::security::SecretString;
use at_core::user::{validate_email, validate_password};
use at_core::User;

use super::AuthError;
use crate::session::SessionStore;

/// Log in with email and password and start a session.
pub struct SignIn {
    auth: Arc<dyn AuthPort>,
    session: Arc<SessionStore>,
}

impl SignIn {
    pub fn new(auth: Arc<dyn AuthPort>, session: Arc<SessionStore>) -> Self {
        Self { auth, session }
    }

    pub async fn execute(&self, email: &str, password: SecretString) -> Result<User, AuthError> {
        let email = email.trim().to_string();
        validate_email(&email)?;
        validate_password(&password)?;

        let span = info_span!("usecase.sign_in.execute");
        async move {
            let session = self.auth.login(&Credentials { email, password }).await?;
            let user = session.user.clone();
            self.session.sign_in(session).await?;
            info!(user_id = %user.id, "signed in");
            Ok(user)
        }
        .instrument(span)
        .await
    }
}
