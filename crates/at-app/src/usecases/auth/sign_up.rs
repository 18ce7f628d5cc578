use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use at_core::ports::{AuthPort, Registration};
use at_core::security::SecretString;
use at_core::user::{validate_email, validate_password, validate_username};
use at_core::{Role, User};

use super::AuthError;
use crate::session::SessionStore;

/// Register a new account with its primary role and start a session.
pub struct SignUp {
    auth: Arc<dyn AuthPort>,
    session: Arc<SessionStore>,
}

impl SignUp {
    pub fn new(auth: Arc<dyn AuthPort>, session: Arc<SessionStore>) -> Self {
        Self { auth, session }
    }

    pub async fn execute(
        &self,
        email: &str,
        password: SecretString,
        username: &str,
        role: Role,
    ) -> Result<User, AuthError> {
        let email = email.trim().to_string();
        let username = username.trim().to_string();
        validate_email(&email)?;
        validate_password(&password)?;
        validate_username(&username)?;

        let span = info_span!("usecase.sign_up.execute", role = %role);
        async move {
            let registration = Registration {
                email,
                password,
                username,
                role,
            };
            let session = self.auth.register(&registration).await?;
            let user = session.user.clone();
            self.session.sign_in(session).await?;
            info!(user_id = %user.id, "account registered");
            Ok(user)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeAuth, MemoryStore};
    use at_core::user::ValidationError;

    #[tokio::test]
    async fn registration_signs_in_with_chosen_role() {
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStore::default())));
        let uc = SignUp::new(Arc::new(FakeAuth::default()), session.clone());

        let user = uc
            .execute(
                "founder@example.com",
                SecretString::new("long-enough"),
                "founder_1",
                Role::Startup,
            )
            .await
            .unwrap();

        assert_eq!(user.primary_role(), Role::Startup);
        assert_eq!(
            session.current().user().and_then(|u| u.username.clone()),
            Some("founder_1".to_string())
        );
    }

    #[tokio::test]
    async fn bad_username_never_reaches_the_server() {
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStore::default())));
        let uc = SignUp::new(Arc::new(FakeAuth::default()), session.clone());

        let err = uc
            .execute(
                "founder@example.com",
                SecretString::new("long-enough"),
                "has space",
                Role::Startup,
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthError::Invalid(ValidationError::UsernameCharacters)
        ));
        assert!(!session.current().is_signed_in());
    }
}
