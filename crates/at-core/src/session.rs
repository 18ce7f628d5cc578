//! Session facts shared between the session store and its observers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Bearer token issued by the backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}

/// Observable session state.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    SignedOut,
    SignedIn {
        /// Cached user, absent when only the token survived a restart.
        user: Option<User>,
    },
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::SignedIn { user } => user.as_ref(),
            SessionState::SignedOut => None,
        }
    }

    pub fn setup_complete(&self) -> bool {
        self.user()
            .map(|user| user.profile_setup_complete)
            .unwrap_or(false)
    }
}

/// Response of the login and register endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: AuthToken,
    pub user: User,
}
