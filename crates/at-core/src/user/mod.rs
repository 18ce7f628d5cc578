//! User account models.
//!
//! A `User` is created at registration and mutated by each wizard step through
//! partial `ProfileUpdate`s. `roles[0]` is the primary role and is treated as
//! immutable once verification begins.

mod profile;
mod validation;

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

pub use profile::{BasicProfile, ProfileUpdate};
pub use validation::{validate_email, validate_password, validate_username, ValidationError};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Personal,
    Startup,
    Investor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Personal => "personal",
            Role::Startup => "startup",
            Role::Investor => "investor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(Role::Personal),
            "startup" => Ok(Role::Startup),
            "investor" => Ok(Role::Investor),
            other => Err(ValidationError::UnknownRole(other.to_string())),
        }
    }
}

/// User as returned by `/api/profile` and the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: UserId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub profile_setup_complete: bool,
    #[serde(default)]
    pub kyc_completed: bool,
    #[serde(default)]
    pub portfolio_complete: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub blocked: bool,
}

impl User {
    /// Primary role; accounts without roles are personal.
    pub fn primary_role(&self) -> Role {
        self.roles.first().copied().unwrap_or_default()
    }

    /// Whether the basic profile step has been filled in.
    pub fn has_basic_profile(&self) -> bool {
        self.username
            .as_deref()
            .map(|name| !name.trim().is_empty())
            .unwrap_or(false)
    }

    /// `kycCompleted && (portfolioComplete || role == personal)`.
    pub fn is_effectively_verified(&self) -> bool {
        crate::verification::all_done(
            self.primary_role(),
            self.kyc_completed,
            self.portfolio_complete,
        )
    }

    /// Merge a partial update into a local copy, mirroring what the server does.
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(username) = &update.username {
            self.username = Some(username.clone());
        }
        if let Some(display_name) = &update.display_name {
            self.display_name = Some(display_name.clone());
        }
        if let Some(bio) = &update.bio {
            self.bio = Some(bio.clone());
        }
        if let Some(avatar_url) = &update.avatar_url {
            self.avatar_url = Some(avatar_url.clone());
        }
        if let Some(flag) = update.profile_setup_complete {
            self.profile_setup_complete = flag;
        }
        if let Some(flag) = update.kyc_completed {
            self.kyc_completed = flag;
        }
        if let Some(flag) = update.portfolio_complete {
            self.portfolio_complete = flag;
        }
        if let Some(flag) = update.verified {
            self.verified = flag;
        }
    }
}
