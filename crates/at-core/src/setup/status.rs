use crate::user::{Role, User};

/// Server-side facts the wizard resumes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetupProgress {
    pub role: Role,
    pub has_basic_profile: bool,
    pub setup_complete: bool,
}

impl From<&User> for SetupProgress {
    fn from(user: &User) -> Self {
        Self {
            role: user.primary_role(),
            has_basic_profile: user.has_basic_profile(),
            setup_complete: user.profile_setup_complete && user.is_effectively_verified(),
        }
    }
}
