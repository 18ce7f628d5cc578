use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::validation::{validate_username, ValidationError};

const MAX_DISPLAY_NAME_LEN: usize = 50;
const MAX_BIO_LEN: usize = 300;

/// Partial profile update sent to `PUT /api/profile`.
///
/// Absent fields are omitted from the JSON body so the server leaves them alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_setup_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl ProfileUpdate {
    pub fn kyc_completed() -> Self {
        Self {
            kyc_completed: Some(true),
            ..Self::default()
        }
    }

    pub fn portfolio_complete() -> Self {
        Self {
            portfolio_complete: Some(true),
            ..Self::default()
        }
    }

    /// Final update of the verification step.
    pub fn verified(kyc_completed: bool, portfolio_complete: bool) -> Self {
        Self {
            kyc_completed: Some(kyc_completed),
            portfolio_complete: Some(portfolio_complete),
            verified: Some(true),
            profile_setup_complete: Some(true),
            ..Self::default()
        }
    }
}

/// Basic profile fields collected by the first wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicProfile {
    pub username: String,
    pub display_name: String,
    pub bio: String,
    /// Local image picked by the user, uploaded before the profile is saved.
    pub avatar_path: Option<PathBuf>,
}

impl BasicProfile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_username(&self.username)?;

        let display_name = self.display_name.trim();
        if display_name.is_empty() {
            return Err(ValidationError::DisplayNameEmpty);
        }
        if display_name.chars().count() > MAX_DISPLAY_NAME_LEN {
            return Err(ValidationError::DisplayNameTooLong {
                max_len: MAX_DISPLAY_NAME_LEN,
            });
        }
        if self.bio.chars().count() > MAX_BIO_LEN {
            return Err(ValidationError::BioTooLong {
                max_len: MAX_BIO_LEN,
            });
        }
        Ok(())
    }

    /// Update body for the profile fields; `avatar_url` comes from the upload.
    pub fn to_update(&self, avatar_url: Option<String>) -> ProfileUpdate {
        ProfileUpdate {
            username: Some(self.username.trim().to_string()),
            display_name: Some(self.display_name.trim().to_string()),
            bio: Some(self.bio.trim().to_string()),
            avatar_url,
            ..ProfileUpdate::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> BasicProfile {
        BasicProfile {
            username: "ada_l".into(),
            display_name: "Ada Lovelace".into(),
            bio: "first programmer".into(),
            avatar_path: None,
        }
    }

    #[test]
    fn verified_update_serializes_all_final_flags() {
        let json = serde_json::to_value(ProfileUpdate::verified(true, false)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kycCompleted": true,
                "portfolioComplete": false,
                "verified": true,
                "profileSetupComplete": true
            })
        );
    }

    #[test]
    fn kyc_update_only_carries_one_field() {
        let json = serde_json::to_value(ProfileUpdate::kyc_completed()).unwrap();
        assert_eq!(json, serde_json::json!({ "kycCompleted": true }));
    }

    #[test]
    fn valid_profile_passes() {
        assert_eq!(profile().validate(), Ok(()));
    }

    #[test]
    fn blank_display_name_is_rejected() {
        let mut p = profile();
        p.display_name = "   ".into();
        assert_eq!(p.validate(), Err(ValidationError::DisplayNameEmpty));
    }

    #[test]
    fn long_bio_is_rejected() {
        let mut p = profile();
        p.bio = "x".repeat(301);
        assert_eq!(p.validate(), Err(ValidationError::BioTooLong { max_len: 300 }));
    }

    #[test]
    fn to_update_trims_fields() {
        let mut p = profile();
        p.display_name = " Ada ".into();
        let update = p.to_update(Some("https://cdn/a.png".into()));
        assert_eq!(update.display_name.as_deref(), Some("Ada"));
        assert_eq!(update.avatar_url.as_deref(), Some("https://cdn/a.png"));
        assert_eq!(update.verified, None);
    }
}
