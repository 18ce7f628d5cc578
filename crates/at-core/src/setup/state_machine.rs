//! Profile setup state machine.
//!
//! Defines a pure state transition function for the profile setup wizard:
//! basic profile fields first, then the role-specific verification step.

use serde::Serialize;

use crate::setup::SetupProgress;
use crate::user::{BasicProfile, Role, ValidationError};

/// Wizard state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProfileSetupState {
    /// Username, display name, bio and avatar form.
    BasicInfo { error: Option<SetupError> },
    /// Basic profile is being uploaded and saved.
    SavingBasicInfo,
    /// Verification controller is in charge.
    Verification { role: Role },
    /// Setup finished; the landing page takes over.
    Done,
}

impl Default for ProfileSetupState {
    fn default() -> Self {
        ProfileSetupState::BasicInfo { error: None }
    }
}

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSetupEvent {
    /// Seed from the profile fetched at mount.
    Resume { progress: SetupProgress },
    /// User submitted the basic profile form.
    SubmitBasicInfo { profile: BasicProfile },
    /// User went back from verification to edit the basic profile.
    EditBasicInfo,
    /// Verification controller signalled completion.
    VerificationFinished,

    // Results (from orchestrator)
    BasicInfoSaved { role: Role },
    BasicInfoFailed { message: String },
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSetupAction {
    /// Upload the avatar (when picked) and save the basic profile fields.
    SaveBasicInfo { profile: BasicProfile },
    /// Blocking alert for the user.
    ShowAlert { message: String },
    /// Refresh the cached session user so routing sees the finished setup.
    FinishSetup,
}

/// Wizard error types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SetupError {
    Invalid(ValidationError),
    SaveFailed { message: String },
}

/// Pure profile setup state machine.
pub struct ProfileSetupStateMachine;

impl ProfileSetupStateMachine {
    pub fn transition(
        state: ProfileSetupState,
        event: ProfileSetupEvent,
    ) -> (ProfileSetupState, Vec<ProfileSetupAction>) {
        match (state, event) {
            (ProfileSetupState::Done, _) => (ProfileSetupState::Done, Vec::new()),
            (
                ProfileSetupState::BasicInfo { .. } | ProfileSetupState::Verification { .. },
                ProfileSetupEvent::Resume { progress },
            ) => {
                let next = if progress.setup_complete {
                    ProfileSetupState::Done
                } else if progress.has_basic_profile {
                    ProfileSetupState::Verification {
                        role: progress.role,
                    }
                } else {
                    ProfileSetupState::BasicInfo { error: None }
                };
                (next, Vec::new())
            }
            (ProfileSetupState::BasicInfo { .. }, ProfileSetupEvent::SubmitBasicInfo { profile }) => {
                if let Err(err) = profile.validate() {
                    return (
                        ProfileSetupState::BasicInfo {
                            error: Some(SetupError::Invalid(err)),
                        },
                        Vec::new(),
                    );
                }
                (
                    ProfileSetupState::SavingBasicInfo,
                    vec![ProfileSetupAction::SaveBasicInfo { profile }],
                )
            }
            (ProfileSetupState::SavingBasicInfo, ProfileSetupEvent::BasicInfoSaved { role }) => {
                (ProfileSetupState::Verification { role }, Vec::new())
            }
            (ProfileSetupState::SavingBasicInfo, ProfileSetupEvent::BasicInfoFailed { message }) => (
                ProfileSetupState::BasicInfo {
                    error: Some(SetupError::SaveFailed {
                        message: message.clone(),
                    }),
                },
                vec![ProfileSetupAction::ShowAlert { message }],
            ),
            (ProfileSetupState::Verification { .. }, ProfileSetupEvent::EditBasicInfo) => {
                (ProfileSetupState::BasicInfo { error: None }, Vec::new())
            }
            (ProfileSetupState::Verification { .. }, ProfileSetupEvent::VerificationFinished) => {
                (ProfileSetupState::Done, vec![ProfileSetupAction::FinishSetup])
            }
            (state, _event) => (state, Vec::new()),
        }
    }
}
