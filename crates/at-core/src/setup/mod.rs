//! Profile setup domain module.
//!
//! This module defines the profile setup wizard state machine types.

pub mod state_machine;
mod status;

pub use state_machine::{
    ProfileSetupAction, ProfileSetupEvent, ProfileSetupState, ProfileSetupStateMachine, SetupError,
};
pub use status::SetupProgress;
