//! Verification domain module.
//!
//! Tracks the two independent completion flags (KYC and portfolio) and gates
//! the final "complete setup" action on them.

pub mod state_machine;

pub use state_machine::{
    all_done, portfolio_tile_visible, VerificationAction, VerificationError, VerificationEvent,
    VerificationSnapshot, VerificationStage, VerificationStateMachine,
};
