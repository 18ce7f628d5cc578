//! Verification state machine.
//!
//! Defines a pure state transition function for the verification step of the
//! profile setup wizard. Side effects are returned as actions; their results
//! come back as follow-up events.

use serde::{Deserialize, Serialize};

use crate::user::Role;

/// Whether every required flag is set for `role`.
///
/// Personal accounts only need KYC; startups and investors also need the
/// portfolio step.
pub fn all_done(role: Role, kyc_completed: bool, portfolio_complete: bool) -> bool {
    match role {
        Role::Personal => kyc_completed,
        Role::Startup | Role::Investor => kyc_completed && portfolio_complete,
    }
}

/// The portfolio tile is hidden entirely for personal accounts.
pub fn portfolio_tile_visible(role: Role) -> bool {
    role != Role::Personal
}

/// Which sub-step is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationStage {
    /// Tile overview.
    Idle,
    /// Embedded identity provider.
    ShowingKyc,
    /// Role-specific portfolio form.
    ShowingPortfolio,
    /// Final flags persisted and parent notified.
    Complete,
}

/// Verification error shown on the tile overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationError {
    /// "Complete Setup" was requested before every flag was set.
    Incomplete,
    /// Persisting a flag failed; local flags were left unchanged.
    PersistFailed { message: String },
}

/// Full controller state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSnapshot {
    pub stage: VerificationStage,
    pub role: Role,
    pub kyc_completed: bool,
    pub portfolio_complete: bool,
    pub error: Option<VerificationError>,
}

impl Default for VerificationSnapshot {
    fn default() -> Self {
        Self {
            stage: VerificationStage::Idle,
            role: Role::Personal,
            kyc_completed: false,
            portfolio_complete: false,
            error: None,
        }
    }
}

impl VerificationSnapshot {
    pub fn all_done(&self) -> bool {
        all_done(self.role, self.kyc_completed, self.portfolio_complete)
    }

    pub fn portfolio_tile_visible(&self) -> bool {
        portfolio_tile_visible(self.role)
    }

    fn at(self, stage: VerificationStage) -> Self {
        Self { stage, ..self }
    }

    fn with_error(self, error: Option<VerificationError>) -> Self {
        Self { error, ..self }
    }
}

/// Events that drive the verification flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationEvent {
    /// Profile fetched from the server.
    Loaded {
        role: Role,
        kyc_completed: bool,
        portfolio_complete: bool,
    },
    /// User tapped the KYC tile.
    SelectKyc,
    /// User tapped the portfolio tile.
    SelectPortfolio,
    /// User left the current sub-step without finishing it.
    Close,
    /// Identity provider reported success.
    KycSucceeded,
    /// Portfolio step reported it is done.
    PortfolioDone,
    /// User pressed "Complete Setup".
    CompleteSetup,

    // Results (from orchestrator)
    KycPersisted,
    KycPersistFailed { message: String },
    PortfolioPersisted,
    PortfolioPersistFailed { message: String },
    VerifiedPersisted,
    VerifiedPersistFailed { message: String },
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationAction {
    /// `update_profile({kycCompleted: true})`.
    PersistKycCompleted,
    /// `update_profile({portfolioComplete: true})`.
    PersistPortfolioComplete,
    /// Final update marking the account verified and setup complete.
    PersistVerified {
        kyc_completed: bool,
        portfolio_complete: bool,
    },
    /// Blocking alert for the user.
    ShowAlert { message: String },
    /// Tell the parent wizard that verification is finished.
    NotifyCompleted,
}

/// Pure verification state machine.
pub struct VerificationStateMachine;

impl VerificationStateMachine {
    pub fn transition(
        state: VerificationSnapshot,
        event: VerificationEvent,
    ) -> (VerificationSnapshot, Vec<VerificationAction>) {
        use VerificationStage::*;

        match (state.stage, event) {
            (Complete, _) => (state, Vec::new()),
            (
                _,
                VerificationEvent::Loaded {
                    role,
                    kyc_completed,
                    portfolio_complete,
                },
            ) => (
                VerificationSnapshot {
                    stage: Idle,
                    role,
                    kyc_completed,
                    portfolio_complete,
                    error: None,
                },
                Vec::new(),
            ),

            // KYC
            (Idle, VerificationEvent::SelectKyc) if !state.kyc_completed => {
                (state.at(ShowingKyc).with_error(None), Vec::new())
            }
            (ShowingKyc, VerificationEvent::KycSucceeded) => {
                (state, vec![VerificationAction::PersistKycCompleted])
            }
            (ShowingKyc, VerificationEvent::KycPersisted) => (
                VerificationSnapshot {
                    kyc_completed: true,
                    ..state.at(Idle)
                },
                Vec::new(),
            ),
            (ShowingKyc, VerificationEvent::KycPersistFailed { message }) => (
                state.at(Idle).with_error(Some(VerificationError::PersistFailed {
                    message: message.clone(),
                })),
                vec![VerificationAction::ShowAlert { message }],
            ),

            // Portfolio
            (Idle, VerificationEvent::SelectPortfolio)
                if state.portfolio_tile_visible() && !state.portfolio_complete =>
            {
                (state.at(ShowingPortfolio).with_error(None), Vec::new())
            }
            (ShowingPortfolio, VerificationEvent::PortfolioDone) => {
                (state, vec![VerificationAction::PersistPortfolioComplete])
            }
            (ShowingPortfolio, VerificationEvent::PortfolioPersisted) => (
                VerificationSnapshot {
                    portfolio_complete: true,
                    ..state.at(Idle)
                },
                Vec::new(),
            ),
            (ShowingPortfolio, VerificationEvent::PortfolioPersistFailed { message }) => (
                state.at(Idle).with_error(Some(VerificationError::PersistFailed {
                    message: message.clone(),
                })),
                vec![VerificationAction::ShowAlert { message }],
            ),

            (ShowingKyc | ShowingPortfolio, VerificationEvent::Close) => {
                (state.at(Idle), Vec::new())
            }

            // Completion
            (Idle, VerificationEvent::CompleteSetup) => {
                if state.all_done() {
                    let action = VerificationAction::PersistVerified {
                        kyc_completed: state.kyc_completed,
                        portfolio_complete: state.portfolio_complete,
                    };
                    (state.with_error(None), vec![action])
                } else {
                    (
                        state.with_error(Some(VerificationError::Incomplete)),
                        Vec::new(),
                    )
                }
            }
            (Idle, VerificationEvent::VerifiedPersisted) => (
                state.at(Complete).with_error(None),
                vec![VerificationAction::NotifyCompleted],
            ),
            (Idle, VerificationEvent::VerifiedPersistFailed { message }) => (
                state.with_error(Some(VerificationError::PersistFailed {
                    message: message.clone(),
                })),
                vec![VerificationAction::ShowAlert { message }],
            ),

            (_, _event) => (state, Vec::new()),
        }
    }
}
