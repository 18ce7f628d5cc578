//! Verification controller.
//!
//! Drives the verification state machine and executes its side-effects:
//! persisting the KYC, portfolio and final verified flags, alerts and the
//! completion notification to the surrounding wizard.

use std::sync::Arc;

use tracing::{debug, error, info, info_span, Instrument};

use at_core::ports::{alert_message, AlertPort, ApiError, ProfilePort, VerificationEventPort};
use at_core::verification::{
    VerificationAction, VerificationEvent, VerificationSnapshot, VerificationStateMachine,
};
use at_core::{ProfileUpdate, User};

use super::VERIFICATION_ALERT_TITLE;
use crate::usecases::internal::FlowContext;

/// Orchestrator that drives verification state and side effects.
pub struct VerificationController {
    context: Arc<FlowContext<VerificationSnapshot>>,
    profile: Arc<dyn ProfilePort>,
    alerts: Arc<dyn AlertPort>,
    events: Arc<dyn VerificationEventPort>,
}

impl VerificationController {
    pub fn new(
        profile: Arc<dyn ProfilePort>,
        alerts: Arc<dyn AlertPort>,
        events: Arc<dyn VerificationEventPort>,
    ) -> Self {
        Self {
            context: FlowContext::new(VerificationSnapshot::default()).arc(),
            profile,
            alerts,
            events,
        }
    }

    /// Fetch the profile and seed role and flags from it.
    ///
    /// A failed fetch is alerted and leaves the current state untouched.
    pub async fn load(&self) -> Result<VerificationSnapshot, ApiError> {
        match self.profile.get_profile().await {
            Ok(user) => Ok(self.load_from(&user).await),
            Err(err) => {
                error!(error = %err, "failed to load profile for verification");
                self.alerts
                    .alert(VERIFICATION_ALERT_TITLE, &alert_message(&err))
                    .await;
                Err(err)
            }
        }
    }

    /// Seed role and flags from an already fetched user.
    pub async fn load_from(&self, user: &User) -> VerificationSnapshot {
        self.dispatch(VerificationEvent::Loaded {
            role: user.primary_role(),
            kyc_completed: user.kyc_completed,
            portfolio_complete: user.portfolio_complete,
        })
        .await
    }

    pub async fn select_kyc(&self) -> VerificationSnapshot {
        self.dispatch(VerificationEvent::SelectKyc).await
    }

    pub async fn select_portfolio(&self) -> VerificationSnapshot {
        self.dispatch(VerificationEvent::SelectPortfolio).await
    }

    pub async fn close(&self) -> VerificationSnapshot {
        self.dispatch(VerificationEvent::Close).await
    }

    /// The identity provider reported success.
    pub async fn kyc_succeeded(&self) -> VerificationSnapshot {
        self.dispatch(VerificationEvent::KycSucceeded).await
    }

    /// The role-specific portfolio step finished.
    pub async fn portfolio_done(&self) -> VerificationSnapshot {
        self.dispatch(VerificationEvent::PortfolioDone).await
    }

    pub async fn complete_setup(&self) -> VerificationSnapshot {
        self.dispatch(VerificationEvent::CompleteSetup).await
    }

    pub async fn state(&self) -> VerificationSnapshot {
        self.context.get_state().await
    }

    async fn dispatch(&self, event: VerificationEvent) -> VerificationSnapshot {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.verification_controller.dispatch", event = ?event);
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.clone();
                let event_name = format!("{:?}", event);
                let (next, actions) = VerificationStateMachine::transition(current, event);
                info!(
                    from = ?from.stage,
                    to = ?next.stage,
                    event = %event_name,
                    "verification state transition"
                );
                let follow_up_events = self.execute_actions(actions).await;
                self.set_state_and_emit(next.clone()).await;
                current = next;
                pending_events.extend(follow_up_events);
            }

            current
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<VerificationAction>) -> Vec<VerificationEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "verification executing action");
            match action {
                VerificationAction::PersistKycCompleted => {
                    let event = match self.persist(&ProfileUpdate::kyc_completed()).await {
                        Ok(()) => VerificationEvent::KycPersisted,
                        Err(message) => VerificationEvent::KycPersistFailed { message },
                    };
                    follow_up_events.push(event);
                }
                VerificationAction::PersistPortfolioComplete => {
                    let event = match self.persist(&ProfileUpdate::portfolio_complete()).await {
                        Ok(()) => VerificationEvent::PortfolioPersisted,
                        Err(message) => VerificationEvent::PortfolioPersistFailed { message },
                    };
                    follow_up_events.push(event);
                }
                VerificationAction::PersistVerified {
                    kyc_completed,
                    portfolio_complete,
                } => {
                    let update = ProfileUpdate::verified(kyc_completed, portfolio_complete);
                    let event = match self.persist(&update).await {
                        Ok(()) => VerificationEvent::VerifiedPersisted,
                        Err(message) => VerificationEvent::VerifiedPersistFailed { message },
                    };
                    follow_up_events.push(event);
                }
                VerificationAction::ShowAlert { message } => {
                    self.alerts.alert(VERIFICATION_ALERT_TITLE, &message).await;
                }
                VerificationAction::NotifyCompleted => {
                    self.events.verification_completed().await;
                }
            }
        }
        follow_up_events
    }

    /// Send a profile update; failures come back as the alert text.
    async fn persist(&self, update: &ProfileUpdate) -> Result<(), String> {
        self.profile.update_profile(update).await.map(|_| ()).map_err(|err| {
            error!(error = %err, ?update, "failed to persist verification flags");
            alert_message(&err)
        })
    }

    async fn set_state_and_emit(&self, state: VerificationSnapshot) {
        self.context.set_state(state.clone()).await;
        self.events.emit_verification_changed(state).await;
    }
}
