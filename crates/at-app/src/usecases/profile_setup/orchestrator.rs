//! Profile setup orchestrator.
//!
//! This module coordinates the profile setup state machine and side effects.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};

use at_core::ports::{
    alert_message, AlertPort, ApiError, MediaUploadPort, ProfilePort, SetupEventPort,
};
use at_core::setup::{
    ProfileSetupAction, ProfileSetupEvent, ProfileSetupState, ProfileSetupStateMachine,
    SetupProgress,
};
use at_core::{BasicProfile, User};

use super::PROFILE_ALERT_TITLE;
use crate::session::SessionStore;
use crate::usecases::internal::FlowContext;

/// Orchestrator that drives the profile setup wizard.
pub struct ProfileSetupOrchestrator {
    context: Arc<FlowContext<ProfileSetupState>>,
    seeded: AtomicBool,

    profile: Arc<dyn ProfilePort>,
    media: Arc<dyn MediaUploadPort>,
    session: Arc<SessionStore>,
    alerts: Arc<dyn AlertPort>,
    setup_event_port: Arc<dyn SetupEventPort>,
}

impl ProfileSetupOrchestrator {
    pub fn new(
        profile: Arc<dyn ProfilePort>,
        media: Arc<dyn MediaUploadPort>,
        session: Arc<SessionStore>,
        alerts: Arc<dyn AlertPort>,
        setup_event_port: Arc<dyn SetupEventPort>,
    ) -> Self {
        Self {
            context: FlowContext::new(ProfileSetupState::default()).arc(),
            seeded: AtomicBool::new(false),
            profile,
            media,
            session,
            alerts,
            setup_event_port,
        }
    }

    /// Current wizard state, resumed from the server profile on first call.
    pub async fn get_state(&self) -> ProfileSetupState {
        self.seed_state_from_profile().await;
        self.context.get_state().await
    }

    /// Resume from an already fetched user.
    pub async fn resume(&self, user: &User) -> ProfileSetupState {
        self.seeded.store(true, Ordering::SeqCst);
        self.dispatch(ProfileSetupEvent::Resume {
            progress: SetupProgress::from(user),
        })
        .await
    }

    pub async fn submit_basic_info(&self, profile: BasicProfile) -> ProfileSetupState {
        self.dispatch(ProfileSetupEvent::SubmitBasicInfo { profile })
            .await
    }

    pub async fn edit_basic_info(&self) -> ProfileSetupState {
        self.dispatch(ProfileSetupEvent::EditBasicInfo).await
    }

    /// The verification controller reported completion.
    pub async fn verification_finished(&self) -> ProfileSetupState {
        self.dispatch(ProfileSetupEvent::VerificationFinished).await
    }

    async fn dispatch(&self, event: ProfileSetupEvent) -> ProfileSetupState {
        // Serialize dispatch so concurrent submits cannot both start a save.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.profile_setup_orchestrator.dispatch", event = ?event);
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.clone();
                let event_name = format!("{:?}", event);
                let (next, actions) = ProfileSetupStateMachine::transition(current, event);
                info!(from = ?from, to = ?next, event = %event_name, "setup state transition");
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

    async fn execute_actions(&self, actions: Vec<ProfileSetupAction>) -> Vec<ProfileSetupEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "setup executing action");
            match action {
                ProfileSetupAction::SaveBasicInfo { profile } => {
                    let event = match self.save_basic_info(&profile).await {
                        Ok(user) => ProfileSetupEvent::BasicInfoSaved {
                            role: user.primary_role(),
                        },
                        Err(err) => {
                            error!(error = %err, "failed to save basic profile");
                            ProfileSetupEvent::BasicInfoFailed {
                                message: alert_message(&err),
                            }
                        }
                    };
                    follow_up_events.push(event);
                }
                ProfileSetupAction::ShowAlert { message } => {
                    self.alerts.alert(PROFILE_ALERT_TITLE, &message).await;
                }
                ProfileSetupAction::FinishSetup => {
                    self.refresh_session_user().await;
                }
            }
        }
        follow_up_events
    }

    /// Upload the avatar when one was picked, then save the profile fields.
    async fn save_basic_info(&self, profile: &BasicProfile) -> Result<User, ApiError> {
        let avatar_url = match &profile.avatar_path {
            Some(path) => Some(self.media.upload_avatar(path).await?),
            None => None,
        };
        let user = self
            .profile
            .update_profile(&profile.to_update(avatar_url))
            .await?;
        self.store_session_user(user.clone()).await;
        Ok(user)
    }

    /// Re-fetch the user so the session gate sees the finished setup.
    async fn refresh_session_user(&self) {
        match self.profile.get_profile().await {
            Ok(user) => self.store_session_user(user).await,
            Err(err) => warn!(error = %err, "failed to refresh user after setup"),
        }
    }

    async fn store_session_user(&self, user: User) {
        if let Err(err) = self.session.update_user(user).await {
            warn!(error = %err, "failed to cache updated user");
        }
    }

    async fn set_state_and_emit(&self, state: ProfileSetupState) {
        self.context.set_state(state.clone()).await;
        self.setup_event_port.emit_setup_state_changed(state).await;
    }

    async fn seed_state_from_profile(&self) {
        if self.seeded.swap(true, Ordering::SeqCst) {
            return;
        }

        match self.profile.get_profile().await {
            Ok(user) => {
                let progress = SetupProgress::from(&user);
                // The fetched profile is the freshest copy; keep routing in sync.
                self.store_session_user(user).await;
                self.dispatch(ProfileSetupEvent::Resume { progress }).await;
            }
            Err(err) => {
                error!(error = %err, "failed to load profile for setup");
            }
        }
    }
}
