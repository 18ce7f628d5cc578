use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use at_core::ports::storage::keys;
use at_core::ports::{KeyValueStorePort, StorageError};
use at_core::session::AuthSession;
use at_core::{AuthToken, SessionState, User};

/// Owner of the persisted session (token and cached user).
///
/// Every change is published on a watch channel; the persisted copy and the
/// published state are updated together.
pub struct SessionStore {
    store: Arc<dyn KeyValueStorePort>,
    state_tx: watch::Sender<SessionState>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::SignedOut);
        Self { store, state_tx }
    }

    /// Load the persisted session at startup.
    ///
    /// Storage failures and an unreadable cached user are logged and treated
    /// as "no session" and "no cached user" respectively.
    pub async fn restore(&self) -> SessionState {
        let state = match self.read_token().await {
            Some(_) => SessionState::SignedIn {
                user: self.read_user().await,
            },
            None => SessionState::SignedOut,
        };
        info!(signed_in = state.is_signed_in(), "session restored");
        self.publish(state.clone());
        state
    }

    /// Persist a fresh session from login or registration and publish it.
    pub async fn sign_in(&self, session: AuthSession) -> Result<(), StorageError> {
        self.store
            .set(keys::TOKEN, session.token.expose())
            .await?;
        self.write_user(&session.user).await?;
        info!(user_id = %session.user.id, "session started");
        self.publish(SessionState::SignedIn {
            user: Some(session.user),
        });
        Ok(())
    }

    /// Replace the cached user after a profile change.
    ///
    /// Ignored while signed out so a late response cannot resurrect a session.
    pub async fn update_user(&self, user: User) -> Result<(), StorageError> {
        if !self.current().is_signed_in() {
            debug!(user_id = %user.id, "ignoring user update while signed out");
            return Ok(());
        }
        self.write_user(&user).await?;
        self.publish(SessionState::SignedIn { user: Some(user) });
        Ok(())
    }

    /// Clear the persisted session.
    ///
    /// Observers see `SignedOut` even when removing a key fails; the first
    /// storage error is returned.
    pub async fn sign_out(&self) -> Result<(), StorageError> {
        let token_result = self.store.remove(keys::TOKEN).await;
        let user_result = self.store.remove(keys::USER).await;
        info!("session ended");
        self.publish(SessionState::SignedOut);
        token_result.and(user_result)
    }

    /// Bearer token of the current session, if any.
    pub async fn token(&self) -> Option<AuthToken> {
        if !self.current().is_signed_in() {
            return None;
        }
        self.read_token().await
    }

    pub fn current(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            rx: self.state_tx.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.state_tx.receiver_count()
    }

    fn publish(&self, state: SessionState) {
        self.state_tx.send_if_modified(|current| {
            if *current == state {
                return false;
            }
            *current = state;
            true
        });
    }

    async fn read_token(&self) -> Option<AuthToken> {
        match self.store.get(keys::TOKEN).await {
            Ok(Some(raw)) => Some(AuthToken::new(raw)).filter(|token| !token.is_empty()),
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "failed to read session token");
                None
            }
        }
    }

    async fn read_user(&self) -> Option<User> {
        let raw = match self.store.get(keys::USER).await {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(error = %err, "failed to read cached user");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(error = %err, "discarding unreadable cached user");
                None
            }
        }
    }

    async fn write_user(&self, user: &User) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(user).map_err(|err| StorageError::Corrupt(err.to_string()))?;
        self.store.set(keys::USER, &raw).await
    }
}

/// Receiver side of the session channel.
pub struct SessionSubscription {
    rx: watch::Receiver<SessionState>,
}

impl SessionSubscription {
    pub fn current(&self) -> SessionState {
        self.rx.borrow().clone()
    }

    /// Wait for the next session change. `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<SessionState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
