use std::sync::Arc;

use tracing::warn;

use crate::session::SessionStore;

/// End the current session.
pub struct SignOut {
    session: Arc<SessionStore>,
}

impl SignOut {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    /// Observers always see the signed-out state; a storage failure is only logged.
    pub async fn execute(&self) {
        if let Err(err) = self.session.sign_out().await {
            warn!(error = %err, "failed to clear persisted session");
        }
    }
}
