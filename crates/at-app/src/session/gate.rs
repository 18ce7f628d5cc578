use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info_span, Instrument};

use at_core::{NavEvent, Router, Screen, SessionState};

use super::store::SessionStore;

/// Routes between the auth stack, the profile setup wizard and the home
/// screen based on session changes.
pub struct SessionGate;

impl SessionGate {
    /// Screen to show for `session` when the user is on `screen`.
    pub fn route(screen: Screen, session: &SessionState) -> Screen {
        let event = if session.is_signed_in() {
            NavEvent::SessionStarted {
                setup_complete: session.setup_complete(),
            }
        } else {
            NavEvent::SessionEnded
        };
        Router::transition(screen, event)
    }

    /// Start observing `session`. The observer stops when the handle is dropped.
    pub fn spawn(session: &SessionStore, initial: Screen) -> SessionGateHandle {
        let mut subscription = session.subscribe();
        let first = Self::route(initial, &subscription.current());
        let screen_tx = Arc::new(watch::channel(first).0);

        let task_tx = screen_tx.clone();
        let span = info_span!("session_gate");
        let task = tokio::spawn(
            async move {
                while let Some(state) = subscription.changed().await {
                    task_tx.send_if_modified(|screen| {
                        let from = *screen;
                        let next = SessionGate::route(from, &state);
                        if next == from {
                            return false;
                        }
                        debug!(from = ?from, to = ?next, "session gate navigation");
                        *screen = next;
                        true
                    });
                }
            }
            .instrument(span),
        );

        SessionGateHandle { screen_tx, task }
    }
}

/// Running session gate.
pub struct SessionGateHandle {
    screen_tx: Arc<watch::Sender<Screen>>,
    task: JoinHandle<()>,
}

impl SessionGateHandle {
    pub fn screen(&self) -> Screen {
        *self.screen_tx.borrow()
    }

    pub fn subscribe_screen(&self) -> watch::Receiver<Screen> {
        self.screen_tx.subscribe()
    }

    /// Apply a user navigation (auth screen links, wizard completion).
    pub fn navigate(&self, event: NavEvent) -> Screen {
        self.screen_tx.send_if_modified(|screen| {
            let next = Router::transition(*screen, event);
            let changed = next != *screen;
            *screen = next;
            changed
        });
        self.screen()
    }
}

impl Drop for SessionGateHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
