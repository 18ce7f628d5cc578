use std::sync::Arc;

use tokio::sync::Mutex;

/// Shared workflow context containing state and dispatch lock.
///
/// Used by the profile setup and verification orchestrators so every
/// transition, its side-effects and the resulting state update run as one
/// serialized step.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: Used only for `dispatch` operations to serialize concurrent calls.
/// - `state`: Used for both reading (`get_state`) and writing (during `dispatch`).
pub(crate) struct FlowContext<S> {
    state: Mutex<S>,
    dispatch_lock: Mutex<()>,
}

impl<S: Clone + Send> FlowContext<S> {
    pub(crate) fn new(initial_state: S) -> Self {
        Self {
            state: Mutex::new(initial_state),
            dispatch_lock: Mutex::new(()),
        }
    }

    pub(crate) fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Lightweight read; does NOT acquire `dispatch_lock`.
    pub(crate) async fn get_state(&self) -> S {
        self.state.lock().await.clone()
    }

    pub(crate) async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Should only be called after acquiring `dispatch_lock`.
    pub(crate) async fn set_state(&self, state: S) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }
}
