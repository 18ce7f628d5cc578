//! Session ownership and observation.
//!
//! [`SessionStore`] is the single owner of the persisted token and cached
//! user. Observers subscribe to it instead of polling storage; the
//! [`SessionGate`] turns session changes into screen changes.

mod gate;
mod store;

pub use gate::{SessionGate, SessionGateHandle};
pub use store::{SessionStore, SessionSubscription};
