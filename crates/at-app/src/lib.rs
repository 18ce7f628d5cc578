//! Atmosphere application layer
//!
//! Use cases and workflow orchestrators built on the `at-core` ports:
//! authentication, session observation, the profile setup wizard, the
//! verification controller and its KYC and portfolio steps, admin moderation
//! and content listing.

pub mod deps;
pub mod session;
pub mod usecases;

pub use deps::AppDeps;
pub use session::{SessionGate, SessionGateHandle, SessionStore, SessionSubscription};

#[cfg(test)]
pub(crate) mod test_support;
