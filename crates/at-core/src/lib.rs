//! # at-core
//!
//! Core domain models and workflow logic for the Atmosphere client.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the profile setup and verification state machines, the screen router,
//! comment normalization, and the port traits implemented by `at-infra`.

pub mod admin;
pub mod comments;
pub mod config;
pub mod ids;
pub mod kyc;
pub mod navigation;
pub mod portfolio;
pub mod post;
pub mod ports;
pub mod security;
pub mod session;
pub mod setup;
pub mod user;
pub mod verification;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{CommentId, CompanyId, HoldingId, PostId, ReelId, UserId};
pub use navigation::{NavEvent, Router, Screen};
pub use session::{AuthToken, SessionState};
pub use user::{BasicProfile, ProfileUpdate, Role, User};
