pub mod admin;
pub mod auth;
pub mod content;
pub(crate) mod internal;
pub mod portfolio;
pub mod profile_setup;
pub mod verification;

pub use admin::{
    AdminError, ListPendingHoldings, ListPendingStartups, ListUsers, ReviewHolding, ReviewStartup,
    SetUserBlocked,
};
pub use auth::{AuthError, ForgotPassword, SignIn, SignOut, SignUp};
pub use content::{ListMyPosts, LoadReelComments};
pub use portfolio::{InvestorPortfolioStep, PendingDrafts, PortfolioError, StartupPortfolioStep};
pub use profile_setup::ProfileSetupOrchestrator;
pub use verification::{KycStep, VerificationController};
