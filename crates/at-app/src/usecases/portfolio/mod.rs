//! Role-specific portfolio steps of the verification flow.

mod drafts;
mod investor;
mod startup;

pub use drafts::PendingDrafts;
pub use investor::InvestorPortfolioStep;
pub use startup::StartupPortfolioStep;

use at_core::ports::{ApiError, PickerError};
use at_core::user::ValidationError;

pub(crate) const PORTFOLIO_ALERT_TITLE: &str = "Portfolio";

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Picker(#[from] PickerError),
}
