//! Admin moderation: user blocking and review of startups and holdings.

mod review;
mod users;

pub use review::{ListPendingHoldings, ListPendingStartups, ReviewHolding, ReviewStartup};
pub use users::{ListUsers, SetUserBlocked};

use at_core::admin::ReviewDecision;
use at_core::ports::ApiError;
use at_core::user::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Rejections must carry a non-blank reason; returns the trimmed reason.
fn rejection_reason(decision: &ReviewDecision) -> Result<Option<&str>, AdminError> {
    match decision {
        ReviewDecision::Approve => Ok(None),
        ReviewDecision::Reject { reason } => {
            let reason = reason.trim();
            if reason.is_empty() {
                return Err(ValidationError::Required { field: "reason" }.into());
            }
            Ok(Some(reason))
        }
    }
}
