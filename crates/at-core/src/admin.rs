//! Moderation records seen by administrators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CompanyId, HoldingId, UserId};
use crate::portfolio::{Holding, StartupDetails};

/// Startup profile waiting for admin approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingStartup {
    #[serde(alias = "_id")]
    pub id: CompanyId,
    pub owner_id: UserId,
    #[serde(default)]
    pub details: StartupDetails,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Investor holding waiting for admin approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingHolding {
    #[serde(alias = "_id")]
    pub id: HoldingId,
    pub investor_id: UserId,
    #[serde(flatten)]
    pub holding: Holding,
}

/// Admin decision on a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject { reason: String },
}
