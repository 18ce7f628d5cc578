use std::sync::Arc;

use tracing::info;

use at_core::admin::{PendingHolding, PendingStartup, ReviewDecision};
use at_core::ports::AdminPort;
use at_core::{CompanyId, HoldingId};

use super::{rejection_reason, AdminError};

pub struct ListPendingStartups {
    admin: Arc<dyn AdminPort>,
}

impl ListPendingStartups {
    pub fn new(admin: Arc<dyn AdminPort>) -> Self {
        Self { admin }
    }

    pub async fn execute(&self) -> Result<Vec<PendingStartup>, AdminError> {
        Ok(self.admin.pending_startups().await?)
    }
}

/// Approve or reject a submitted startup profile.
pub struct ReviewStartup {
    admin: Arc<dyn AdminPort>,
}

impl ReviewStartup {
    pub fn new(admin: Arc<dyn AdminPort>) -> Self {
        Self { admin }
    }

    pub async fn execute(&self, id: &CompanyId, decision: ReviewDecision) -> Result<(), AdminError> {
        match rejection_reason(&decision)? {
            None => self.admin.approve_startup(id).await?,
            Some(reason) => self.admin.reject_startup(id, reason).await?,
        }
        info!(company_id = %id, ?decision, "startup reviewed");
        Ok(())
    }
}

pub struct ListPendingHoldings {
    admin: Arc<dyn AdminPort>,
}

impl ListPendingHoldings {
    pub fn new(admin: Arc<dyn AdminPort>) -> Self {
        Self { admin }
    }

    pub async fn execute(&self) -> Result<Vec<PendingHolding>, AdminError> {
        Ok(self.admin.pending_holdings().await?)
    }
}

/// Approve or reject an investor holding.
pub struct ReviewHolding {
    admin: Arc<dyn AdminPort>,
}

impl ReviewHolding {
    pub fn new(admin: Arc<dyn AdminPort>) -> Self {
        Self { admin }
    }

    pub async fn execute(&self, id: &HoldingId, decision: ReviewDecision) -> Result<(), AdminError> {
        match rejection_reason(&decision)? {
            None => self.admin.approve_holding(id).await?,
            Some(reason) => self.admin.reject_holding(id, reason).await?,
        }
        info!(holding_id = %id, ?decision, "holding reviewed");
        Ok(())
    }
}
