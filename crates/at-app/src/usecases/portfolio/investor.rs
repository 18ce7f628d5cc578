use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use at_core::portfolio::{HoldingInput, InvestorDetails};
use at_core::ports::storage::keys;
use at_core::ports::{alert_message, AlertPort, ClockPort, InvestorDetailsPort};
use at_core::verification::VerificationSnapshot;

use super::{PendingDrafts, PortfolioError, PORTFOLIO_ALERT_TITLE};
use crate::usecases::verification::VerificationController;

/// Investor portfolio: firm profile and recorded holdings.
///
/// Edits land in a local draft first; every server save sends the whole
/// document. A draft that never reached the server wins over the server copy
/// on the next load.
pub struct InvestorPortfolioStep {
    details_port: Arc<dyn InvestorDetailsPort>,
    drafts: PendingDrafts,
    clock: Arc<dyn ClockPort>,
    alerts: Arc<dyn AlertPort>,
    controller: Arc<VerificationController>,
    details: Mutex<InvestorDetails>,
    loaded: AtomicBool,
}

impl InvestorPortfolioStep {
    pub fn new(
        details_port: Arc<dyn InvestorDetailsPort>,
        drafts: PendingDrafts,
        clock: Arc<dyn ClockPort>,
        alerts: Arc<dyn AlertPort>,
        controller: Arc<VerificationController>,
    ) -> Self {
        Self {
            details_port,
            drafts,
            clock,
            alerts,
            controller,
            details: Mutex::new(InvestorDetails::default()),
            loaded: AtomicBool::new(false),
        }
    }

    pub async fn load(&self) -> Result<InvestorDetails, PortfolioError> {
        let details = match self
            .drafts
            .load::<InvestorDetails>(keys::PENDING_INVESTOR_DETAILS)
            .await
        {
            Some(draft) => {
                info!("resuming unsaved investor details draft");
                draft
            }
            None => self.details_port.get_investor_details().await.map_err(|err| {
                error!(error = %err, "failed to load investor details");
                err
            })?,
        };
        *self.details.lock().await = details.clone();
        self.loaded.store(true, Ordering::SeqCst);
        Ok(details)
    }

    /// Holdings are saved as a whole array, so edits start from the loaded
    /// document.
    async fn ensure_loaded(&self) -> Result<(), PortfolioError> {
        if !self.loaded.load(Ordering::SeqCst) {
            self.load().await?;
        }
        Ok(())
    }

    pub async fn details(&self) -> InvestorDetails {
        self.details.lock().await.clone()
    }

    /// Append a holding and save the whole document.
    ///
    /// On a failed save the holding stays in the local draft and the next
    /// successful save sends it.
    pub async fn add_holding(&self, input: HoldingInput) -> Result<InvestorDetails, PortfolioError> {
        let holding = input.into_holding(self.clock.today())?;
        self.ensure_loaded().await?;
        let details = {
            let mut details = self.details.lock().await;
            details.holdings.push(holding);
            details.clone()
        };
        self.drafts
            .save(keys::PENDING_INVESTOR_DETAILS, &details)
            .await;
        self.persist(&details).await?;
        info!(holdings = details.holdings.len(), "holding added");
        Ok(details)
    }

    /// Update firm and focus fields locally; they are sent with the next save.
    pub async fn update_focus(
        &self,
        firm: Option<String>,
        focus_areas: Vec<String>,
        ticket_min: Option<f64>,
        ticket_max: Option<f64>,
    ) -> Result<InvestorDetails, PortfolioError> {
        self.ensure_loaded().await?;
        let details = {
            let mut details = self.details.lock().await;
            details.firm = firm.filter(|firm| !firm.trim().is_empty());
            details.focus_areas = focus_areas
                .into_iter()
                .map(|area| area.trim().to_string())
                .filter(|area| !area.is_empty())
                .collect();
            details.ticket_min = ticket_min;
            details.ticket_max = ticket_max;
            details.clone()
        };
        self.drafts
            .save(keys::PENDING_INVESTOR_DETAILS, &details)
            .await;
        Ok(details)
    }

    /// Save any pending edits, then report the portfolio as done.
    pub async fn finish(&self) -> Result<VerificationSnapshot, PortfolioError> {
        self.ensure_loaded().await?;
        let details = self.details().await;
        self.persist(&details).await?;
        Ok(self.controller.portfolio_done().await)
    }

    async fn persist(&self, details: &InvestorDetails) -> Result<(), PortfolioError> {
        if let Err(err) = self.details_port.save_investor_details(details).await {
            warn!(error = %err, "failed to save investor details; draft kept");
            self.alerts
                .alert(PORTFOLIO_ALERT_TITLE, &alert_message(&err))
                .await;
            return Err(err.into());
        }
        self.drafts.clear(keys::PENDING_INVESTOR_DETAILS).await;
        Ok(())
    }
}
