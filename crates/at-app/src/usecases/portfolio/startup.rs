use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use at_core::portfolio::{
    CompanyProfile, DocumentKind, FinancialProfile, FundingRound, StagedFile, StartupDetails,
    TeamMember, UploadedDocument,
};
use at_core::ports::storage::keys;
use at_core::ports::{
    alert_message, AlertPort, ApiError, MediaKind, MediaPickerPort, MediaUploadPort, PickerError,
    StartupDetailsPort,
};
use at_core::user::ValidationError;
use at_core::verification::VerificationSnapshot;

use super::{PendingDrafts, PortfolioError, PORTFOLIO_ALERT_TITLE};
use crate::usecases::verification::VerificationController;

#[derive(Default)]
struct Staged {
    documents: Vec<(DocumentKind, StagedFile)>,
    video: Option<StagedFile>,
}

/// Startup portfolio: company, financials, funding, team and documents.
///
/// Each section save sends the whole document. Picked documents and the
/// pitch video stay local until `send_for_verification` uploads them.
pub struct StartupPortfolioStep {
    details_port: Arc<dyn StartupDetailsPort>,
    media: Arc<dyn MediaUploadPort>,
    picker: Arc<dyn MediaPickerPort>,
    drafts: PendingDrafts,
    alerts: Arc<dyn AlertPort>,
    controller: Arc<VerificationController>,
    details: Mutex<StartupDetails>,
    staged: Mutex<Staged>,
    loaded: AtomicBool,
}

impl StartupPortfolioStep {
    pub fn new(
        details_port: Arc<dyn StartupDetailsPort>,
        media: Arc<dyn MediaUploadPort>,
        picker: Arc<dyn MediaPickerPort>,
        drafts: PendingDrafts,
        alerts: Arc<dyn AlertPort>,
        controller: Arc<VerificationController>,
    ) -> Self {
        Self {
            details_port,
            media,
            picker,
            drafts,
            alerts,
            controller,
            details: Mutex::new(StartupDetails::default()),
            staged: Mutex::new(Staged::default()),
            loaded: AtomicBool::new(false),
        }
    }

    pub async fn load(&self) -> Result<StartupDetails, PortfolioError> {
        let details = match self
            .drafts
            .load::<StartupDetails>(keys::PENDING_STARTUP_DETAILS)
            .await
        {
            Some(draft) => {
                info!("resuming unsaved startup details draft");
                draft
            }
            None => self.details_port.get_startup_details().await.map_err(|err| {
                error!(error = %err, "failed to load startup details");
                err
            })?,
        };
        *self.details.lock().await = details.clone();
        self.loaded.store(true, Ordering::SeqCst);
        Ok(details)
    }

    async fn ensure_loaded(&self) -> Result<(), PortfolioError> {
        if !self.loaded.load(Ordering::SeqCst) {
            self.load().await?;
        }
        Ok(())
    }

    pub async fn details(&self) -> StartupDetails {
        self.details.lock().await.clone()
    }

    pub async fn save_company_profile(
        &self,
        profile: CompanyProfile,
    ) -> Result<StartupDetails, PortfolioError> {
        if profile.name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "company name",
            }
            .into());
        }
        self.edit(|details| details.company_profile = profile).await
    }

    pub async fn save_financial_profile(
        &self,
        profile: FinancialProfile,
    ) -> Result<StartupDetails, PortfolioError> {
        self.edit(|details| details.financial_profile = profile)
            .await
    }

    pub async fn add_funding_round(
        &self,
        round: FundingRound,
    ) -> Result<StartupDetails, PortfolioError> {
        if round.round_type.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "round type",
            }
            .into());
        }
        if !(round.amount.is_finite() && round.amount > 0.0) {
            return Err(ValidationError::NonPositiveAmount { field: "amount" }.into());
        }
        self.edit(|details| details.funding_rounds.push(round)).await
    }

    pub async fn add_team_member(
        &self,
        member: TeamMember,
    ) -> Result<StartupDetails, PortfolioError> {
        if member.name.trim().is_empty() {
            return Err(ValidationError::Required { field: "name" }.into());
        }
        if member.role.trim().is_empty() {
            return Err(ValidationError::Required { field: "role" }.into());
        }
        self.edit(|details| details.team_members.push(member)).await
    }

    /// Pick a verification document. `Ok(None)` when the user cancelled.
    pub async fn pick_document(
        &self,
        kind: DocumentKind,
    ) -> Result<Option<StagedFile>, PortfolioError> {
        let Some(file) = self.pick(MediaKind::Document).await? else {
            return Ok(None);
        };
        self.staged.lock().await.documents.push((kind, file.clone()));
        info!(kind = kind.as_str(), file = %file.file_name, "document staged");
        Ok(Some(file))
    }

    /// Pick the pitch video, replacing any previously staged one.
    pub async fn pick_video(&self) -> Result<Option<StagedFile>, PortfolioError> {
        let Some(file) = self.pick(MediaKind::Video).await? else {
            return Ok(None);
        };
        self.staged.lock().await.video = Some(file.clone());
        info!(file = %file.file_name, "pitch video staged");
        Ok(Some(file))
    }

    pub async fn staged_documents(&self) -> Vec<(DocumentKind, StagedFile)> {
        self.staged.lock().await.documents.clone()
    }

    /// Upload staged files one at a time, save the document URLs and report
    /// the portfolio as done.
    ///
    /// The first failed upload aborts the submission; files uploaded before it
    /// are not removed and staged files are kept for another attempt.
    pub async fn send_for_verification(&self) -> Result<VerificationSnapshot, PortfolioError> {
        self.ensure_loaded().await?;
        let (documents, video) = {
            let staged = self.staged.lock().await;
            (staged.documents.clone(), staged.video.clone())
        };
        if documents.is_empty() && self.details.lock().await.documents.is_empty() {
            return Err(ValidationError::Required { field: "documents" }.into());
        }

        let mut uploaded = Vec::with_capacity(documents.len());
        for (kind, file) in &documents {
            let url = self
                .alert_on_failure(self.media.upload_document(*kind, &file.path).await)
                .await?;
            uploaded.push(UploadedDocument {
                kind: *kind,
                url,
                file_name: Some(file.file_name.clone()),
            });
        }
        let video_url = match &video {
            Some(file) => Some(
                self.alert_on_failure(self.media.upload_video(&file.path).await)
                    .await?,
            ),
            None => None,
        };

        self.edit(|details| {
            details.documents.extend(uploaded);
            if video_url.is_some() {
                details.pitch_video_url = video_url;
            }
        })
        .await?;
        *self.staged.lock().await = Staged::default();
        info!(documents = documents.len(), "startup documents submitted");

        Ok(self.controller.portfolio_done().await)
    }

    async fn pick(&self, kind: MediaKind) -> Result<Option<StagedFile>, PortfolioError> {
        match self.picker.pick(kind).await {
            Ok(path) => Ok(Some(StagedFile::from_path(path))),
            Err(PickerError::Cancelled) => Ok(None),
            Err(err) => {
                warn!(error = %err, ?kind, "media picker failed");
                self.alerts
                    .alert(PORTFOLIO_ALERT_TITLE, &err.to_string())
                    .await;
                Err(err.into())
            }
        }
    }

    /// Apply an edit locally, keep it as a draft and save the whole document.
    async fn edit(
        &self,
        apply: impl FnOnce(&mut StartupDetails),
    ) -> Result<StartupDetails, PortfolioError> {
        self.ensure_loaded().await?;
        let details = {
            let mut details = self.details.lock().await;
            apply(&mut details);
            details.clone()
        };
        self.drafts
            .save(keys::PENDING_STARTUP_DETAILS, &details)
            .await;
        self.alert_on_failure(self.details_port.save_startup_details(&details).await)
            .await?;
        self.drafts.clear(keys::PENDING_STARTUP_DETAILS).await;
        Ok(details)
    }

    async fn alert_on_failure<T>(&self, result: Result<T, ApiError>) -> Result<T, PortfolioError> {
        match result {
            Ok(value) => Ok(value),
            Err(err) => {
                error!(error = %err, "startup portfolio request failed");
                self.alerts
                    .alert(PORTFOLIO_ALERT_TITLE, &alert_message(&err))
                    .await;
                Err(err.into())
            }
        }
    }
}
