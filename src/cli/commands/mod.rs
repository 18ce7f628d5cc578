//! Command handlers, one module per command group.

pub mod admin;
pub mod auth;
pub mod content;
pub mod investor;
pub mod setup;
pub mod startup;
pub mod verify;

use std::sync::Arc;

use anyhow::{bail, Context};
use at_app::usecases::{ProfileSetupOrchestrator, VerificationController};
use at_app::AppDeps;
use at_core::ports::storage::keys;
use at_core::verification::{VerificationError, VerificationSnapshot, VerificationStage};

use super::ports::QueuedPicker;
use super::Commands;
use crate::bootstrap::AppRuntime;

/// Everything a command handler needs.
pub struct CommandContext<'a> {
    pub runtime: &'a AppRuntime,
    pub picker: Arc<QueuedPicker>,
    pub json: bool,
}

impl CommandContext<'_> {
    pub fn deps(&self) -> &AppDeps {
        &self.runtime.deps
    }

    pub fn require_session(&self) -> anyhow::Result<()> {
        if !self.runtime.session.current().is_signed_in() {
            bail!("not signed in; run `atmosphere login` first");
        }
        Ok(())
    }

    pub fn verification_controller(&self) -> Arc<VerificationController> {
        let deps = self.deps();
        Arc::new(VerificationController::new(
            deps.profile.clone(),
            deps.alerts.clone(),
            deps.verification_events.clone(),
        ))
    }

    pub fn setup_orchestrator(&self) -> ProfileSetupOrchestrator {
        let deps = self.deps();
        ProfileSetupOrchestrator::new(
            deps.profile.clone(),
            deps.media.clone(),
            self.runtime.session.clone(),
            deps.alerts.clone(),
            deps.setup_events.clone(),
        )
    }

    /// Controller loaded from the server with the portfolio step open.
    pub async fn portfolio_controller(&self) -> anyhow::Result<Arc<VerificationController>> {
        let controller = self.verification_controller();
        controller
            .load()
            .await
            .context("failed to load verification state")?;
        let snapshot = controller.select_portfolio().await;
        ensure_stage(&snapshot, VerificationStage::ShowingPortfolio, || {
            if !snapshot.portfolio_tile_visible() {
                "personal accounts have no portfolio step".to_string()
            } else {
                "portfolio is already complete".to_string()
            }
        })?;
        Ok(controller)
    }
}

fn ensure_stage(
    snapshot: &VerificationSnapshot,
    expected: VerificationStage,
    reason: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    if snapshot.stage != expected {
        bail!(reason());
    }
    Ok(())
}

/// A snapshot carrying a failed save is a command failure.
pub(crate) fn fail_on_persist_error(snapshot: &VerificationSnapshot) -> anyhow::Result<()> {
    match &snapshot.error {
        Some(VerificationError::PersistFailed { message }) => bail!("{message}"),
        Some(VerificationError::Incomplete) => bail!("finish every verification step first"),
        None => Ok(()),
    }
}

pub async fn run_command(command: Commands, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => auth::login(ctx, args).await,
        Commands::Register(args) => auth::register(ctx, args).await,
        Commands::ForgotPassword { email } => auth::forgot_password(ctx, &email).await,
        Commands::Logout => auth::logout(ctx).await,
        Commands::Whoami => auth::whoami(ctx).await,
        Commands::BaseUrl { url, reset } => base_url(ctx, url, reset).await,
        Commands::Posts => content::posts(ctx).await,
        Commands::Comments { reel } => content::comments(ctx, &reel).await,
        Commands::Setup { command } => setup::run(ctx, command).await,
        Commands::Verify { command } => verify::run(ctx, command).await,
        Commands::Investor { command } => investor::run(ctx, command).await,
        Commands::Startup { command } => startup::run(ctx, command).await,
        Commands::Admin { command } => admin::run(ctx, command).await,
    }
}

async fn base_url(ctx: &CommandContext<'_>, url: Option<String>, reset: bool) -> anyhow::Result<()> {
    let store = &ctx.deps().store;
    if reset {
        store.remove(keys::API_BASE_URL).await?;
    } else if let Some(url) = url {
        let url = url.trim();
        if url.is_empty() {
            bail!("base url must not be empty");
        }
        store.set(keys::API_BASE_URL, url).await?;
    }
    let effective = store
        .get(keys::API_BASE_URL)
        .await?
        .unwrap_or_else(|| ctx.runtime.config.api_base_url.clone());
    println!("{effective}");
    Ok(())
}
