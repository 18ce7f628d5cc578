use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail};
use at_app::usecases::{PendingDrafts, StartupPortfolioStep, VerificationController};
use at_core::portfolio::{
    CompanyProfile, DocumentKind, FinancialProfile, FundingRound, StartupDetails, TeamMember,
};
use at_core::Role;
use chrono::NaiveDate;
use clap::Subcommand;

use super::{fail_on_persist_error, CommandContext};
use crate::cli::output::{emit, print_snapshot};

#[derive(Subcommand, Debug)]
pub enum StartupCommands {
    /// Show startup details, including unsaved edits
    Show,

    /// Save the company profile
    Company {
        #[arg(long)]
        name: String,

        #[arg(long)]
        website: Option<String>,

        #[arg(long)]
        industry: Option<String>,

        #[arg(long)]
        stage: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        founded_year: Option<i32>,

        #[arg(long)]
        location: Option<String>,
    },

    /// Save the financial profile
    Financials {
        #[arg(long)]
        revenue: Option<f64>,

        #[arg(long)]
        burn_rate: Option<f64>,

        #[arg(long)]
        runway_months: Option<u32>,

        #[arg(long)]
        valuation: Option<f64>,

        #[arg(long)]
        currency: Option<String>,
    },

    /// Add a funding round
    FundingRound {
        #[arg(long = "type")]
        round_type: String,

        #[arg(long)]
        amount: f64,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long = "investor")]
        investors: Vec<String>,
    },

    /// Add a team member
    TeamMember {
        #[arg(long)]
        name: String,

        #[arg(long)]
        role: String,

        #[arg(long)]
        linkedin: Option<String>,
    },

    /// Upload documents and an optional pitch video, then mark the portfolio step done
    Submit {
        /// Document to upload as KIND=PATH (pitch-deck, incorporation-certificate,
        /// financial-statement, cap-table, other)
        #[arg(long = "doc", value_parser = parse_document)]
        documents: Vec<(DocumentKind, PathBuf)>,

        /// Pitch video to upload
        #[arg(long)]
        video: Option<PathBuf>,
    },
}

fn parse_document(value: &str) -> Result<(DocumentKind, PathBuf), String> {
    let (kind, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=PATH, got `{value}`"))?;
    let kind = kind.parse::<DocumentKind>().map_err(|err| err.to_string())?;
    if path.trim().is_empty() {
        return Err("document path must not be empty".to_string());
    }
    Ok((kind, PathBuf::from(path)))
}

pub async fn run(ctx: &CommandContext<'_>, command: StartupCommands) -> anyhow::Result<()> {
    ctx.require_session()?;
    if ctx.runtime.session.current().user().map(|user| user.primary_role()) != Some(Role::Startup) {
        bail!("startup commands need a startup account");
    }

    match command {
        StartupCommands::Submit { documents, video } => submit(ctx, documents, video).await,
        other => edit(ctx, other).await,
    }
}

async fn submit(
    ctx: &CommandContext<'_>,
    documents: Vec<(DocumentKind, PathBuf)>,
    video: Option<PathBuf>,
) -> anyhow::Result<()> {
    let step = portfolio_step(ctx, ctx.portfolio_controller().await?);
    step.load().await?;
    for (kind, path) in documents {
        ctx.picker.queue(path.clone());
        if step.pick_document(kind).await?.is_none() {
            bail!("could not stage {}", path.display());
        }
    }
    if let Some(path) = video {
        ctx.picker.queue(path.clone());
        if step.pick_video().await?.is_none() {
            bail!("could not stage {}", path.display());
        }
    }
    let snapshot = step.send_for_verification().await?;
    fail_on_persist_error(&snapshot)?;
    emit(ctx.json, &snapshot, print_snapshot)
}

async fn edit(ctx: &CommandContext<'_>, command: StartupCommands) -> anyhow::Result<()> {
    let step = portfolio_step(ctx, ctx.verification_controller());
    let current = step.load().await?;
    let details = match command {
        StartupCommands::Show => current,
        StartupCommands::Company {
            name,
            website,
            industry,
            stage,
            description,
            founded_year,
            location,
        } => {
            step.save_company_profile(CompanyProfile {
                name,
                website,
                industry,
                stage,
                description,
                founded_year,
                location,
            })
            .await?
        }
        StartupCommands::Financials {
            revenue,
            burn_rate,
            runway_months,
            valuation,
            currency,
        } => {
            step.save_financial_profile(FinancialProfile {
                revenue,
                burn_rate,
                runway_months,
                valuation,
                currency,
            })
            .await?
        }
        StartupCommands::FundingRound {
            round_type,
            amount,
            date,
            investors,
        } => {
            step.add_funding_round(FundingRound {
                round_type,
                amount,
                date,
                investors,
            })
            .await?
        }
        StartupCommands::TeamMember {
            name,
            role,
            linkedin,
        } => {
            step.add_team_member(TeamMember {
                name,
                role,
                linkedin,
            })
            .await?
        }
        StartupCommands::Submit { .. } => return Err(anyhow!("submit is not an edit")),
    };
    emit(ctx.json, &details, print_details)
}

fn portfolio_step(
    ctx: &CommandContext<'_>,
    controller: Arc<VerificationController>,
) -> StartupPortfolioStep {
    let deps = ctx.deps();
    StartupPortfolioStep::new(
        deps.startup_details.clone(),
        deps.media.clone(),
        ctx.picker.clone(),
        PendingDrafts::new(deps.store.clone()),
        deps.alerts.clone(),
        controller,
    )
}

fn print_details(details: &StartupDetails) {
    let company = &details.company_profile;
    println!(
        "company:   {}",
        if company.name.is_empty() { "-" } else { &company.name }
    );
    if let Some(industry) = &company.industry {
        println!("industry:  {industry}");
    }
    println!("rounds:    {}", details.funding_rounds.len());
    println!("team:      {}", details.team_members.len());
    println!("documents: {}", details.documents.len());
    for document in &details.documents {
        println!("  {}  {}", document.kind.as_str(), document.url);
    }
    if let Some(video) = &details.pitch_video_url {
        println!("video:     {video}");
    }
}
