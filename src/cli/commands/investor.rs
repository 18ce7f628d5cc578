use std::sync::Arc;

use anyhow::bail;
use at_app::usecases::{InvestorPortfolioStep, PendingDrafts, VerificationController};
use at_core::portfolio::{HoldingInput, InvestorDetails};
use at_core::{CompanyId, Role};
use chrono::NaiveDate;
use clap::Subcommand;

use super::{fail_on_persist_error, CommandContext};
use crate::cli::output::{emit, print_snapshot};

#[derive(Subcommand, Debug)]
pub enum InvestorCommands {
    /// Show investor details, including unsaved edits
    Show,

    /// Add a portfolio holding
    AddHolding {
        #[arg(long)]
        company: String,

        #[arg(long)]
        amount: f64,

        /// Investment date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Company id when the company is on Atmosphere
        #[arg(long)]
        company_id: Option<String>,

        /// Link to a supporting document
        #[arg(long)]
        doc_url: Option<String>,
    },

    /// Update firm and investment focus (sent with the next save)
    Focus {
        #[arg(long)]
        firm: Option<String>,

        #[arg(long = "area")]
        focus_areas: Vec<String>,

        #[arg(long)]
        ticket_min: Option<f64>,

        #[arg(long)]
        ticket_max: Option<f64>,
    },

    /// Save everything and mark the portfolio step done
    Finish,
}

pub async fn run(ctx: &CommandContext<'_>, command: InvestorCommands) -> anyhow::Result<()> {
    ctx.require_session()?;
    if ctx.runtime.session.current().user().map(|user| user.primary_role()) != Some(Role::Investor)
    {
        bail!("investor commands need an investor account");
    }

    match command {
        InvestorCommands::Show => {
            let step = portfolio_step(ctx, ctx.verification_controller());
            let details = step.load().await?;
            emit(ctx.json, &details, print_details)
        }
        InvestorCommands::AddHolding {
            company,
            amount,
            date,
            company_id,
            doc_url,
        } => {
            let step = portfolio_step(ctx, ctx.verification_controller());
            step.load().await?;
            let details = step
                .add_holding(HoldingInput {
                    company_name: company,
                    company_id: company_id.map(CompanyId::new),
                    date,
                    amount,
                    doc_url,
                })
                .await?;
            emit(ctx.json, &details, print_details)
        }
        InvestorCommands::Focus {
            firm,
            focus_areas,
            ticket_min,
            ticket_max,
        } => {
            let step = portfolio_step(ctx, ctx.verification_controller());
            step.load().await?;
            let details = step
                .update_focus(firm, focus_areas, ticket_min, ticket_max)
                .await?;
            emit(ctx.json, &details, |details| {
                print_details(details);
                println!("Saved locally; sent with the next holding or `investor finish`.");
            })
        }
        InvestorCommands::Finish => {
            let step = portfolio_step(ctx, ctx.portfolio_controller().await?);
            step.load().await?;
            let snapshot = step.finish().await?;
            fail_on_persist_error(&snapshot)?;
            emit(ctx.json, &snapshot, print_snapshot)
        }
    }
}

fn portfolio_step(
    ctx: &CommandContext<'_>,
    controller: Arc<VerificationController>,
) -> InvestorPortfolioStep {
    let deps = ctx.deps();
    InvestorPortfolioStep::new(
        deps.investor_details.clone(),
        PendingDrafts::new(deps.store.clone()),
        deps.clock.clone(),
        deps.alerts.clone(),
        controller,
    )
}

fn print_details(details: &InvestorDetails) {
    println!("firm:      {}", details.firm.as_deref().unwrap_or("-"));
    if !details.focus_areas.is_empty() {
        println!("focus:     {}", details.focus_areas.join(", "));
    }
    if details.ticket_min.is_some() || details.ticket_max.is_some() {
        let bound = |value: Option<f64>| value.map_or("-".to_string(), |v| v.to_string());
        println!(
            "ticket:    {} .. {}",
            bound(details.ticket_min),
            bound(details.ticket_max)
        );
    }
    println!("holdings:  {}", details.holdings.len());
    for holding in &details.holdings {
        let date = holding
            .date
            .map_or_else(|| "-".to_string(), |date| date.to_string());
        println!("  {date}  {}  {}", holding.company_name, holding.amount);
    }
}
