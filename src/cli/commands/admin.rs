use at_app::usecases::{
    ListPendingHoldings, ListPendingStartups, ListUsers, ReviewHolding, ReviewStartup,
    SetUserBlocked,
};
use at_core::admin::ReviewDecision;
use at_core::{CompanyId, HoldingId, UserId};
use clap::Subcommand;
use serde_json::json;

use super::CommandContext;
use crate::cli::output::emit;

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// List every user
    Users,

    /// Block a user
    Block { user: String },

    /// Unblock a user
    Unblock { user: String },

    /// List startups waiting for review
    Startups,

    ApproveStartup { id: String },

    RejectStartup {
        id: String,

        #[arg(long)]
        reason: String,
    },

    /// List holdings waiting for review
    Holdings,

    ApproveHolding { id: String },

    RejectHolding {
        id: String,

        #[arg(long)]
        reason: String,
    },
}

pub async fn run(ctx: &CommandContext<'_>, command: AdminCommands) -> anyhow::Result<()> {
    ctx.require_session()?;
    let admin = ctx.deps().admin.clone();

    match command {
        AdminCommands::Users => {
            let users = ListUsers::new(admin).execute().await?;
            emit(ctx.json, &users, |users| {
                for user in users {
                    println!(
                        "{}  {}  {}{}",
                        user.id,
                        user.username.as_deref().unwrap_or("-"),
                        user.primary_role(),
                        if user.blocked { "  blocked" } else { "" }
                    );
                }
            })
        }
        AdminCommands::Block { user } => set_blocked(ctx, &user, true).await,
        AdminCommands::Unblock { user } => set_blocked(ctx, &user, false).await,
        AdminCommands::Startups => {
            let pending = ListPendingStartups::new(admin).execute().await?;
            emit(ctx.json, &pending, |pending| {
                for startup in pending {
                    println!(
                        "{}  {}  owner {}",
                        startup.id, startup.details.company_profile.name, startup.owner_id
                    );
                }
            })
        }
        AdminCommands::ApproveStartup { id } => {
            ReviewStartup::new(admin)
                .execute(&CompanyId::new(id.as_str()), ReviewDecision::Approve)
                .await?;
            done(ctx, "startup", &id, "approved")
        }
        AdminCommands::RejectStartup { id, reason } => {
            ReviewStartup::new(admin)
                .execute(&CompanyId::new(id.as_str()), ReviewDecision::Reject { reason })
                .await?;
            done(ctx, "startup", &id, "rejected")
        }
        AdminCommands::Holdings => {
            let pending = ListPendingHoldings::new(admin).execute().await?;
            emit(ctx.json, &pending, |pending| {
                for holding in pending {
                    println!(
                        "{}  {}  {}  investor {}",
                        holding.id,
                        holding.holding.company_name,
                        holding.holding.amount,
                        holding.investor_id
                    );
                }
            })
        }
        AdminCommands::ApproveHolding { id } => {
            ReviewHolding::new(admin)
                .execute(&HoldingId::new(id.as_str()), ReviewDecision::Approve)
                .await?;
            done(ctx, "holding", &id, "approved")
        }
        AdminCommands::RejectHolding { id, reason } => {
            ReviewHolding::new(admin)
                .execute(&HoldingId::new(id.as_str()), ReviewDecision::Reject { reason })
                .await?;
            done(ctx, "holding", &id, "rejected")
        }
    }
}

async fn set_blocked(ctx: &CommandContext<'_>, user: &str, blocked: bool) -> anyhow::Result<()> {
    SetUserBlocked::new(ctx.deps().admin.clone())
        .execute(&UserId::new(user), blocked)
        .await?;
    done(ctx, "user", user, if blocked { "blocked" } else { "unblocked" })
}

fn done(ctx: &CommandContext<'_>, what: &str, id: &str, outcome: &str) -> anyhow::Result<()> {
    emit(
        ctx.json,
        &json!({ "kind": what, "id": id, "result": outcome }),
        |_| println!("{what} {id} {outcome}"),
    )
}
