use anyhow::{bail, Context};
use at_app::usecases::KycStep;
use at_core::kyc::is_completion_url;
use at_core::setup::ProfileSetupState;
use at_core::verification::VerificationStage;
use clap::Subcommand;
use serde_json::json;

use super::{fail_on_persist_error, CommandContext};
use crate::cli::output::{emit, print_snapshot};

#[derive(Subcommand, Debug)]
pub enum VerifyCommands {
    /// Show the verification steps and their state
    Status,

    /// Print the identity verification page to open in a browser
    KycUrl,

    /// Report the URL the identity provider redirected to
    KycCallback {
        url: String,
    },

    /// Finish verification once every step is done
    Complete,
}

pub async fn run(ctx: &CommandContext<'_>, command: VerifyCommands) -> anyhow::Result<()> {
    ctx.require_session()?;
    let controller = ctx.verification_controller();
    let loaded = controller
        .load()
        .await
        .context("failed to load verification state")?;

    match command {
        VerifyCommands::Status => emit(ctx.json, &loaded, print_snapshot),
        VerifyCommands::KycUrl => {
            let url = &ctx.runtime.config.kyc_provider_url;
            if url.is_empty() {
                bail!("no identity provider configured; set [kyc] provider_url in config.toml");
            }
            emit(ctx.json, &json!({ "url": url }), |_| println!("{url}"))
        }
        VerifyCommands::KycCallback { url } => {
            if !is_completion_url(&url) {
                bail!("{url} is not an identity verification completion URL");
            }
            if loaded.kyc_completed {
                return emit(ctx.json, &loaded, |snapshot| {
                    println!("Identity verification was already recorded.");
                    print_snapshot(snapshot);
                });
            }
            let step = KycStep::new(ctx.runtime.config.kyc_provider_url.clone(), controller);
            step.open().await;
            let snapshot = step
                .on_navigation(&url)
                .await
                .context("identity verification was not reported")?;
            fail_on_persist_error(&snapshot)?;
            emit(ctx.json, &snapshot, print_snapshot)
        }
        VerifyCommands::Complete => {
            // Seed the wizard before the final update so it finishes from
            // the verification step.
            let orchestrator = ctx.setup_orchestrator();
            orchestrator.get_state().await;
            let snapshot = controller.complete_setup().await;
            fail_on_persist_error(&snapshot)?;
            if snapshot.stage != VerificationStage::Complete {
                bail!("finish every verification step first");
            }
            let state = orchestrator.verification_finished().await;
            emit(ctx.json, &snapshot, |_| {
                if state == ProfileSetupState::Done {
                    println!("Verification complete. Welcome to Atmosphere.");
                } else {
                    println!("Verification saved.");
                }
            })
        }
    }
}
