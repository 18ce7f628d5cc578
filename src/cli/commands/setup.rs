use std::path::PathBuf;

use anyhow::bail;
use at_core::setup::{ProfileSetupState, SetupError};
use at_core::BasicProfile;
use clap::Subcommand;

use super::CommandContext;
use crate::cli::output::emit;

#[derive(Subcommand, Debug)]
pub enum SetupCommands {
    /// Save username, display name, bio and avatar
    Basic {
        #[arg(long)]
        username: String,

        #[arg(long)]
        display_name: String,

        #[arg(long, default_value = "")]
        bio: String,

        /// Avatar image to upload
        #[arg(long)]
        avatar: Option<PathBuf>,
    },

    /// Show which setup step comes next
    Status,
}

pub async fn run(ctx: &CommandContext<'_>, command: SetupCommands) -> anyhow::Result<()> {
    ctx.require_session()?;
    let orchestrator = ctx.setup_orchestrator();
    let state = match command {
        SetupCommands::Status => orchestrator.get_state().await,
        SetupCommands::Basic {
            username,
            display_name,
            bio,
            avatar,
        } => {
            if matches!(
                orchestrator.get_state().await,
                ProfileSetupState::Verification { .. }
            ) {
                orchestrator.edit_basic_info().await;
            }
            let state = orchestrator
                .submit_basic_info(BasicProfile {
                    username,
                    display_name,
                    bio,
                    avatar_path: avatar,
                })
                .await;
            if let ProfileSetupState::BasicInfo { error: Some(error) } = &state {
                match error {
                    SetupError::Invalid(err) => bail!("{err}"),
                    SetupError::SaveFailed { message } => bail!("{message}"),
                }
            }
            state
        }
    };
    emit(ctx.json, &state, print_state)
}

fn print_state(state: &ProfileSetupState) {
    match state {
        ProfileSetupState::BasicInfo { .. } => {
            println!("Next: basic profile (`atmosphere setup basic`).")
        }
        ProfileSetupState::SavingBasicInfo => println!("Saving basic profile..."),
        ProfileSetupState::Verification { role } => {
            println!("Basic profile saved. Next: verification for a {role} account.");
            println!("Run `atmosphere verify status` to see the remaining steps.");
        }
        ProfileSetupState::Done => println!("Profile setup is complete."),
    }
}
