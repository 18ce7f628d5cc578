//! Command line front end.

pub mod commands;
pub mod output;
pub mod ports;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{admin, auth, content, investor, setup, startup, verify};

/// Atmosphere client
#[derive(Parser, Debug)]
#[command(name = "atmosphere")]
#[command(about = "Atmosphere network client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ATMOSPHERE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also print logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with email and password
    Login(auth::LoginArgs),

    /// Create an account
    Register(auth::RegisterArgs),

    /// Send a password reset email
    ForgotPassword {
        email: String,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in user and where the app would route them
    Whoami,

    /// Show or override the backend base URL
    BaseUrl {
        /// New base URL
        url: Option<String>,

        /// Remove the override and use the configured URL
        #[arg(long, conflicts_with = "url")]
        reset: bool,
    },

    /// List your posts
    Posts,

    /// Show the comments of a reel
    Comments {
        reel: String,
    },

    /// Profile setup wizard
    Setup {
        #[command(subcommand)]
        command: setup::SetupCommands,
    },

    /// Identity and portfolio verification
    Verify {
        #[command(subcommand)]
        command: verify::VerifyCommands,
    },

    /// Investor portfolio
    Investor {
        #[command(subcommand)]
        command: investor::InvestorCommands,
    },

    /// Startup portfolio
    Startup {
        #[command(subcommand)]
        command: startup::StartupCommands,
    },

    /// Moderation (admin accounts only)
    Admin {
        #[command(subcommand)]
        command: admin::AdminCommands,
    },
}
