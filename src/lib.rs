//! Atmosphere command line client.
//!
//! `bootstrap` wires configuration, logging and adapters; `cli` maps
//! subcommands onto the use cases in `at-app`.

pub mod bootstrap;
pub mod cli;

use std::sync::Arc;

use tracing::{info, warn};

use bootstrap::{
    init_tracing_subscriber, resolve_config, resolve_data_dir, wire_dependencies, HostPorts,
};
use cli::commands::{run_command, CommandContext};
use cli::ports::{LoggingEvents, QueuedPicker, TerminalAlerts};
use cli::Cli;

/// Run one CLI invocation to completion.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir()?;
    let config = resolve_config(cli.config.clone(), &data_dir)?;

    if let Err(err) = init_tracing_subscriber(&config.data_dir, cli.verbose) {
        eprintln!("warning: logging disabled: {err:#}");
    }
    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api_base_url,
        "atmosphere starting"
    );

    let picker = Arc::new(QueuedPicker::default());
    let events = Arc::new(LoggingEvents);
    let host = HostPorts {
        alerts: Arc::new(TerminalAlerts),
        picker: picker.clone(),
        setup_events: events.clone(),
        verification_events: events,
    };
    let runtime = wire_dependencies(config, host).await?;

    let ctx = CommandContext {
        runtime: &runtime,
        picker,
        json: cli.json,
    };
    let result = run_command(cli.command, &ctx).await;
    if let Err(err) = &result {
        warn!(error = %format!("{err:#}"), "command failed");
    }
    result
}
