//! Cookies & Cream operator panel
//!
//! Command-line front end for the ordering API: each invocation mounts the
//! panel (initial flavor and order fetch) unless the command is purely
//! local, runs one command and prints the notifications it produced.

mod cli;
mod logging;
mod render;

use std::process::ExitCode;

use clap::Parser;
use cream_client::Panel;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let config = cli.client_config();
    tracing::info!(base_url = %config.base_url, "Cream panel starting...");

    let panel = Panel::connect(&config)?;
    if cli.command.needs_mount() {
        panel.mount().await;
    }

    let ok = cli::run(&panel, cli.command).await;
    render::notifications(&panel.notifications().snapshot());

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
