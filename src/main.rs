//! mapper-admin: terminal admin console for the entity-mapper plugin REST API.
//! Modularized for maintainability; wire shapes live in `mapper-api-types`.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod audit;
mod client;
mod handlers;
mod notify;
mod print;
mod settings;
mod telemetry;

use std::process::ExitCode;

use clap::Parser;

use args::{Cli, Commands};
use client::{CliError, build_ctx_from_cli};
use handlers::{audit as audit_handlers, mappings, settings as settings_handlers};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Single sink for every failure; nothing propagates as a panic.
            notify::error_flag(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = build_ctx_from_cli(&cli)?;

    match cli.command {
        Commands::Mappings(cmd) => mappings::handle(&ctx, cmd.action).await?,
        Commands::Settings(cmd) => settings_handlers::handle(&ctx, cmd.action).await?,
        Commands::Audit(cmd) => audit_handlers::handle(&ctx, cmd.action).await?,
    }

    Ok(())
}
