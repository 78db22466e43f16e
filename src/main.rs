//! hovercli - command line client for the Hover API.
//!
//! Authenticates with email/password, caches the bearer token in a local
//! YAML config file, and manages action resources through the REST API.

mod api;
mod auth;
mod cli;
mod commands;
mod config;
mod models;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{ActionsCommand, Cli, Commands};
use config::Config;

/// Initialize the tracing subscriber for logging.
/// Use the RUST_LOG env var to control log level (e.g. RUST_LOG=debug).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        println!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login => commands::login::run(cli.config.as_deref()).await,
        Commands::Actions { command } => {
            let mut config = Config::load(cli.config.as_deref())?;
            match command {
                ActionsCommand::List => commands::actions::list(&mut config).await,
                ActionsCommand::Get { id } => commands::actions::get(&mut config, &id).await,
                ActionsCommand::Create { fields } => {
                    commands::actions::create(&mut config, fields.into()).await
                }
                ActionsCommand::Update { id, fields } => {
                    commands::actions::update(&mut config, &id, fields.into()).await
                }
                ActionsCommand::Delete { id } => commands::actions::delete(&mut config, &id).await,
            }
        }
    }
}
