//! fblogin - CLI tool for the Facebook to Auth0 token exchange.
//!
//! Stands in for the mobile login widget: it takes a Facebook access token
//! and user id obtained elsewhere and runs them through the `fblogin`
//! pipeline, printing the resulting Auth0 credentials.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Exchange(args) => commands::exchange::run(args).await,
        Commands::SessionToken(args) => commands::session_token::run(args).await,
        Commands::Profile(args) => commands::profile::run(args).await,
        Commands::Permissions(args) => commands::permissions::run(args),
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so command output stays pipeable
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
