//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::exchange::ExchangeArgs;
use crate::commands::permissions::PermissionsArgs;
use crate::commands::profile::ProfileArgs;
use crate::commands::session_token::SessionTokenArgs;

/// Exchange a Facebook access token for Auth0 credentials.
#[derive(Parser, Debug)]
#[command(name = "fblogin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full exchange: session token, profile, credentials
    Exchange(ExchangeArgs),

    /// Exchange an access token for a Facebook session token only
    SessionToken(SessionTokenArgs),

    /// Fetch the raw profile document only
    Profile(ProfileArgs),

    /// Show the Facebook permissions and constants the exchange relies on
    Permissions(PermissionsArgs),
}
