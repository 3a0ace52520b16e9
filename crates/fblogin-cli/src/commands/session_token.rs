//! Session token command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use fblogin_core::SessionTokenExchanger;

use super::args::{AppArgs, FacebookArgs};
use crate::output;

#[derive(Args, Debug)]
pub struct SessionTokenArgs {
    #[command(flatten)]
    pub facebook: FacebookArgs,

    #[command(flatten)]
    pub app: AppArgs,

    /// Print the session token instead of masking it
    #[arg(long)]
    pub show_tokens: bool,
}

pub async fn run(args: SessionTokenArgs) -> Result<()> {
    let token = args.facebook.access_token()?;
    let graph = args.facebook.graph_api()?;

    eprintln!("{}", "Requesting session token...".dimmed());

    let session_token = graph
        .exchange(&token, &args.app.facebook_app_id)
        .await
        .context("Failed to exchange access token")?;

    output::success("Obtained session token");
    output::secret("Session token", session_token.as_str(), args.show_tokens);

    Ok(())
}
