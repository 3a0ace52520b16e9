//! Profile command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fblogin_core::ProfileFetcher;

use super::args::FacebookArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub facebook: FacebookArgs,

    /// Pretty-print the profile instead of printing it verbatim
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ProfileArgs) -> Result<()> {
    let token = args.facebook.access_token()?;
    let graph = args.facebook.graph_api()?;

    let profile = graph
        .fetch_profile(&token, token.user_id())
        .await
        .context("Failed to fetch profile")?;

    if args.pretty {
        let value: serde_json::Value =
            serde_json::from_str(profile.as_str()).context("Profile is not valid JSON")?;
        output::json_pretty(&value)?;
    } else {
        println!("{}", profile.as_str());
    }

    Ok(())
}
