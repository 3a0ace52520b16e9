//! Exchange command implementation.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use tracing::debug;

use fblogin_core::{Credentials, PipelineState};
use fblogin_http::HttpPipelineBuilder;

use super::args::{AppArgs, Auth0Args, FacebookArgs};
use crate::output;

#[derive(Args, Debug)]
pub struct ExchangeArgs {
    #[command(flatten)]
    pub facebook: FacebookArgs,

    #[command(flatten)]
    pub app: AppArgs,

    #[command(flatten)]
    pub auth0: Auth0Args,

    /// Print the credentials as JSON
    #[arg(long)]
    pub json: bool,

    /// Print token values instead of masking them
    #[arg(long)]
    pub show_tokens: bool,

    /// Print each pipeline state to stderr as it is entered
    #[arg(long)]
    pub trace_states: bool,
}

pub async fn run(args: ExchangeArgs) -> Result<()> {
    let token = args.facebook.access_token()?;

    let mut builder = HttpPipelineBuilder::new(
        &args.app.facebook_app_id,
        args.auth0.domain()?,
        &args.auth0.auth0_client_id,
    )
    .graph_url(args.facebook.graph_url()?)
    .scope(&args.auth0.scope);

    if let Some(version) = &args.facebook.graph_version {
        builder = builder.graph_version(version);
    }
    if let Some(audience) = &args.auth0.audience {
        builder = builder.audience(audience);
    }

    let pipeline = builder.build().context("Failed to create pipeline")?;
    debug!(scope = pipeline.config().scope(), "Pipeline ready");

    if !args.json {
        eprintln!("{}", "Exchanging tokens...".dimmed());
    }

    let trace_states = args.trace_states;
    let result = pipeline
        .run_observed(&token, |state: &PipelineState| {
            if trace_states {
                eprintln!("{} {}", "→".dimmed(), state);
            }
        })
        .await;

    let credentials = match result {
        Ok(credentials) => credentials,
        Err(e) => {
            output::error(&format!("Exchange failed at stage '{}'", e.stage()));
            if e.cause().is_auth() {
                output::error("Auth0 rejected the grant. Is Facebook native login enabled?");
            }
            return Err(e.into());
        }
    };

    if args.json {
        return output::json_pretty(&credentials);
    }

    print_credentials(&credentials, args.show_tokens);
    Ok(())
}

fn print_credentials(credentials: &Credentials, show_tokens: bool) {
    output::success("Logged in to Auth0");
    println!();

    output::field("Token type", credentials.token_type());
    if let Some(scope) = credentials.scope() {
        output::field("Scope", scope);
    }
    if let Some(expires_at) = credentials.expires_at() {
        let minutes = (expires_at - Utc::now()).num_minutes();
        output::field(
            "Expires",
            &format!("{} (in {} min)", expires_at.to_rfc3339(), minutes),
        );
    }
    if let Some(token) = credentials.access_token() {
        output::secret("Access token", token, show_tokens);
    }
    if let Some(token) = credentials.id_token() {
        output::secret("ID token", token, show_tokens);
    }
    if let Some(token) = credentials.refresh_token() {
        output::secret("Refresh token", token, show_tokens);
    }
}
