//! Argument groups shared by several subcommands.

use anyhow::{Context, Result};
use clap::Args;

use fblogin_core::constants::{DEFAULT_GRAPH_URL, DEFAULT_SCOPE};
use fblogin_core::{AccessToken, ProviderUrl};
use fblogin_http::GraphApi;

/// The Facebook login result and Graph API settings.
#[derive(Args, Debug)]
pub struct FacebookArgs {
    /// Facebook access token obtained by the login widget
    #[arg(long, env = "FBLOGIN_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    /// Facebook user id the token was issued for
    #[arg(long, env = "FBLOGIN_USER_ID")]
    pub user_id: String,

    /// Graph API base URL
    #[arg(long, env = "FBLOGIN_GRAPH_URL", default_value = DEFAULT_GRAPH_URL)]
    pub graph_url: String,

    /// Graph API version to pin requests to (e.g. v19.0)
    #[arg(long, env = "FBLOGIN_GRAPH_VERSION")]
    pub graph_version: Option<String>,
}

impl FacebookArgs {
    pub fn access_token(&self) -> Result<AccessToken> {
        AccessToken::new(&self.access_token, &self.user_id).context("Invalid Facebook login")
    }

    pub fn graph_url(&self) -> Result<ProviderUrl> {
        ProviderUrl::new(&self.graph_url).context("Invalid Graph API URL")
    }

    pub fn graph_api(&self) -> Result<GraphApi> {
        let mut graph = GraphApi::new(self.graph_url()?).context("Failed to create HTTP client")?;
        if let Some(version) = &self.graph_version {
            graph = graph.with_version(version);
        }
        Ok(graph)
    }
}

/// Facebook app registration.
#[derive(Args, Debug)]
pub struct AppArgs {
    /// Facebook app id
    #[arg(long, env = "FBLOGIN_FACEBOOK_APP_ID")]
    pub facebook_app_id: String,
}

/// Auth0 tenant and application settings.
#[derive(Args, Debug)]
pub struct Auth0Args {
    /// Auth0 tenant domain (e.g. example.eu.auth0.com) or URL
    #[arg(long, env = "FBLOGIN_AUTH0_DOMAIN")]
    pub auth0_domain: String,

    /// Auth0 application client id
    #[arg(long, env = "FBLOGIN_AUTH0_CLIENT_ID")]
    pub auth0_client_id: String,

    /// Scope to request
    #[arg(long, env = "FBLOGIN_SCOPE", default_value = DEFAULT_SCOPE)]
    pub scope: String,

    /// API audience to request an access token for
    #[arg(long, env = "FBLOGIN_AUDIENCE")]
    pub audience: Option<String>,
}

impl Auth0Args {
    pub fn domain(&self) -> Result<ProviderUrl> {
        ProviderUrl::from_domain(&self.auth0_domain).context("Invalid Auth0 domain")
    }
}
