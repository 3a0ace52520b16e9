//! Wiring of the HTTP stages into a ready-to-run pipeline.

use fblogin_core::constants::DEFAULT_GRAPH_URL;
use fblogin_core::{Pipeline, PipelineConfig, ProviderUrl, Result};

use crate::auth0::Auth0Api;
use crate::client::default_client;
use crate::graph::GraphApi;

/// A pipeline backed by the Graph API and an Auth0 tenant.
pub type HttpPipeline = Pipeline<GraphApi, GraphApi, Auth0Api>;

/// Builder for [`HttpPipeline`].
///
/// # Example
///
/// ```no_run
/// use fblogin_core::{AccessToken, ProviderUrl};
/// use fblogin_http::HttpPipelineBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = HttpPipelineBuilder::new(
///     "facebook-app-id",
///     ProviderUrl::from_domain("tenant.auth0.com")?,
///     "auth0-client-id",
/// )
/// .build()?;
///
/// let token = AccessToken::new("EAAB...", "1000")?;
/// let credentials = pipeline.run(&token).await?;
/// println!("{:?}", credentials);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpPipelineBuilder {
    facebook_app_id: String,
    auth0_domain: ProviderUrl,
    auth0_client_id: String,
    graph_url: Option<ProviderUrl>,
    graph_version: Option<String>,
    scope: Option<String>,
    audience: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl HttpPipelineBuilder {
    /// Start a builder for the Facebook app and Auth0 application.
    pub fn new(
        facebook_app_id: impl Into<String>,
        auth0_domain: ProviderUrl,
        auth0_client_id: impl Into<String>,
    ) -> Self {
        Self {
            facebook_app_id: facebook_app_id.into(),
            auth0_domain,
            auth0_client_id: auth0_client_id.into(),
            graph_url: None,
            graph_version: None,
            scope: None,
            audience: None,
            http_client: None,
        }
    }

    /// Use a Graph API base URL other than `https://graph.facebook.com`.
    pub fn graph_url(mut self, url: ProviderUrl) -> Self {
        self.graph_url = Some(url);
        self
    }

    /// Pin Graph API requests to a version such as `v19.0`.
    pub fn graph_version(mut self, version: impl Into<String>) -> Self {
        self.graph_version = Some(version.into());
        self
    }

    /// Override the scope requested from Auth0.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Request an access token for an Auth0 API audience.
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Share a caller-configured reqwest client across all stages.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the default Graph URL is invalid or the HTTP
    /// client cannot be created.
    pub fn build(self) -> Result<HttpPipeline> {
        let graph_url = match self.graph_url {
            Some(url) => url,
            None => ProviderUrl::new(DEFAULT_GRAPH_URL)?,
        };

        // Both backends share one connection pool
        let client = match self.http_client {
            Some(client) => client,
            None => default_client()?,
        };

        let mut graph = GraphApi::with_client(graph_url, client.clone());
        let mut auth0 = Auth0Api::with_client(self.auth0_domain, self.auth0_client_id, client);

        if let Some(version) = self.graph_version {
            graph = graph.with_version(version);
        }
        if let Some(audience) = self.audience {
            auth0 = auth0.with_audience(audience);
        }

        let mut config = PipelineConfig::new(self.facebook_app_id);
        if let Some(scope) = self.scope {
            config = config.with_scope(scope);
        }

        Ok(Pipeline::new(graph.clone(), graph, auth0, config))
    }
}
