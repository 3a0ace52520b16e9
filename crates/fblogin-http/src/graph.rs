//! Facebook Graph API stages: session token exchange and profile fetch.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use fblogin_core::constants::{
    ACCESS_TOKEN_PATH, DEFAULT_GRAPH_URL, FB_ATTENUATE_TOKEN_GRANT, PROFILE_FIELDS,
};
use fblogin_core::error::{ParseError, ProviderError};
use fblogin_core::traits::{ProfileFetcher, SessionTokenExchanger};
use fblogin_core::{AccessToken, ProfileDocument, ProviderUrl, Result, SessionToken, UserId};

use crate::client::{HttpClient, RawResponse};
use crate::endpoints::{GraphErrorEnvelope, ProfileQuery, SessionTokenQuery};

/// Graph API backend for stages 1 and 2.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GraphApi {
    base: ProviderUrl,
    version: Option<String>,
    client: HttpClient,
}

impl GraphApi {
    /// Create a Graph API backend for the given base URL.
    pub fn new(base: ProviderUrl) -> Result<Self> {
        Ok(Self {
            base,
            version: None,
            client: HttpClient::new()?,
        })
    }

    /// Create a backend for `https://graph.facebook.com`.
    pub fn facebook() -> Result<Self> {
        Self::new(ProviderUrl::new(DEFAULT_GRAPH_URL)?)
    }

    /// Create a backend that sends requests through `client`.
    pub fn with_client(base: ProviderUrl, client: reqwest::Client) -> Self {
        Self {
            base,
            version: None,
            client: HttpClient::with_client(client),
        }
    }

    /// Pin requests to a Graph API version such as `v19.0`.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.version = (!version.is_empty()).then_some(version);
        self
    }

    /// Returns the Graph API base URL.
    pub fn url(&self) -> &ProviderUrl {
        &self.base
    }

    /// Returns the pinned Graph API version, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn endpoint(&self, path: &str) -> String {
        match self.version {
            Some(ref version) => self.base.endpoint(&format!("{}/{}", version, path)),
            None => self.base.endpoint(path),
        }
    }
}

#[async_trait]
impl SessionTokenExchanger for GraphApi {
    #[instrument(skip(self, token), fields(graph = %self.base, user_id = %token.user_id()))]
    async fn exchange(&self, token: &AccessToken, client_id: &str) -> Result<SessionToken> {
        debug!("Exchanging access token for session token");

        let query = SessionTokenQuery {
            grant_type: FB_ATTENUATE_TOKEN_GRANT,
            fb_exchange_token: token.as_str(),
            client_id,
        };

        let response = self
            .client
            .get(&self.endpoint(ACCESS_TOKEN_PATH), &query)
            .await?;

        check_graph_error(&response)?;
        extract_access_token(&response.body)
    }
}

#[async_trait]
impl ProfileFetcher for GraphApi {
    #[instrument(skip(self, token), fields(graph = %self.base, %user_id))]
    async fn fetch_profile(
        &self,
        token: &AccessToken,
        user_id: &UserId,
    ) -> Result<ProfileDocument> {
        debug!("Fetching user profile");

        let query = ProfileQuery {
            access_token: token.as_str(),
            fields: PROFILE_FIELDS,
        };

        let response = self
            .client
            .get(&self.endpoint(user_id.as_str()), &query)
            .await?;

        check_graph_error(&response)?;
        ProfileDocument::from_json_object(response.body)
    }
}

/// Turn an error status, or a success body carrying an `error` object, into
/// a [`ProviderError`].
fn check_graph_error(response: &RawResponse) -> Result<()> {
    let envelope = serde_json::from_str::<GraphErrorEnvelope>(&response.body).ok();

    if response.is_success() && envelope.is_none() {
        return Ok(());
    }

    let error = match envelope {
        Some(GraphErrorEnvelope { error }) => ProviderError {
            status: response.status,
            code: error.code,
            kind: error.kind,
            message: error.message,
            trace_id: error.fbtrace_id,
        },
        None => ProviderError::from_status(response.status),
    };

    warn!(%error, "Graph API error");
    Err(error.into())
}

fn extract_access_token(body: &str) -> Result<SessionToken> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ParseError::Malformed {
            message: e.to_string(),
        })?;

    if !value.is_object() {
        return Err(ParseError::Malformed {
            message: "expected a JSON object".to_string(),
        }
        .into());
    }

    match value.get("access_token").and_then(|v| v.as_str()) {
        Some(token) if !token.is_empty() => Ok(SessionToken::new(token)),
        _ => Err(ParseError::MissingField {
            field: "access_token".to_string(),
        }
        .into()),
    }
}
