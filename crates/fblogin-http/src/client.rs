//! Thin HTTP client shared by the Graph API and Auth0 stages.

use serde::Serialize;
use tracing::{debug, trace};

use fblogin_core::Result;
use fblogin_core::error::TransportError;

pub(crate) const USER_AGENT: &str = concat!("fblogin/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed HTTP exchange.
///
/// Bodies are read in full as text so stages can hand them on verbatim
/// or interpret them as they see fit.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client for provider requests.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client with the crate's user agent.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: default_client()?,
        })
    }

    /// Wrap a caller-configured client (timeouts, proxies).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Issue a GET request with query parameters.
    ///
    /// Parameters usually carry tokens and are never logged.
    pub async fn get<Q>(&self, url: &str, params: &Q) -> Result<RawResponse>
    where
        Q: Serialize + ?Sized,
    {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;

        Self::read(response).await
    }

    /// Issue a POST request with a JSON body.
    pub async fn post_json<B>(&self, url: &str, body: &B) -> Result<RawResponse>
    where
        B: Serialize + ?Sized,
    {
        debug!(%url, "POST");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        Self::read(response).await
    }

    async fn read(response: reqwest::Response) -> Result<RawResponse> {
        let status = response.status().as_u16();
        trace!(status, "response");

        let body = response.text().await.map_err(transport_error)?;
        Ok(RawResponse { status, body })
    }
}

/// Build a reqwest client carrying the crate's user agent.
pub(crate) fn default_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(transport_error)
}

/// Map a reqwest failure onto the transport error taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> fblogin_core::Error {
    let err = if err.is_timeout() {
        TransportError::Timeout {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    err.into()
}
