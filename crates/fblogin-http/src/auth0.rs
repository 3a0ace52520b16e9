//! Auth0 native social token grant.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use fblogin_core::constants::{FACEBOOK_SUBJECT_TOKEN_TYPE, TOKEN_EXCHANGE_GRANT, TOKEN_PATH};
use fblogin_core::error::{AuthError, ParseError};
use fblogin_core::traits::CredentialExchanger;
use fblogin_core::{Credentials, ProfileDocument, ProviderUrl, Result, SessionToken};

use crate::client::{HttpClient, RawResponse};
use crate::endpoints::{NativeSocialTokenRequest, OAuthErrorResponse, TokenResponse};

/// Auth0 backend for stage 3.
#[derive(Debug, Clone)]
pub struct Auth0Api {
    domain: ProviderUrl,
    client_id: String,
    audience: Option<String>,
    client: HttpClient,
}

impl Auth0Api {
    /// Create a backend for the tenant at `domain` and application `client_id`.
    pub fn new(domain: ProviderUrl, client_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            domain,
            client_id: client_id.into(),
            audience: None,
            client: HttpClient::new()?,
        })
    }

    /// Create a backend that sends requests through `client`.
    pub fn with_client(
        domain: ProviderUrl,
        client_id: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            domain,
            client_id: client_id.into(),
            audience: None,
            client: HttpClient::with_client(client),
        }
    }

    /// Request an access token for the API identified by `audience`.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        let audience = audience.into();
        self.audience = (!audience.is_empty()).then_some(audience);
        self
    }

    /// Returns the tenant URL.
    pub fn domain(&self) -> &ProviderUrl {
        &self.domain
    }

    /// Returns the Auth0 application client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

#[async_trait]
impl CredentialExchanger for Auth0Api {
    #[instrument(
        skip(self, session_token, profile),
        fields(domain = %self.domain, profile_len = profile.len())
    )]
    async fn exchange_for_credentials(
        &self,
        session_token: &SessionToken,
        profile: &ProfileDocument,
        scope: &str,
    ) -> Result<Credentials> {
        debug!("Exchanging session token for credentials");

        let request = NativeSocialTokenRequest {
            grant_type: TOKEN_EXCHANGE_GRANT,
            client_id: &self.client_id,
            subject_token: session_token.as_str(),
            subject_token_type: FACEBOOK_SUBJECT_TOKEN_TYPE,
            scope,
            user_profile: profile.as_str(),
            audience: self.audience.as_deref(),
        };

        let response = self
            .client
            .post_json(&self.domain.endpoint(TOKEN_PATH), &request)
            .await?;

        if !response.is_success() {
            let error = auth_error(&response);
            warn!(%error, "Grant rejected");
            return Err(error.into());
        }

        parse_credentials(&response.body, scope)
    }
}

fn auth_error(response: &RawResponse) -> AuthError {
    match serde_json::from_str::<OAuthErrorResponse>(&response.body) {
        Ok(body) => AuthError::new(response.status, body.error, body.error_description),
        Err(_) => AuthError::new(response.status, None, None),
    }
}

/// Parse a token response. The requested scope stands in when the tenant
/// does not echo the granted one.
fn parse_credentials(body: &str, requested_scope: &str) -> Result<Credentials> {
    let response: TokenResponse =
        serde_json::from_str(body).map_err(|e| ParseError::Malformed {
            message: e.to_string(),
        })?;

    let mut credentials = Credentials::new(response.access_token, response.id_token)?
        .with_scope(response.scope.unwrap_or_else(|| requested_scope.to_string()));

    if let Some(token_type) = response.token_type {
        credentials = credentials.with_token_type(token_type);
    }
    if let Some(refresh_token) = response.refresh_token {
        credentials = credentials.with_refresh_token(refresh_token);
    }
    if let Some(expires_in) = response.expires_in {
        credentials = credentials.with_expires_in(expires_in);
    }

    Ok(credentials)
}
