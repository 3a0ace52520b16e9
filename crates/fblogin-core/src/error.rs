//! Error types for the fblogin pipeline.
//!
//! Every stage reports failures through the unified [`Error`] type, with
//! explicit variants for transport, provider, parse, authentication and
//! input validation errors. The orchestrator wraps the first failing stage's
//! error in a [`PipelineError`] tagged with the stage that produced it.

use std::fmt;
use thiserror::Error;

use crate::pipeline::Stage;

/// The unified error type for fblogin stage operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The Graph API returned a structured error.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// A response body was malformed or missing an expected field.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The identity provider rejected the grant.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Input validation errors (empty token, bad user id, bad URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Error returned by a session token exchanger.
pub type ExchangeError = Error;

/// Error returned by a profile fetcher.
pub type FetchError = Error;

impl Error {
    /// Returns true if this is a transport-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns true if the remote provider reported a structured error.
    pub fn is_provider(&self) -> bool {
        matches!(self, Error::Provider(_))
    }

    /// Returns true if a response could not be interpreted.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Returns true if the identity provider rejected the grant.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth(_))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A structured error reported by the Graph API.
///
/// Mirrors the `{"error": {"message", "type", "code", "fbtrace_id"}}` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    /// HTTP status code.
    pub status: u16,
    /// Numeric provider error code (if present).
    pub code: Option<i64>,
    /// Provider error type, e.g. `OAuthException`.
    pub kind: Option<String>,
    /// Error message from the provider.
    pub message: Option<String>,
    /// Provider trace identifier for support requests.
    pub trace_id: Option<String>,
}

impl ProviderError {
    /// Create a provider error carrying only an HTTP status.
    pub fn from_status(status: u16) -> Self {
        Self {
            status,
            code: None,
            kind: None,
            message: None,
            trace_id: None,
        }
    }

    /// Returns true if the provider reported an invalid or expired token.
    ///
    /// The Graph API uses code 190 for every access token problem.
    pub fn is_invalid_token(&self) -> bool {
        self.code == Some(190)
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref kind) = self.kind {
            write!(f, " [{}]", kind)?;
        }
        if let Some(code) = self.code {
            write!(f, " (code {})", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProviderError {}

/// Response interpretation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The body parsed but a required field was absent.
    #[error("missing field '{field}'")]
    MissingField { field: String },

    /// The body could not be parsed.
    #[error("malformed body: {message}")]
    Malformed { message: String },

    /// Credentials carried neither an access token nor an ID token.
    #[error("no access token or ID token was issued")]
    NoIssuedToken,
}

/// Rejection of a grant by the identity provider.
///
/// Mirrors the OAuth `{"error", "error_description"}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    /// HTTP status code.
    pub status: u16,
    /// OAuth error code, e.g. `invalid_grant`.
    pub error: Option<String>,
    /// Human readable description.
    pub description: Option<String>,
}

impl AuthError {
    /// Create a new authentication error.
    pub fn new(status: u16, error: Option<String>, description: Option<String>) -> Self {
        Self {
            status,
            error,
            description,
        }
    }

    /// Returns true if the subject token or grant was rejected.
    pub fn is_invalid_grant(&self) -> bool {
        self.error.as_deref() == Some("invalid_grant")
    }

    /// Returns true if the request was refused by a rule or connection setting.
    pub fn is_access_denied(&self) -> bool {
        self.status == 403
            || self.error.as_deref() == Some("access_denied")
            || self.error.as_deref() == Some("unauthorized_client")
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref description) = self.description {
            write!(f, ": {}", description)?;
        }
        Ok(())
    }
}

impl std::error::Error for AuthError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid access token.
    #[error("invalid access token: {reason}")]
    AccessToken { reason: String },

    /// Invalid user identifier.
    #[error("invalid user id '{value}': {reason}")]
    UserId { value: String, reason: String },

    /// Invalid provider URL format.
    #[error("invalid provider URL '{value}': {reason}")]
    ProviderUrl { value: String, reason: String },
}

/// A pipeline failure, tagged with the stage that produced it.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Stage 1 failed to obtain a session token.
    #[error("session token exchange failed: {0}")]
    SessionExchangeFailed(#[source] Error),

    /// Stage 2 failed to fetch the user profile.
    #[error("profile fetch failed: {0}")]
    ProfileFetchFailed(#[source] Error),

    /// Stage 3 failed to obtain credentials.
    #[error("credential exchange failed: {0}")]
    CredentialExchangeFailed(#[source] Error),
}

impl PipelineError {
    /// Wrap a stage error in the envelope for `stage`.
    pub fn at(stage: Stage, cause: Error) -> Self {
        match stage {
            Stage::SessionExchange => PipelineError::SessionExchangeFailed(cause),
            Stage::ProfileFetch => PipelineError::ProfileFetchFailed(cause),
            Stage::CredentialExchange => PipelineError::CredentialExchangeFailed(cause),
        }
    }

    /// Returns the stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::SessionExchangeFailed(_) => Stage::SessionExchange,
            PipelineError::ProfileFetchFailed(_) => Stage::ProfileFetch,
            PipelineError::CredentialExchangeFailed(_) => Stage::CredentialExchange,
        }
    }

    /// Returns the error reported by the failing stage.
    pub fn cause(&self) -> &Error {
        match self {
            PipelineError::SessionExchangeFailed(e)
            | PipelineError::ProfileFetchFailed(e)
            | PipelineError::CredentialExchangeFailed(e) => e,
        }
    }

    /// Consume the envelope and return the stage error.
    pub fn into_cause(self) -> Error {
        match self {
            PipelineError::SessionExchangeFailed(e)
            | PipelineError::ProfileFetchFailed(e)
            | PipelineError::CredentialExchangeFailed(e) => e,
        }
    }
}
