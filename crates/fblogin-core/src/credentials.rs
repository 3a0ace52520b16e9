//! Credentials issued by the identity provider.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

use crate::error::{Error, ParseError};

/// Credentials issued by the Auth0 native social token grant.
///
/// At least one of the access token or ID token is always present and
/// non-empty. The caller owns the value once the pipeline returns; the
/// pipeline keeps no reference to it.
///
/// # Security
///
/// Token values are never exposed in Debug output.
///
/// # Example
///
/// ```
/// use fblogin_core::Credentials;
///
/// let creds = Credentials::new(Some("at-1".to_string()), None)
///     .unwrap()
///     .with_scope("openid email");
/// assert_eq!(creds.access_token(), Some("at-1"));
/// assert_eq!(creds.scope(), Some("openid email"));
/// ```
#[derive(Clone, Serialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
    token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
}

impl Credentials {
    /// Create credentials from the issued access and ID tokens.
    ///
    /// Empty token strings are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoIssuedToken`] if neither token is present.
    pub fn new(access_token: Option<String>, id_token: Option<String>) -> Result<Self, Error> {
        let access_token = access_token.filter(|t| !t.is_empty());
        let id_token = id_token.filter(|t| !t.is_empty());

        if access_token.is_none() && id_token.is_none() {
            return Err(ParseError::NoIssuedToken.into());
        }

        Ok(Self {
            access_token,
            id_token,
            refresh_token: None,
            token_type: "Bearer".to_string(),
            scope: None,
            expires_at: None,
        })
    }

    /// Set the refresh token (issued when `offline_access` was granted).
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        let refresh_token = refresh_token.into();
        self.refresh_token = (!refresh_token.is_empty()).then_some(refresh_token);
        self
    }

    /// Set the token type reported by the provider.
    pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = token_type.into();
        self
    }

    /// Set the granted scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the expiry from a lifetime in seconds, counted from now.
    ///
    /// Lifetimes too large to represent leave the expiry unknown.
    pub fn with_expires_in(mut self, seconds: i64) -> Self {
        self.expires_at =
            Duration::try_seconds(seconds).and_then(|d| Utc::now().checked_add_signed(d));
        self
    }

    /// Set an absolute expiry.
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Returns the access token, if one was issued.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Returns the ID token, if one was issued.
    pub fn id_token(&self) -> Option<&str> {
        self.id_token.as_deref()
    }

    /// Returns the refresh token, if one was issued.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Returns the token type, usually `Bearer`.
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Returns the granted scope, if reported.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Returns when the access token expires, if known.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Returns true if the access token has expired.
    ///
    /// Credentials without an expiry never report as expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| at <= Utc::now())
    }
}

fn redact(value: &Option<String>) -> &'static str {
    match value {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

// Intentionally hide every token in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &redact(&self.access_token))
            .field("id_token", &redact(&self.id_token))
            .field("refresh_token", &redact(&self.refresh_token))
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
