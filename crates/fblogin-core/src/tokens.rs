//! Token types passed between pipeline stages.

use std::fmt;

use crate::error::{Error, InvalidInputError};
use crate::types::UserId;

/// A Facebook access token together with the user it was issued for.
///
/// Supplied by the login widget after a successful Facebook login. The
/// pipeline reads it for stages 1 and 2 and never persists it.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
///
/// # Example
///
/// ```
/// use fblogin_core::AccessToken;
///
/// let token = AccessToken::new("EAAB...", "1000").unwrap();
/// assert_eq!(token.user_id().as_str(), "1000");
/// ```
#[derive(Clone)]
pub struct AccessToken {
    token: String,
    user_id: UserId,
}

impl AccessToken {
    /// Create a new access token for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or the user id is invalid.
    pub fn new(token: impl Into<String>, user_id: impl AsRef<str>) -> Result<Self, Error> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(InvalidInputError::AccessToken {
                reason: "token cannot be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            token,
            user_id: UserId::new(user_id)?,
        })
    }

    /// Returns the token value for use in provider requests.
    ///
    /// # Security
    ///
    /// Use only when constructing outbound requests.
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Returns the user the token was issued for.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// An attenuated Facebook session token.
///
/// Returned by the session token exchange and consumed only by the
/// credential exchange.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct SessionToken(String);

impl SessionToken {
    /// Create a new session token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use as a subject token.
    ///
    /// # Security
    ///
    /// Use only when constructing the credential exchange request.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}
