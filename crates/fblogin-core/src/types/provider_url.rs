//! Provider URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL for a remote provider (Graph API or Auth0 tenant).
///
/// URLs must use HTTPS, except for localhost where HTTP is allowed so the
/// stages can be exercised against a local mock server.
///
/// # Example
///
/// ```
/// use fblogin_core::ProviderUrl;
///
/// let graph = ProviderUrl::new("https://graph.facebook.com").unwrap();
/// assert_eq!(graph.endpoint("oauth/access_token"),
///            "https://graph.facebook.com/oauth/access_token");
///
/// let tenant = ProviderUrl::from_domain("example.eu.auth0.com").unwrap();
/// assert_eq!(tenant.as_str(), "https://example.eu.auth0.com/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProviderUrl(Url);

impl ProviderUrl {
    /// Create a new provider URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ProviderUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Create a provider URL from a bare domain such as `tenant.auth0.com`.
    ///
    /// Values that already carry a scheme are parsed unchanged.
    pub fn from_domain(domain: impl AsRef<str>) -> Result<Self, Error> {
        let domain = domain.as_ref().trim();
        if domain.contains("://") {
            Self::new(domain)
        } else {
            Self::new(format!("https://{}", domain))
        }
    }

    /// Returns the full URL for a path below this base.
    pub fn endpoint(&self, path: &str) -> String {
        // The URL crate always adds a trailing slash to root paths
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ProviderUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ProviderUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(InvalidInputError::ProviderUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::ProviderUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ProviderUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProviderUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ProviderUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ProviderUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ProviderUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ProviderUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
