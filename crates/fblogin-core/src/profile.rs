//! Raw user profile document.

use std::fmt;

use crate::error::{Error, ParseError};

/// A user profile document exactly as returned by the Graph API.
///
/// The pipeline forwards it to the identity provider without interpreting
/// its fields. Debug output shows only the document length since the body
/// contains personal data.
#[derive(Clone, PartialEq, Eq)]
pub struct ProfileDocument(String);

impl ProfileDocument {
    /// Wrap a raw profile body without inspecting it.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Wrap a raw profile body after checking it is a JSON object.
    ///
    /// The original text is kept byte for byte; it is never re-serialized.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Malformed`] if the body is not a JSON object.
    pub fn from_json_object(raw: impl Into<String>) -> Result<Self, Error> {
        let raw = raw.into();
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Object(_)) => Ok(Self(raw)),
            Ok(_) => Err(ParseError::Malformed {
                message: "profile is not a JSON object".to_string(),
            }
            .into()),
            Err(e) => Err(ParseError::Malformed {
                message: format!("profile is not valid JSON: {}", e),
            }
            .into()),
        }
    }

    /// Returns the verbatim profile body.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the body in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the body is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ProfileDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileDocument")
            .field("len", &self.0.len())
            .finish()
    }
}
