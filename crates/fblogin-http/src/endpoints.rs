//! Request and response types for the Graph API and Auth0 token endpoint.
//!
//! Request types borrow token values and deliberately do not derive
//! `Debug`, so they cannot end up in logs.

use serde::{Deserialize, Serialize};

// ============================================================================
// Graph API
// ============================================================================

/// Query parameters for the `fb_attenuate_token` exchange.
#[derive(Serialize)]
pub(crate) struct SessionTokenQuery<'a> {
    pub grant_type: &'a str,
    pub fb_exchange_token: &'a str,
    pub client_id: &'a str,
}

/// Query parameters for a user profile request.
#[derive(Serialize)]
pub(crate) struct ProfileQuery<'a> {
    pub access_token: &'a str,
    pub fields: &'a str,
}

/// Graph API error envelope: `{"error": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphErrorEnvelope {
    pub error: GraphErrorBody,
}

/// Graph API error object.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub fbtrace_id: Option<String>,
}

// ============================================================================
// Auth0
// ============================================================================

/// Body of the native social token exchange.
#[derive(Serialize)]
pub(crate) struct NativeSocialTokenRequest<'a> {
    pub grant_type: &'a str,
    pub client_id: &'a str,
    pub subject_token: &'a str,
    pub subject_token_type: &'a str,
    pub scope: &'a str,
    pub user_profile: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<&'a str>,
}

/// Successful response from `/oauth/token`.
#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// OAuth error response: `{"error", "error_description"}`.
#[derive(Debug, Deserialize)]
pub(crate) struct OAuthErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}
