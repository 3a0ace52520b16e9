//! Fixed protocol constants for the Facebook to Auth0 exchange.

// ============================================================================
// Facebook Graph API
// ============================================================================

/// Default Graph API base URL.
pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com";

/// Graph path of the token exchange endpoint.
pub const ACCESS_TOKEN_PATH: &str = "oauth/access_token";

/// Grant type that attenuates a Facebook access token into a session token.
pub const FB_ATTENUATE_TOKEN_GRANT: &str = "fb_attenuate_token";

/// Profile fields requested from the Graph API.
pub const PROFILE_FIELDS: &str = "first_name,last_name,email";

/// Permissions the login widget must request before the pipeline runs.
pub const FACEBOOK_PERMISSIONS: [&str; 2] = ["public_profile", "email"];

// ============================================================================
// Auth0
// ============================================================================

/// Path of the Auth0 token endpoint.
pub const TOKEN_PATH: &str = "oauth/token";

/// OAuth 2.0 token exchange grant type (RFC 8693).
pub const TOKEN_EXCHANGE_GRANT: &str = "urn:ietf:params:oauth:grant-type:token-exchange";

/// Subject token type identifying a Facebook session token with profile info.
pub const FACEBOOK_SUBJECT_TOKEN_TYPE: &str =
    "http://auth0.com/oauth/token-type/facebook-info-session-access-token";

/// Authentication parameter carrying the raw profile document.
pub const USER_PROFILE_PARAM: &str = "user_profile";

/// Default scope requested from Auth0.
pub const DEFAULT_SCOPE: &str = "openid email profile offline_access";
