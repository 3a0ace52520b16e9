//! fblogin-core - Core types and traits for the Facebook to Auth0 token exchange.
//!
//! A mobile login widget hands the pipeline a Facebook access token. The
//! pipeline attenuates it into a session token, fetches the user's profile,
//! and trades both for Auth0 credentials through the native social token
//! grant. Network access lives behind the stage traits in [`traits`].

pub mod constants;
pub mod credentials;
pub mod error;
pub mod pipeline;
pub mod profile;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::{Error, PipelineError};
pub use pipeline::{Pipeline, PipelineConfig, PipelineState, Stage};
pub use profile::ProfileDocument;
pub use tokens::{AccessToken, SessionToken};
pub use traits::{CredentialExchanger, ProfileFetcher, SessionTokenExchanger};
pub use types::{ProviderUrl, UserId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
