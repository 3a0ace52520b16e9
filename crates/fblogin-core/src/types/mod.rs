//! Validated identifier and URL types.
//!
//! These types enforce their invariants at construction time, so a
//! malformed user id or provider URL never reaches a stage.

mod provider_url;
mod user_id;

pub use provider_url::ProviderUrl;
pub use user_id::UserId;
