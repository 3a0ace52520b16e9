//! Session token exchange trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{AccessToken, Result, SessionToken};

/// Stage 1: attenuates a Facebook access token into a session token.
#[async_trait]
pub trait SessionTokenExchanger: Send + Sync {
    /// Exchange `token` for a session token on behalf of the app `client_id`.
    ///
    /// Issues exactly one request. A body without an `access_token` field
    /// is reported as a parse error, never as a provider error.
    async fn exchange(&self, token: &AccessToken, client_id: &str) -> Result<SessionToken>;
}

#[async_trait]
impl<T> SessionTokenExchanger for Arc<T>
where
    T: SessionTokenExchanger + ?Sized,
{
    async fn exchange(&self, token: &AccessToken, client_id: &str) -> Result<SessionToken> {
        (**self).exchange(token, client_id).await
    }
}
