//! Credential exchange trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{Credentials, ProfileDocument, Result, SessionToken};

/// Stage 3: performs the native social token grant.
#[async_trait]
pub trait CredentialExchanger: Send + Sync {
    /// Exchange a session token and profile document for credentials.
    ///
    /// A rejected grant is reported as [`Error::Auth`](crate::Error::Auth).
    async fn exchange_for_credentials(
        &self,
        session_token: &SessionToken,
        profile: &ProfileDocument,
        scope: &str,
    ) -> Result<Credentials>;
}

#[async_trait]
impl<T> CredentialExchanger for Arc<T>
where
    T: CredentialExchanger + ?Sized,
{
    async fn exchange_for_credentials(
        &self,
        session_token: &SessionToken,
        profile: &ProfileDocument,
        scope: &str,
    ) -> Result<Credentials> {
        (**self)
            .exchange_for_credentials(session_token, profile, scope)
            .await
    }
}
