//! Profile fetch trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::types::UserId;
use crate::{AccessToken, ProfileDocument, Result};

/// Stage 2: fetches the raw profile document for a user.
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    /// Fetch the profile of `user_id`, authorized by `token`.
    async fn fetch_profile(
        &self,
        token: &AccessToken,
        user_id: &UserId,
    ) -> Result<ProfileDocument>;
}

#[async_trait]
impl<T> ProfileFetcher for Arc<T>
where
    T: ProfileFetcher + ?Sized,
{
    async fn fetch_profile(
        &self,
        token: &AccessToken,
        user_id: &UserId,
    ) -> Result<ProfileDocument> {
        (**self).fetch_profile(token, user_id).await
    }
}
