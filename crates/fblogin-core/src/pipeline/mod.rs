//! The three-stage token exchange pipeline.
//!
//! A [`Pipeline`] runs the session token exchange, the profile fetch and the
//! credential exchange in order, stopping at the first failure. It holds no
//! mutable state, so one instance can serve any number of concurrent runs.

mod state;

pub use state::{PipelineState, Stage};

use tracing::{debug, info, instrument, warn};

use crate::constants::DEFAULT_SCOPE;
use crate::error::{Error, PipelineError};
use crate::traits::{CredentialExchanger, ProfileFetcher, SessionTokenExchanger};
use crate::{AccessToken, Credentials};

/// Per-pipeline settings shared by every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    client_id: String,
    scope: String,
}

impl PipelineConfig {
    /// Create a config for the Facebook app `client_id` using [`DEFAULT_SCOPE`].
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            scope: DEFAULT_SCOPE.to_string(),
        }
    }

    /// Override the scope requested from the identity provider.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Returns the Facebook app id sent with the session token exchange.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the scope sent with the credential exchange.
    pub fn scope(&self) -> &str {
        &self.scope
    }
}

/// Orchestrates the three stages for one access token at a time.
///
/// # Example
///
/// ```no_run
/// use fblogin_core::pipeline::{Pipeline, PipelineConfig};
/// use fblogin_core::traits::{CredentialExchanger, ProfileFetcher, SessionTokenExchanger};
/// use fblogin_core::AccessToken;
///
/// # async fn example<S, P, C>(session: S, profile: P, credentials: C)
/// # where S: SessionTokenExchanger, P: ProfileFetcher, C: CredentialExchanger {
/// let pipeline = Pipeline::new(session, profile, credentials, PipelineConfig::new("app-id"));
/// let token = AccessToken::new("EAAB...", "1000").unwrap();
///
/// match pipeline.run(&token).await {
///     Ok(creds) => println!("scope: {:?}", creds.scope()),
///     Err(e) => eprintln!("{} failed: {}", e.stage(), e.cause()),
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<S, P, C> {
    session: S,
    profile: P,
    credentials: C,
    config: PipelineConfig,
}

impl<S, P, C> Pipeline<S, P, C>
where
    S: SessionTokenExchanger,
    P: ProfileFetcher,
    C: CredentialExchanger,
{
    /// Create a pipeline from its three stages.
    pub fn new(session: S, profile: P, credentials: C, config: PipelineConfig) -> Self {
        Self {
            session,
            profile,
            credentials,
            config,
        }
    }

    /// Returns the pipeline settings.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run all three stages for `token`.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] tagged with the first stage that failed.
    /// Later stages are not invoked.
    pub async fn run(&self, token: &AccessToken) -> Result<Credentials, PipelineError> {
        self.run_observed(token, |_| {}).await
    }

    /// Run all three stages, reporting every state entered to `observe`.
    ///
    /// `observe` sees `Start` first and exactly one terminal state last.
    #[instrument(skip(self, token, observe), fields(user_id = %token.user_id()))]
    pub async fn run_observed<F>(
        &self,
        token: &AccessToken,
        mut observe: F,
    ) -> Result<Credentials, PipelineError>
    where
        F: FnMut(&PipelineState),
    {
        info!("Starting token exchange");
        enter(&mut observe, PipelineState::Start);

        enter(&mut observe, PipelineState::AwaitingSession);
        let session_token = match self.session.exchange(token, &self.config.client_id).await {
            Ok(t) => t,
            Err(e) => return Err(fail(&mut observe, Stage::SessionExchange, e)),
        };

        enter(&mut observe, PipelineState::AwaitingProfile);
        let profile = match self.profile.fetch_profile(token, token.user_id()).await {
            Ok(p) => p,
            Err(e) => return Err(fail(&mut observe, Stage::ProfileFetch, e)),
        };

        enter(&mut observe, PipelineState::AwaitingCredentials);
        let credentials = match self
            .credentials
            .exchange_for_credentials(&session_token, &profile, &self.config.scope)
            .await
        {
            Ok(c) => c,
            Err(e) => return Err(fail(&mut observe, Stage::CredentialExchange, e)),
        };

        enter(&mut observe, PipelineState::Done);
        info!("Token exchange complete");
        Ok(credentials)
    }
}

fn enter<F: FnMut(&PipelineState)>(observe: &mut F, state: PipelineState) {
    debug!(%state, awaiting = state.awaiting().map(|s| s.as_str()), "pipeline state");
    observe(&state);
}

fn fail<F: FnMut(&PipelineState)>(observe: &mut F, stage: Stage, cause: Error) -> PipelineError {
    warn!(%stage, error = %cause, "Token exchange failed");
    enter(observe, PipelineState::Failed(stage));
    PipelineError::at(stage, cause)
}
