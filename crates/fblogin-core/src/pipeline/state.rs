//! Pipeline stages and per-invocation states.

use std::fmt;

/// One of the three pipeline stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Facebook access token to session token.
    SessionExchange,
    /// Graph API profile fetch.
    ProfileFetch,
    /// Auth0 native social token grant.
    CredentialExchange,
}

impl Stage {
    /// Returns the stable name used in logs and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::SessionExchange => "session-exchange",
            Stage::ProfileFetch => "profile-fetch",
            Stage::CredentialExchange => "credential-exchange",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a single pipeline invocation.
///
/// Runs move `Start -> AwaitingSession -> AwaitingProfile ->
/// AwaitingCredentials -> Done`, or to `Failed` from any awaiting state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineState {
    Start,
    AwaitingSession,
    AwaitingProfile,
    AwaitingCredentials,
    Done,
    Failed(Stage),
}

impl PipelineState {
    /// Returns true for `Done` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed(_))
    }

    /// Returns the stage awaited in this state, if any.
    pub fn awaiting(&self) -> Option<Stage> {
        match self {
            PipelineState::AwaitingSession => Some(Stage::SessionExchange),
            PipelineState::AwaitingProfile => Some(Stage::ProfileFetch),
            PipelineState::AwaitingCredentials => Some(Stage::CredentialExchange),
            _ => None,
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Start => f.write_str("start"),
            PipelineState::AwaitingSession => f.write_str("awaiting-session"),
            PipelineState::AwaitingProfile => f.write_str("awaiting-profile"),
            PipelineState::AwaitingCredentials => f.write_str("awaiting-credentials"),
            PipelineState::Done => f.write_str("done"),
            PipelineState::Failed(stage) => write!(f, "failed({})", stage),
        }
    }
}
