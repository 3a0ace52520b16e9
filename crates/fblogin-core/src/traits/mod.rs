//! Stage traits implemented by network backends.

mod credential_exchange;
mod profile;
mod session_exchange;

pub use credential_exchange::CredentialExchanger;
pub use profile::ProfileFetcher;
pub use session_exchange::SessionTokenExchanger;
