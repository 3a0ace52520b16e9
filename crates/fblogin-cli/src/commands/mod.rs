//! Subcommand implementations.

pub mod args;
pub mod exchange;
pub mod permissions;
pub mod profile;
pub mod session_token;
