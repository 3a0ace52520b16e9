//! fblogin-http - HTTP-backed stages for the Facebook to Auth0 token exchange.
//!
//! [`GraphApi`] implements the session token exchange and profile fetch
//! against the Facebook Graph API. [`Auth0Api`] implements the native social
//! token grant against an Auth0 tenant. [`HttpPipelineBuilder`] wires both
//! into a [`fblogin_core::Pipeline`].

mod auth0;
mod builder;
mod client;
mod endpoints;
mod graph;

pub use auth0::Auth0Api;
pub use builder::{HttpPipeline, HttpPipelineBuilder};
pub use graph::GraphApi;
