//! REST API client module for the Hover API.
//!
//! This module provides the `ApiClient` for authenticating against the
//! Hover API and issuing authenticated requests on behalf of subcommands.
//!
//! Authentication is email/password based; the resulting token is cached
//! in the config store and attached verbatim to the `Authorization` header
//! of subsequent requests.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
