//! Subcommand implementations.
//!
//! Every command follows the same shape: ensure a valid token with
//! `ApiClient::authenticate`, then issue one or more authenticated requests
//! and handle the response.

pub mod actions;
pub mod login;
