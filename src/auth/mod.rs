//! Token caching for authenticated API access.
//!
//! Tokens are issued by the Hover API's authenticate endpoint and cached in
//! the config store with a client-assumed expiry. The server does not report
//! token lifetimes, so a fixed 2-hour validity window is applied locally.

pub mod token;

pub use token::{CachedToken, TOKEN_TTL_HOURS};
