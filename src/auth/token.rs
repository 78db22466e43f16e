use chrono::{DateTime, Duration, Utc};

/// Token validity window in hours.
/// The API does not communicate its own expiry; 2 hours is the assumed
/// lifetime after which a fresh token is requested.
pub const TOKEN_TTL_HOURS: i64 = 2;

/// A bearer token cached in the config store alongside its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub value: String,
    pub expiry: DateTime<Utc>,
}

impl CachedToken {
    /// Build a token expiring `TOKEN_TTL_HOURS` from now.
    pub fn fresh(value: String) -> Self {
        Self {
            value,
            expiry: Utc::now() + Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// A token is only trusted if it is non-empty and the current time is
    /// strictly before its expiry.
    pub fn is_valid(&self) -> bool {
        !self.value.is_empty() && Utc::now() < self.expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_valid() {
        let token = CachedToken::fresh("abc".into());
        assert!(token.is_valid());
    }

    #[test]
    fn test_fresh_token_expiry_is_two_hours_out() {
        let token = CachedToken::fresh("abc".into());
        let delta = token.expiry - Utc::now();
        assert!(delta <= Duration::hours(2));
        assert!(delta > Duration::hours(2) - Duration::minutes(1));
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let token = CachedToken {
            value: "abc".into(),
            expiry: Utc::now() - Duration::seconds(1),
        };
        assert!(!token.is_valid());
    }

    #[test]
    fn test_empty_token_is_invalid_even_with_future_expiry() {
        let token = CachedToken {
            value: String::new(),
            expiry: Utc::now() + Duration::hours(1),
        };
        assert!(!token.is_valid());
    }
}
