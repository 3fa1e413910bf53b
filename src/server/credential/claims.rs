//! Session token claims.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Absolute lifetime of a session token.
pub const TOKEN_TTL: Duration = Duration::hours(2);

/// Age after which clients are expected to ask for a fresh token.
pub const REFRESH_AFTER: Duration = Duration::minutes(90);

/// JWT claims embedded in session tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username).
    pub sub: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
    /// Advisory refresh point (unix timestamp), never enforced by validation.
    pub refresh_at: i64,
}

impl Claims {
    pub fn new(subject: &str, now: DateTime<Utc>) -> Self {
        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + TOKEN_TTL).timestamp(),
            refresh_at: (now + REFRESH_AFTER).timestamp(),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    pub fn should_refresh_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.refresh_at
    }
}
