use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::role::Role;

/// JWT claims binding a user identity and role.
///
/// Timestamps are Unix seconds. A token is valid for `iat <= now < exp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Role granted to the subject
    pub role: Role,

    /// Username at issuance time
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// JWT ID (unique token identifier)
    pub jti: String,
}

impl Claims {
    /// Create claims for an authenticated user.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `username` - Username of the subject
    /// * `role` - Role granted by the token
    /// * `issued_at` - Issuance time (Unix timestamp)
    /// * `ttl` - Lifetime of the token
    pub fn for_user(
        user_id: impl ToString,
        username: impl Into<String>,
        role: Role,
        issued_at: i64,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: user_id.to_string(),
            role,
            username: username.into(),
            iat: issued_at,
            exp: issued_at + ttl.num_seconds(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Check if token is expired at the given time.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
