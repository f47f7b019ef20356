use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token payload for an authenticated user.
///
/// Registered claims (`iat`, `exp`) follow RFC 7519; `user_id` and `login`
/// are private claims identifying the account the token was issued for.
/// All fields are mandatory, so a token missing any of them fails
/// deserialization and is rejected as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account identifier the token was issued for
    pub user_id: i64,

    /// Login at issuance time
    pub login: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `login` - User login
    /// * `ttl` - Token lifetime
    ///
    /// # Returns
    /// Claims with iat set to now and exp set to now + ttl
    pub fn new(user_id: i64, login: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + ttl;

        Self {
            user_id,
            login: login.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the token is expired.
    ///
    /// A token is live strictly before its expiration instant, so
    /// `current_timestamp == exp` already counts as expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new(42, "alice", Duration::hours(24));

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.login, "alice");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60); // 24 hours
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            user_id: 1,
            login: "alice".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999)); // Still live
        assert!(claims.is_expired(1000)); // Expiration instant is no longer live
        assert!(claims.is_expired(1001)); // Expired
    }

    #[test]
    fn test_serialized_field_names() {
        let claims = Claims {
            user_id: 7,
            login: "bob".to_string(),
            iat: 100,
            exp: 200,
        };

        let json = serde_json::to_value(&claims).expect("Failed to serialize claims");
        assert_eq!(json["user_id"], 7);
        assert_eq!(json["login"], "bob");
        assert_eq!(json["iat"], 100);
        assert_eq!(json["exp"], 200);
    }
}
