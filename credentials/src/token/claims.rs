use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by access and refresh tokens.
///
/// The subject is the user id; nothing else is modeled. No scopes,
/// audiences, or token identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user with an expiry relative to now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier, becomes the `sub` claim
    /// * `ttl` - Lifetime of the token from the moment of issuance
    pub fn new(user_id: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Check whether the expiry has passed at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_carry_subject_and_ttl() {
        let claims = Claims::new("user123", Duration::minutes(15));

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "user123".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
