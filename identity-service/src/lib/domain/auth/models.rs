use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use credentials::TokenPair;
use uuid::Uuid;

use crate::auth::errors::EmailError;
use crate::auth::errors::UserIdError;

/// User identity record.
///
/// Carries the password hash and biometric key hash; only ever handed out
/// across the service boundary as [`PublicUser`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub biometric_key_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address value type
///
/// Validates format using an RFC 5322 compliant parser and lowercases at
/// construction, so every lookup and write downstream sees the normalized
/// form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated, normalized email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_lowercase();

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Outward representation of a user.
///
/// The single stripping point for password material: every service
/// operation that returns a user returns this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub email: EmailAddress,
    pub biometric_key_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            biometric_key_hash: user.biometric_key_hash,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// New-user record consumed by the store.
///
/// The id and both timestamps are store-assigned.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub name: String,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Validated, normalized email address
    /// * `password` - Plain text password (hashed by the service)
    pub fn new(name: String, email: EmailAddress, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Result of a successful registration or login: the user plus a fresh
/// token pair.
#[derive(Debug, Clone)]
pub struct AuthPayload {
    pub user: PublicUser,
    pub tokens: TokenPair,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_lowercased() {
        let email = EmailAddress::new("Ada@Example.COM".to_string()).unwrap();

        assert_eq!(email.as_str(), "ada@example.com");
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new("".to_string()).is_err());
    }

    #[test]
    fn test_public_user_strips_password_hash() {
        let user = User {
            id: UserId::new(),
            name: "Ada".to_string(),
            email: EmailAddress::new("ada@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$secret".to_string(),
            biometric_key_hash: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let public = PublicUser::from(user.clone());

        assert_eq!(public.id, user.id);
        assert_eq!(public.email, user.email);
        // No password field exists on PublicUser; the hash stays behind.
    }
}
