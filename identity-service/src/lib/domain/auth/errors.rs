use credentials::PasswordError;
use credentials::TokenError;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all authentication operations.
///
/// Every condition carries a discriminant; the transport maps kinds onto
/// status codes and owns the user-facing wording. `NotFound` and
/// `InvalidCredential` stay distinguishable here so callers can tell the
/// cases apart without the messages leaking which one occurred.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Email already in use")]
    EmailTaken,

    #[error("Biometric key already in use")]
    BiometricKeyTaken,

    #[error("Invalid credentials")]
    InvalidCredential,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // Store failures not matching a known constraint violation, propagated
    // unmodified
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
