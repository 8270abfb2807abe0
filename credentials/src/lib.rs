//! Credential primitives library
//!
//! Provides the building blocks for password- and biometric-based
//! authentication:
//! - Password hashing (Argon2id, configurable work factor)
//! - Biometric key digests (deterministic lookup keys)
//! - Access/refresh token pairs (JWT, independent secrets and lifetimes)
//!
//! The library is storage- and transport-agnostic; services wire these
//! primitives into their own domain logic.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use credentials::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Biometric Lookup Keys
//! ```
//! use credentials::BiometricKeyHasher;
//!
//! let hasher = BiometricKeyHasher::new();
//! // Deterministic: the same token always maps to the same stored key.
//! assert_eq!(hasher.hash("finger-1"), hasher.hash("finger-1"));
//! ```
//!
//! ## Token Pairs
//! ```
//! use chrono::Duration;
//! use credentials::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(
//!     b"access_secret_at_least_32_bytes_!!",
//!     b"refresh_secret_at_least_32_bytes_!",
//!     Duration::minutes(15),
//!     Duration::days(7),
//! );
//! let pair = issuer.issue_pair("user123").unwrap();
//! let claims = issuer.verify_access(&pair.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod biometric;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use biometric::BiometricKeyHasher;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenPair;
