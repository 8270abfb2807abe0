use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Argon2id with a configurable iteration count; memory and parallelism
/// stay at the library defaults. Each hash gets a fresh random salt and is
/// stored in PHC string format, so the parameters travel with the hash.
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Iteration count used when no cost is configured.
    pub const DEFAULT_COST: u32 = Params::DEFAULT_T_COST;

    /// Create a password hasher with the default work factor.
    pub fn new() -> Self {
        Self::with_cost(Self::DEFAULT_COST)
    }

    /// Create a password hasher with an explicit work factor.
    ///
    /// # Arguments
    /// * `cost` - Argon2 iteration count; clamped to at least 1. Values the
    ///   library rejects fall back to its defaults.
    pub fn with_cost(cost: u32) -> Self {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            cost.max(1),
            Params::DEFAULT_P_COST,
            None,
        )
        .unwrap_or_default();

        Self { params }
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Comparison is constant-time with respect to the hash bytes. A stored
    /// hash that does not parse as a PHC string verifies as `false` rather
    /// than failing.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        // Verification reads the parameters embedded in the PHC string, so
        // hashes produced under an older cost setting keep verifying.
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hasher = PasswordHasher::new();
        let password = "s3cret!";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert_ne!(hash, password);
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify("password", "not_a_phc_string"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn test_configured_cost_round_trips() {
        let hasher = PasswordHasher::with_cost(4);
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hash.contains("t=4"));
        assert!(hasher.verify(password, &hash));
        // A hasher built with different parameters still verifies the hash.
        assert!(PasswordHasher::new().verify(password, &hash));
    }
}
