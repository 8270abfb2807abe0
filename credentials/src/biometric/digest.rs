use sha2::Digest;
use sha2::Sha256;

/// Deterministic digest of a client-supplied biometric token.
///
/// The transform is unsalted: equal inputs always map to the same output,
/// which lets the digest double as the equality-searchable lookup key in the
/// user store. Salting it per user would break lookup by biometric key, so
/// this stays an index-building transform rather than a credential-grade
/// hash.
pub struct BiometricKeyHasher;

impl BiometricKeyHasher {
    /// Create a new biometric key hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Digest a biometric token into its lookup key.
    ///
    /// # Arguments
    /// * `biometric_token` - Client-derived token representing the biometric
    ///   factor
    ///
    /// # Returns
    /// Lowercase hex-encoded SHA-256 digest
    pub fn hash(&self, biometric_token: &str) -> String {
        hex::encode(Sha256::digest(biometric_token.as_bytes()))
    }
}

impl Default for BiometricKeyHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let hasher = BiometricKeyHasher::new();

        assert_eq!(hasher.hash("finger-1"), hasher.hash("finger-1"));
    }

    #[test]
    fn test_distinct_tokens_produce_distinct_keys() {
        let hasher = BiometricKeyHasher::new();

        assert_ne!(hasher.hash("finger-1"), hasher.hash("finger-2"));
        assert_ne!(hasher.hash("finger-1"), hasher.hash("finger-1 "));
    }

    #[test]
    fn test_known_vector() {
        let hasher = BiometricKeyHasher::new();

        assert_eq!(
            hasher.hash("finger-1"),
            "89177afd7fe10b355549e99c8c73330767aac6277426c5b664e1f9f138464fe1"
        );
    }
}
