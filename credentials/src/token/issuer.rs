use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// A freshly minted access/refresh token pair.
///
/// Transient value: never persisted and not revocable server-side. Rotation
/// happens by issuing a new pair on refresh; an old refresh token stays
/// independently valid until its own expiry.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Signs and verifies access and refresh tokens.
///
/// The two token classes use independent secrets and independent lifetimes,
/// so an access token never validates against the refresh key and vice
/// versa. Uses HS256 (HMAC with SHA-256).
pub struct TokenIssuer {
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `access_secret` - Signing secret for access tokens
    /// * `refresh_secret` - Signing secret for refresh tokens
    /// * `access_ttl` - Access token lifetime (short)
    /// * `refresh_ttl` - Refresh token lifetime (long)
    ///
    /// # Security Notes
    /// - Each secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in
    ///   code
    pub fn new(
        access_secret: &[u8],
        refresh_secret: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            access_encoding_key: EncodingKey::from_secret(access_secret),
            access_decoding_key: DecodingKey::from_secret(access_secret),
            refresh_encoding_key: EncodingKey::from_secret(refresh_secret),
            refresh_decoding_key: DecodingKey::from_secret(refresh_secret),
            access_ttl,
            refresh_ttl,
            algorithm: Algorithm::HS256,
        }
    }

    /// Mint a fresh access/refresh pair for a user.
    ///
    /// # Arguments
    /// * `user_id` - Subject of both tokens
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_pair(&self, user_id: &str) -> Result<TokenPair, TokenError> {
        let access_token = self.encode(
            &Claims::new(user_id, self.access_ttl),
            &self.access_encoding_key,
        )?;
        let refresh_token = self.encode(
            &Claims::new(user_id, self.refresh_ttl),
            &self.refresh_encoding_key,
        )?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Verify an access token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature does not validate, expiry has passed, or
    ///   the payload cannot be decoded
    pub fn verify_access(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode(token, &self.access_decoding_key)
    }

    /// Verify a refresh token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature does not validate, expiry has passed, or
    ///   the payload cannot be decoded
    pub fn verify_refresh(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode(token, &self.refresh_decoding_key)
    }

    fn encode(&self, claims: &Claims, key: &EncodingKey) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, key).map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    // Every verification failure collapses into InvalidToken; callers get
    // no distinction between bad signature, expired, and malformed.
    fn decode(&self, token: &str, key: &DecodingKey) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<Claims>(token, key, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::InvalidToken)
    }
}
