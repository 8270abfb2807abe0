use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Single verification failure condition. Bad signatures, expired
    /// tokens, and malformed payloads are indistinguishable to callers.
    #[error("Token is invalid or expired")]
    InvalidToken,
}
