use thiserror::Error;

/// Error type for JWT encoding and decoding.
///
/// Variants keep the underlying cause for logging; callers outside this crate
/// only ever see [`crate::TokenError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token signature is invalid")]
    InvalidSignature,
}
