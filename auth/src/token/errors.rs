use thiserror::Error;

use super::claims::ClaimSet;

/// Error type for token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    /// Signature verified but past expiry. Carries the claims so callers
    /// can report whose token it was without decoding again.
    #[error("Token is expired")]
    Expired(ClaimSet),
}

/// Error for signing key configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Signing key is empty")]
    Empty,

    #[error("Signing key too short: minimum {min} bytes, got {actual}")]
    TooShort { min: usize, actual: usize },
}
