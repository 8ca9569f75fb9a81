use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username is blank")]
    Blank,

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Error for credential store lookups
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored user record is invalid: {0}")]
    InvalidRecord(String),
}

impl From<UsernameError> for CredentialStoreError {
    fn from(err: UsernameError) -> Self {
        CredentialStoreError::InvalidRecord(err.to_string())
    }
}

impl From<RoleError> for CredentialStoreError {
    fn from(err: RoleError) -> Self {
        CredentialStoreError::InvalidRecord(err.to_string())
    }
}

/// Caller-visible outcome of a failed login or validation.
///
/// Rejections carry no detail: a missing user and a wrong password are the
/// same `AuthenticationFailed`, and a tampered, malformed or expired token is
/// the same `TokenRejected`. The specific reason is only logged.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    AuthenticationFailed,

    #[error("Invalid or expired token")]
    TokenRejected,

    #[error("Authentication is temporarily unavailable")]
    Unavailable,

    #[error("Internal error")]
    Internal,
}
