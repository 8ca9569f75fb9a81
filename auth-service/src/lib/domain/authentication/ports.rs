use async_trait::async_trait;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::errors::CredentialStoreError;
use crate::domain::authentication::models::Credential;
use crate::domain::authentication::models::LoginOutcome;
use crate::domain::authentication::models::UserRecord;
use crate::domain::authentication::models::Username;
use crate::domain::authentication::models::ValidatedToken;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate a user and issue a token.
    ///
    /// # Arguments
    /// * `credential` - Username and plaintext password
    ///
    /// # Returns
    /// Issued token, its claims and the user profile
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Unknown user or wrong password (indistinguishable)
    /// * `Unavailable` - Credential store could not be reached
    /// * `Internal` - Token could not be issued
    async fn login(&self, credential: Credential) -> Result<LoginOutcome, AuthError>;

    /// Validate a previously issued token.
    ///
    /// # Arguments
    /// * `token` - Token string as presented by the client
    ///
    /// # Returns
    /// The token and its verified claims
    ///
    /// # Errors
    /// * `TokenRejected` - Malformed, wrongly signed or expired token
    async fn validate(&self, token: &str) -> Result<ValidatedToken, AuthError>;
}

/// Read-only lookup of stored users.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user record (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    /// * `InvalidRecord` - Stored row cannot be read as a user record
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, CredentialStoreError>;
}
