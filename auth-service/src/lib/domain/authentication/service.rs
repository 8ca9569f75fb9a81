use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Clock;
use auth::PasswordHasher;
use auth::PasswordVerifier;
use auth::SystemClock;
use auth::TokenError;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Credential;
use crate::domain::authentication::models::LoginOutcome;
use crate::domain::authentication::models::UserProfile;
use crate::domain::authentication::models::Username;
use crate::domain::authentication::models::ValidatedToken;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::authentication::ports::CredentialStore;

/// Domain service implementation for login and token validation.
///
/// Holds no mutable state; every call is independent. The only side effect
/// is the read-only credential store lookup during login.
pub struct AuthService<CS, V = PasswordHasher, C = SystemClock>
where
    CS: CredentialStore,
    V: PasswordVerifier,
    C: Clock,
{
    credential_store: Arc<CS>,
    authenticator: Arc<Authenticator<V, C>>,
}

impl<CS, V, C> AuthService<CS, V, C>
where
    CS: CredentialStore,
    V: PasswordVerifier,
    C: Clock,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `credential_store` - User lookup implementation
    /// * `authenticator` - Password verification and token handling
    pub fn new(credential_store: Arc<CS>, authenticator: Arc<Authenticator<V, C>>) -> Self {
        Self {
            credential_store,
            authenticator,
        }
    }

    /// Pay for one password verification when there is no account to check
    /// against, so a missing user answers no faster than a wrong password.
    async fn reject_without_account(&self, password: String) -> AuthError {
        let authenticator = Arc::clone(&self.authenticator);

        if let Err(e) =
            tokio::task::spawn_blocking(move || authenticator.verify_decoy(&password)).await
        {
            tracing::error!(error = %e, "Decoy password verification task failed");
        }

        AuthError::AuthenticationFailed
    }
}

#[async_trait]
impl<CS, V, C> AuthServicePort for AuthService<CS, V, C>
where
    CS: CredentialStore,
    V: PasswordVerifier,
    C: Clock,
{
    async fn login(&self, credential: Credential) -> Result<LoginOutcome, AuthError> {
        let Credential { username, password } = credential;

        let username = match Username::new(username) {
            Ok(username) => username,
            Err(e) => {
                tracing::warn!(reason = %e, "Login rejected: invalid username");
                return Err(self.reject_without_account(password).await);
            }
        };

        let lookup = self
            .credential_store
            .find_by_username(&username)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Credential lookup failed");
                AuthError::Unavailable
            })?;

        let Some(user) = lookup else {
            tracing::warn!(username = %username, "Login rejected: unknown user");
            return Err(self.reject_without_account(password).await);
        };

        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = user.password_hash.clone();
        let subject = user.username.as_str().to_string();
        let role = user.role.as_str();
        let user_id = user.id;

        // Argon2 is CPU-bound; keep it off the async workers
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &subject, role, user_id)
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            AuthError::Internal
        })?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                tracing::warn!(username = %username, "Login rejected: wrong password");
                AuthError::AuthenticationFailed
            }
            AuthenticationError::PasswordError(err) => {
                tracing::error!(
                    username = %username,
                    error = %err,
                    "Login rejected: stored password hash is unusable"
                );
                AuthError::AuthenticationFailed
            }
            AuthenticationError::TokenError(err) => {
                tracing::error!(username = %username, error = %err, "Token issuance failed");
                AuthError::Internal
            }
        })?;

        tracing::info!(
            username = %username,
            user_id = user.id,
            role = %user.role,
            expires_at = ?result.claims.expires_at(),
            "Login succeeded"
        );

        Ok(LoginOutcome {
            access_token: result.access_token,
            claims: result.claims,
            user: UserProfile::from(&user),
        })
    }

    async fn validate(&self, token: &str) -> Result<ValidatedToken, AuthError> {
        let claims = self.authenticator.validate_token(token).map_err(|e| {
            match e {
                TokenError::Expired(claims) => tracing::warn!(
                    subject = %claims.sub,
                    expired_at = ?claims.expires_at(),
                    "Token rejected: expired"
                ),
                other => tracing::warn!(reason = %other, "Token rejected"),
            }
            AuthError::TokenRejected
        })?;

        tracing::debug!(
            subject = %claims.sub,
            issued_at = ?claims.issued_at(),
            "Token validated"
        );

        Ok(ValidatedToken {
            access_token: token.to_string(),
            claims,
        })
    }
}
