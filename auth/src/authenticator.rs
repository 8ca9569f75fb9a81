use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::password::PasswordError;
use crate::password::DECOY_HASH;
use crate::password::PasswordHasher;
use crate::password::PasswordVerifier;
use crate::token::ClaimSet;
use crate::token::SigningKey;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Authentication coordinator combining password verification and token handling.
///
/// Verifies credentials, stamps claims with the clock, issues tokens, and
/// validates them (signature first, then expiry).
pub struct Authenticator<V = PasswordHasher, C = SystemClock>
where
    V: PasswordVerifier,
    C: Clock,
{
    password_verifier: V,
    token_codec: TokenCodec,
    clock: C,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,

    /// Claims embedded in the token
    pub claims: ClaimSet,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create an authenticator with Argon2 verification and the system clock.
    ///
    /// # Arguments
    /// * `signing_key` - Secret key for token signing
    pub fn new(signing_key: &SigningKey) -> Self {
        Self::with_parts(PasswordHasher::new(), signing_key, SystemClock)
    }
}

impl<V, C> Authenticator<V, C>
where
    V: PasswordVerifier,
    C: Clock,
{
    /// Create an authenticator from explicit collaborators.
    pub fn with_parts(password_verifier: V, signing_key: &SigningKey, clock: C) -> Self {
        Self {
            password_verifier,
            token_codec: TokenCodec::new(signing_key),
            clock,
        }
    }

    /// Verify credentials and issue a token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Username the token will assert
    /// * `role` - Role name carried in the token
    /// * `user_id` - Numeric user identifier carried in the token
    ///
    /// # Returns
    /// AuthenticationResult with access token and its claims
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be used
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        role: &str,
        user_id: i64,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_verifier.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(subject, role, user_id)?)
    }

    /// Issue a token without password verification.
    ///
    /// For callers that have already authenticated the user by other means.
    pub fn issue_token(
        &self,
        subject: &str,
        role: &str,
        user_id: i64,
    ) -> Result<AuthenticationResult, TokenError> {
        let claims = ClaimSet::issue(subject, role, user_id, self.clock.now());
        let access_token = self.token_codec.encode(&claims)?;

        Ok(AuthenticationResult {
            access_token,
            claims,
        })
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed
    /// * `InvalidSignature` - Token was not signed with this key or was altered
    /// * `Expired` - Signature is intact but the token is past its expiration;
    ///   carries the decoded claims
    pub fn validate_token(&self, token: &str) -> Result<ClaimSet, TokenError> {
        let claims: ClaimSet = self.token_codec.decode(token)?;

        if claims.is_expired(self.clock.now().timestamp()) {
            return Err(TokenError::Expired(claims));
        }

        Ok(claims)
    }

    /// Spend one password verification on [`DECOY_HASH`] and discard the
    /// outcome.
    ///
    /// Login paths that have no stored hash to check (unknown or invalid
    /// username) call this so they take as long as a wrong password.
    pub fn verify_decoy(&self, password: &str) {
        let _ = self.password_verifier.verify(password, DECOY_HASH);
    }
}
