use super::errors::PasswordError;

/// Compares a plaintext password with a stored hash.
///
/// Implementations must be slow, salted one-way comparisons. A hash that
/// cannot be parsed is an error, a well-formed hash that does not match is `Ok(false)`.
pub trait PasswordVerifier: Send + Sync + 'static {
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}
