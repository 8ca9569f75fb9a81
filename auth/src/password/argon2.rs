use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as _;
use argon2::password_hash::PasswordVerifier as _;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;
use super::verifier::PasswordVerifier;

/// Well-formed Argon2id hash that no password matches, with the same
/// parameters as [`PasswordHasher::hash`]. Verifying against it costs as much
/// as verifying against a real stored hash.
pub const DECOY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$n0bitEAfuN2u4CH0hm/itw$FWiYUlLCzbdBReavggfPvkB/PKGwisvmtMGKkkBc8mc";

/// Argon2id password hashing with a random salt per hash.
///
/// Hashes are PHC strings, so parameters and salt travel with the hash and
/// verification needs nothing but the stored string.
#[derive(Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }
}

impl PasswordVerifier for PasswordHasher {
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("secret123").expect("Failed to hash password");

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher
            .verify("secret123", &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("wrong", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("secret123").unwrap();
        let second = hasher.hash("secret123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_decoy_hash_matches_nothing_at_full_cost() {
        let hasher = PasswordHasher::new();

        assert_eq!(hasher.verify("secret123", DECOY_HASH), Ok(false));
        assert_eq!(hasher.verify("", DECOY_HASH), Ok(false));

        let real = hasher.hash("secret123").unwrap();
        let real = PasswordHash::new(&real).unwrap();
        let decoy = PasswordHash::new(DECOY_HASH).unwrap();
        assert_eq!(decoy.algorithm, real.algorithm);
        assert_eq!(decoy.version, real.version);
        assert_eq!(decoy.params, real.params);
        assert_eq!(
            decoy.hash.map(|h| h.len()),
            real.hash.map(|h| h.len())
        );
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }
}
