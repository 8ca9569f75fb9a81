use std::fmt;

use super::errors::KeyError;

/// Symmetric secret used to sign and verify tokens.
///
/// Loaded once at startup and shared read-only afterwards.
/// The secret is never printed, not even through `Debug`.
#[derive(Clone)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// 256 bits, the strength of HMAC-SHA256.
    pub const MIN_LENGTH: usize = 32;

    /// Create a signing key from raw secret bytes.
    ///
    /// # Arguments
    /// * `secret` - Secret bytes, at least 32 of them
    ///
    /// # Returns
    /// Validated SigningKey
    ///
    /// # Errors
    /// * `Empty` - Secret is empty or only whitespace
    /// * `TooShort` - Secret is shorter than 32 bytes
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, KeyError> {
        let secret = secret.into();

        if secret.iter().all(u8::is_ascii_whitespace) {
            return Err(KeyError::Empty);
        }

        if secret.len() < Self::MIN_LENGTH {
            return Err(KeyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: secret.len(),
            });
        }

        Ok(Self(secret))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_32_byte_secret() {
        let key = SigningKey::new("0123456789abcdef0123456789abcdef").expect("Key rejected");
        assert_eq!(key.as_bytes().len(), 32);
    }

    #[test]
    fn test_rejects_empty_secret() {
        assert_eq!(SigningKey::new("").unwrap_err(), KeyError::Empty);
        assert_eq!(SigningKey::new("   ").unwrap_err(), KeyError::Empty);
    }

    #[test]
    fn test_rejects_short_secret() {
        assert_eq!(
            SigningKey::new("too-short").unwrap_err(),
            KeyError::TooShort { min: 32, actual: 9 }
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let key = SigningKey::new("super_secret_value_that_is_long_enough").unwrap();
        let printed = format!("{:?}", key);

        assert!(!printed.contains("super_secret"));
        assert_eq!(printed, "SigningKey([REDACTED])");
    }
}
