//! Token authentication library
//!
//! Provides the reusable pieces of the authentication service:
//! - Password hashing and verification (Argon2id)
//! - Signed, time-bound tokens (HS256 over a JSON claim set)
//! - An injectable clock for issuance and expiry
//! - Authentication coordination
//!
//! The service crate defines its own ports (credential lookup) and composes
//! these implementations behind them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{PasswordHasher, PasswordVerifier};
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{ClaimSet, SigningKey, TokenCodec};
//!
//! let key = SigningKey::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let codec = TokenCodec::new(&key);
//! let claims = ClaimSet::issue("alice", "USER", 1, chrono::Utc::now());
//! let token = codec.encode(&claims).unwrap();
//! let decoded: ClaimSet = codec.decode(&token).unwrap();
//! assert_eq!(decoded, claims);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, SigningKey};
//!
//! let key = SigningKey::new("secret_key_at_least_32_bytes_long!").unwrap();
//! let auth = Authenticator::new(&key);
//!
//! // Stored hash, normally read from the credential store
//! let hash = PasswordHasher::new().hash("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &hash, "alice", "USER", 1).unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod authenticator;
pub mod clock;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use password::PasswordError;
pub use password::DECOY_HASH;
pub use password::PasswordHasher;
pub use password::PasswordVerifier;
pub use token::ClaimSet;
pub use token::KeyError;
pub use token::SigningKey;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TOKEN_TTL_SECONDS;
