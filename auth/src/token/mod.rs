pub mod claims;
pub mod codec;
pub mod errors;
pub mod key;

pub use claims::ClaimSet;
pub use claims::TOKEN_TTL_SECONDS;
pub use codec::TokenCodec;
pub use errors::KeyError;
pub use errors::TokenError;
pub use key::SigningKey;
