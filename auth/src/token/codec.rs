use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::crypto;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::TokenError;
use super::key::SigningKey;

const SEGMENT_DELIMITER: char = '.';

/// Token codec for encoding and decoding signed tokens.
///
/// A token has two URL-safe base64 segments joined by `.`:
/// the JSON claims, then an HS256 (HMAC with SHA-256) signature over the
/// encoded claims segment. Generic over the claims type, like any serde payload.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new codec signing with `signing_key`.
    pub fn new(signing_key: &SigningKey) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(signing_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(signing_key.as_bytes()),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode (must implement Serialize)
    ///
    /// # Returns
    /// Token string, safe to use as an HTTP header value
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        let payload =
            serde_json::to_vec(claims).map_err(|e| TokenError::EncodingFailed(e.to_string()))?;
        let claims_segment = URL_SAFE_NO_PAD.encode(payload);

        let signature = crypto::sign(claims_segment.as_bytes(), &self.encoding_key, self.algorithm)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        Ok(format!("{claims_segment}{SEGMENT_DELIMITER}{signature}"))
    }

    /// Verify a token's signature and decode its claims.
    ///
    /// The signature is checked (in constant time) before the claims are
    /// parsed. Expiration is not checked here.
    ///
    /// # Arguments
    /// * `token` - Token string to decode
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Malformed` - Token is not two segments, or claims cannot be decoded
    /// * `InvalidSignature` - Signature does not match the claims segment
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        let (claims_segment, signature) = split_segments(token)?;

        let is_valid = crypto::verify(
            signature,
            claims_segment.as_bytes(),
            &self.decoding_key,
            self.algorithm,
        )
        .map_err(|_| TokenError::InvalidSignature)?;

        if !is_valid {
            return Err(TokenError::InvalidSignature);
        }

        parse_claims(claims_segment)
    }
}

/// Split on the first delimiter. Everything after it is the signature, so a
/// stray delimiter inside the signature fails verification instead of parsing.
fn split_segments(token: &str) -> Result<(&str, &str), TokenError> {
    match token.split_once(SEGMENT_DELIMITER) {
        Some((claims, signature)) if !claims.is_empty() && !signature.is_empty() => {
            Ok((claims, signature))
        }
        _ => Err(TokenError::Malformed(
            "expected claims and signature segments".to_string(),
        )),
    }
}

fn parse_claims<T: DeserializeOwned>(claims_segment: &str) -> Result<T, TokenError> {
    let payload = URL_SAFE_NO_PAD
        .decode(claims_segment)
        .map_err(|e| TokenError::Malformed(format!("claims segment: {}", e)))?;

    serde_json::from_slice(&payload).map_err(|e| TokenError::Malformed(format!("claims: {}", e)))
}
