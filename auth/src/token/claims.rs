use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Lifetime of every issued token, in seconds (one hour).
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// Identity and authorization facts carried by a token.
///
/// Field order is the serialization order, which keeps the encoded
/// claims segment stable for identical inputs. Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimSet {
    /// Subject (the username)
    pub sub: String,

    /// Role name, carried opaquely
    pub role: String,

    /// Numeric user identifier
    #[serde(rename = "id")]
    pub user_id: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp), always `iat + TOKEN_TTL_SECONDS`
    pub exp: i64,
}

impl ClaimSet {
    /// Create claims for a user, valid for [`TOKEN_TTL_SECONDS`] from `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - Username the token asserts
    /// * `role` - Role name of the user
    /// * `user_id` - Numeric user identifier
    /// * `issued_at` - Issuance instant, normally the current time
    pub fn issue(
        subject: impl ToString,
        role: impl ToString,
        user_id: i64,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let expiration = issued_at + Duration::seconds(TOKEN_TTL_SECONDS);

        Self {
            sub: subject.to_string(),
            role: role.to_string(),
            user_id,
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the claims are expired at `current_timestamp`.
    ///
    /// Claims are still live at exactly `exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp > self.exp
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(timestamp: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(timestamp, 0).expect("valid timestamp")
    }

    #[test]
    fn test_issue() {
        let claims = ClaimSet::issue("alice", "ADMIN", 7, instant(1_700_000_000));

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "ADMIN");
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp - claims.iat, 60 * 60); // 1 hour
    }

    #[test]
    fn test_is_expired() {
        let claims = ClaimSet::issue("alice", "USER", 1, instant(1000));

        assert!(!claims.is_expired(1000)); // Just issued
        assert!(!claims.is_expired(1000 + TOKEN_TTL_SECONDS)); // Exactly at expiration
        assert!(claims.is_expired(1000 + TOKEN_TTL_SECONDS + 1)); // Expired
    }

    #[test]
    fn test_timestamps_as_datetimes() {
        let claims = ClaimSet::issue("alice", "USER", 1, instant(1000));

        assert_eq!(claims.issued_at(), Some(instant(1000)));
        assert_eq!(claims.expires_at(), Some(instant(4600)));
    }

    #[test]
    fn test_serialized_field_order() {
        let claims = ClaimSet::issue("alice", "USER", 42, instant(1000));
        let json = serde_json::to_string(&claims).expect("Failed to serialize claims");

        assert_eq!(
            json,
            r#"{"sub":"alice","role":"USER","id":42,"iat":1000,"exp":4600}"#
        );
    }
}
