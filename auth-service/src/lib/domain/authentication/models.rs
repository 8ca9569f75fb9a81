use std::fmt;
use std::str::FromStr;

use auth::ClaimSet;

use crate::domain::authentication::errors::RoleError;
use crate::domain::authentication::errors::UsernameError;

/// Login name value type
///
/// Must not be blank and is at most 64 characters. The value is kept as
/// given; lookups are exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Blank` - Username is empty or only whitespace
    /// * `TooLong` - Username longer than 64 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.trim().is_empty() {
            return Err(UsernameError::Blank);
        }

        let length = username.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role of a user. Carried opaquely in tokens as its upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            _ => Err(RoleError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored user as returned by the credential store. Read-only here.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub username: Username,
    pub password_hash: String,
    pub email: String,
    pub role: Role,
}

/// Login attempt. The password is only handed to the password verifier.
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Public view of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<&UserRecord> for UserProfile {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username.as_str().to_string(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Successful login: the issued token and who it was issued to.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub access_token: String,
    pub claims: ClaimSet,
    pub user: UserProfile,
}

/// Successful validation: the token as presented and its verified claims.
#[derive(Debug, Clone)]
pub struct ValidatedToken {
    pub access_token: String,
    pub claims: ClaimSet,
}
