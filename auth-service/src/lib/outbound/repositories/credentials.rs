use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::authentication::errors::CredentialStoreError;
use crate::domain::authentication::models::UserRecord;
use crate::domain::authentication::models::Username;
use crate::domain::authentication::ports::CredentialStore;

/// Credential store backed by the existing `users` table.
///
/// Only reads. The table is owned by the user management service.
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    email: String,
    role: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = CredentialStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(UserRecord {
            id: row.id,
            username: Username::new(row.username)?,
            password_hash: row.password,
            email: row.email,
            role: row.role.parse()?,
        })
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, CredentialStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password, email, role
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::DatabaseError(e.to_string()))?;

        row.map(UserRecord::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::authentication::models::Role;

    fn row(role: &str) -> UserRow {
        UserRow {
            id: 9,
            username: "alice".to_string(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            email: "alice@example.com".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_row_to_record() {
        let record = UserRecord::try_from(row("ADMIN")).expect("Conversion failed");

        assert_eq!(record.id, 9);
        assert_eq!(record.username.as_str(), "alice");
        assert_eq!(record.role, Role::Admin);
        assert!(record.password_hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_row_with_unknown_role() {
        let result = UserRecord::try_from(row("SUPERVISOR"));
        assert!(matches!(
            result,
            Err(CredentialStoreError::InvalidRecord(_))
        ));
    }
}
