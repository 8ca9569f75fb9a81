use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::authentication::errors::CredentialStoreError;
use crate::domain::authentication::models::UserRecord;
use crate::domain::authentication::models::Username;
use crate::domain::authentication::ports::CredentialStore;

/// Credential store holding a fixed set of users in memory.
///
/// Seeded before it is shared; lookups never mutate it.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    users: HashMap<Username, UserRecord>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user, replacing any user with the same username.
    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.users.insert(user.username.clone(), user);
        self
    }
}

impl FromIterator<UserRecord> for InMemoryCredentialStore {
    fn from_iter<I: IntoIterator<Item = UserRecord>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with_user)
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, CredentialStoreError> {
        Ok(self.users.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::authentication::models::Role;

    fn user(id: i64, username: &str) -> UserRecord {
        UserRecord {
            id,
            username: Username::new(username.to_string()).unwrap(),
            password_hash: "hash".to_string(),
            email: format!("{}@example.com", username),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let store: InMemoryCredentialStore =
            vec![user(1, "alice"), user(2, "carol")].into_iter().collect();

        let found = store
            .find_by_username(&Username::new("carol".to_string()).unwrap())
            .await
            .unwrap()
            .expect("carol not found");
        assert_eq!(found.id, 2);

        let missing = store
            .find_by_username(&Username::new("bob".to_string()).unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let store = InMemoryCredentialStore::new().with_user(user(1, "alice"));

        let result = store
            .find_by_username(&Username::new("Alice".to_string()).unwrap())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
