use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use auth::SigningKey;
use auth_service::domain::authentication::models::Role;
use auth_service::domain::authentication::models::UserRecord;
use auth_service::domain::authentication::models::Username;
use auth_service::domain::authentication::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::InMemoryCredentialStore;

pub const TEST_SECRET: &str = "test-secret-key-for-token-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub signing_key: SigningKey,
}

impl TestApp {
    /// Spawn the application with alice (password `secret123`) in the store.
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let alice = UserRecord {
            id: 1,
            username: Username::new("alice".to_string()).unwrap(),
            password_hash: PasswordHasher::new()
                .hash("secret123")
                .expect("Failed to hash password"),
            email: "alice@example.com".to_string(),
            role: Role::Admin,
        };
        let credential_store = Arc::new(InMemoryCredentialStore::new().with_user(alice));

        let signing_key = SigningKey::new(TEST_SECRET).expect("Invalid test key");
        let authenticator = Arc::new(Authenticator::new(&signing_key));
        let auth_service = Arc::new(AuthService::new(credential_store, authenticator));

        let router = create_router(auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            signing_key,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to POST credentials to the login endpoint
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/auth/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
