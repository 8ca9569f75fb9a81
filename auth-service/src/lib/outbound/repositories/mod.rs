pub mod credentials;
pub mod in_memory;

pub use credentials::PostgresCredentialStore;
pub use in_memory::InMemoryCredentialStore;
