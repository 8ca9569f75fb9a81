use std::env;

use auth::KeyError;
use auth::SigningKey;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub token: TokenConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct TokenConfig {
    pub secret: String,
}

fn default_max_connections() -> u32 {
    5
}

impl TokenConfig {
    /// Validate the configured secret into a signing key.
    ///
    /// # Errors
    /// * `Empty` / `TooShort` - Secret is unusable; the service must not start
    pub fn signing_key(&self) -> Result<SigningKey, KeyError> {
        SigningKey::new(self.secret.as_bytes())
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (TOKEN__SECRET, DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: TOKEN__SECRET=... overrides token.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn parse(toml: &str) -> Result<Config, ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(
            r#"
            [server]
            http_port = 9000

            [database]
            url = "postgresql://localhost/auth"

            [token]
            secret = "0123456789abcdef0123456789abcdef"
            "#,
        )
        .expect("Failed to parse config");

        assert_eq!(config.server.http_port, 9000);
        assert_eq!(config.database.max_connections, 5);
        assert!(config.token.signing_key().is_ok());
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let result = parse(
            r#"
            [server]
            http_port = 9000

            [database]
            url = "postgresql://localhost/auth"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let config = TokenConfig {
            secret: "short".to_string(),
        };

        assert_eq!(
            config.signing_key().unwrap_err(),
            KeyError::TooShort { min: 32, actual: 5 }
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = TokenConfig {
            secret: "0123456789abcdef0123456789abcdef".to_string(),
        };

        assert!(!format!("{:?}", config).contains("0123456789"));
    }
}
