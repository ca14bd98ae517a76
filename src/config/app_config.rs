use serde::Deserialize;

use crate::domain::account::{
    RegistrationPolicy, DEFAULT_PASSWORD_MAX_LENGTH, DEFAULT_PASSWORD_MIN_LENGTH,
    DEFAULT_USERNAME_MAX_LENGTH, DEFAULT_USERNAME_MIN_LENGTH,
};
use crate::domain::DomainError;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    pub registration: RegistrationConfig,
    pub hashing: HashingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Where accounts are stored
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    /// Process-local store, lost on restart
    Memory,
}

/// Account store connection settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    /// Full connection URL; takes precedence over the discrete fields
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub run_migrations: bool,
}

/// Inclusive length bounds enforced at registration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    pub username_min_length: usize,
    pub username_max_length: usize,
    pub password_min_length: usize,
    pub password_max_length: usize,
}

/// Argon2 cost parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 2024,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            name: "user_registry".to_string(),
            username: "postgres".to_string(),
            password: String::new(),
            max_connections: 10,
            acquire_timeout_secs: 5,
            run_migrations: true,
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("backend", &self.backend)
            .field("url", &self.url.as_ref().map(|_| "[REDACTED]"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            username_min_length: DEFAULT_USERNAME_MIN_LENGTH,
            username_max_length: DEFAULT_USERNAME_MAX_LENGTH,
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            password_max_length: DEFAULT_PASSWORD_MAX_LENGTH,
        }
    }
}

impl RegistrationConfig {
    /// Build the validated registration policy
    pub fn policy(&self) -> Result<RegistrationPolicy, DomainError> {
        RegistrationPolicy::new(
            self.username_min_length,
            self.username_max_length,
            self.password_min_length,
            self.password_max_length,
        )
    }
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 2024);
        assert_eq!(config.database.backend, StorageBackend::Postgres);
        assert_eq!(config.registration.username_min_length, 4);
        assert_eq!(config.registration.username_max_length, 16);
        assert_eq!(config.registration.password_min_length, 8);
        assert_eq!(config.registration.password_max_length, 32);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("database.backend", "memory")
            .unwrap()
            .set_override("registration.username_min_length", 5)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.database.backend, StorageBackend::Memory);
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.registration.username_min_length, 5);
        assert_eq!(config.registration.username_max_length, 16);
    }

    #[test]
    fn test_registration_policy_from_config() {
        let policy = RegistrationConfig::default().policy().unwrap();
        assert_eq!(policy.username_min_length(), 4);

        let inverted = RegistrationConfig {
            username_min_length: 20,
            ..RegistrationConfig::default()
        };
        assert!(inverted.policy().is_err());
    }

    #[test]
    fn test_database_config_debug_redacts_password() {
        let config = DatabaseConfig {
            password: "hunter2".to_string(),
            url: Some("postgres://app:hunter2@db/users".to_string()),
            ..DatabaseConfig::default()
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
    }
}
