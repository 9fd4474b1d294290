//! Athena Configuration System
//!
//! TOML configuration split into sections. Each section implements
//! [`ConfigSection`] for validation and merging.
//!
//! # Example
//!
//! ```rust,no_run
//! use athena_config::{Config, ConfigManager};
//!
//! let manager = ConfigManager::new().expect("Failed to locate config directory");
//! let config = manager.load_or_default();
//! println!("Listening on {}", config.server.bind);
//! ```

mod error;
mod manager;
mod persistence;
mod validation;

mod auth_config;
mod database_config;
mod resolution_config;
mod server_config;
mod sources_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::{apply_overrides, ConfigManager, ENV_BIND, ENV_DATABASE, ENV_LOG};
pub use persistence::ConfigPersistence;
pub use validation::{ConfigSection, Validator};

pub use auth_config::{AuthConfig, TokenUser};
pub use database_config::DatabaseConfig;
pub use resolution_config::ResolutionConfig;
pub use server_config::{LogLevel, ServerConfig};
pub use sources_config::SourcesConfig;

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub sources: SourcesConfig,
    pub resolution: ResolutionConfig,
    pub auth: AuthConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every section, returning all errors found
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.server.validate() {
            errors.append(&mut e);
        }
        if let Err(mut e) = self.database.validate() {
            errors.append(&mut e);
        }
        if let Err(mut e) = self.sources.validate() {
            errors.append(&mut e);
        }
        if let Err(mut e) = self.resolution.validate() {
            errors.append(&mut e);
        }
        if let Err(mut e) = self.auth.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Merges this config with another, preferring values from `other`
    ///
    /// Override chain: defaults < file < environment < command line.
    pub fn merge(&mut self, other: Config) {
        self.server.merge(other.server);
        self.database.merge(other.database);
        self.sources.merge(other.sources);
        self.resolution.merge(other.resolution);
        self.auth.merge(other.auth);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            sources: SourcesConfig::default(),
            resolution: ResolutionConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().version, CONFIG_VERSION);
    }

    #[test]
    fn test_errors_collected_across_sections() {
        let mut config = Config::default();
        config.server.bind = "bad".to_string();
        config.database.max_connections = 0;
        assert_eq!(config.validate().unwrap_err().len(), 2);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            bind = "127.0.0.1:9000"

            [resolution]
            cache_max_age_days = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.resolution.cache_max_age_days, Some(30));
        assert!(config.resolution.enable_fixtures);
        assert_eq!(config.database.path, "athena.db");
    }

    #[test]
    fn test_auth_tokens_from_toml() {
        let config: Config = toml::from_str(
            r#"
            [auth.tokens.secret-token]
            email = "reader@example.com"
            name = "Reader"
            "#,
        )
        .unwrap();

        let user = &config.auth.tokens["secret-token"];
        assert_eq!(user.email, "reader@example.com");
    }
}
