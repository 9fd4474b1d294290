//! Configuration manager - main API for config operations

use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigError, ConfigResult, LogLevel};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides `server.bind`
pub const ENV_BIND: &str = "ATHENA_BIND";
/// Overrides `database.path`
pub const ENV_DATABASE: &str = "ATHENA_DATABASE";
/// Overrides `server.log_level`
pub const ENV_LOG: &str = "ATHENA_LOG";

/// Locates, loads and saves the configuration file
pub struct ConfigManager {
    persistence: ConfigPersistence,
}

impl ConfigManager {
    /// Creates a manager for `config.toml` in the platform config directory
    ///
    /// - Linux: `~/.config/athena/`
    /// - macOS: `~/Library/Application Support/athena/`
    /// - Windows: `%APPDATA%\athena\`
    pub fn new() -> ConfigResult<Self> {
        let config_dir = Self::default_config_dir()?;
        Ok(Self::with_directory(config_dir))
    }

    /// Creates a manager for `config.toml` in `config_dir`
    pub fn with_directory(config_dir: PathBuf) -> Self {
        Self::with_file(config_dir.join("config.toml"))
    }

    /// Creates a manager for an explicit config file
    pub fn with_file(config_path: PathBuf) -> Self {
        Self {
            persistence: ConfigPersistence::new(config_path),
        }
    }

    fn default_config_dir() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "athena")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| ConfigError::NoConfigDir("Could not determine user config directory".to_string()))
    }

    pub fn config_path(&self) -> &Path {
        self.persistence.path()
    }

    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Loads the configuration, falling back to defaults on any error
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    }

    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }

    /// Writes a default config file if none exists; returns true if one was created
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path().exists() {
            return Ok(false);
        }
        self.save(&Config::default())?;
        Ok(true)
    }

    /// Loads the file and applies `ATHENA_*` environment overrides
    pub fn load_with_env_overrides(&self) -> ConfigResult<Config> {
        let mut config = self.load()?;
        apply_overrides(&mut config, |name| std::env::var(name).ok())?;
        Ok(config)
    }
}

/// Applies overrides read through `lookup`, then logs validation warnings
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(bind) = lookup(ENV_BIND) {
        config.server.bind = bind;
    }

    if let Some(path) = lookup(ENV_DATABASE) {
        config.database.path = path;
    }

    if let Some(level) = lookup(ENV_LOG) {
        config.server.log_level =
            level
                .parse::<LogLevel>()
                .map_err(|reason| ConfigError::Override {
                    variable: ENV_LOG.to_string(),
                    reason,
                })?;
    }

    if let Err(errors) = config.validate() {
        log::warn!(
            "Config validation warnings after env overrides: {:?}",
            errors
        );
    }

    Ok(())
}
