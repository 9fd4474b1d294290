//! Database configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file path, or `:memory:` for a private in-memory database
    pub path: String,

    pub max_connections: u32,

    /// Enable write-ahead logging (ignored for in-memory databases)
    pub enable_wal: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "athena.db".to_string(),
            max_connections: 10,
            enable_wal: true,
        }
    }
}

impl ConfigSection for DatabaseConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![
            Validator::not_empty(&self.path, "database.path"),
            Validator::in_range(self.max_connections, 1, 100, "database.max_connections"),
        ])
    }

    fn merge(&mut self, other: Self) {
        self.path = other.path;
        self.max_connections = other.max_connections;
        self.enable_wal = other.enable_wal;
    }

    fn section_name(&self) -> &'static str {
        "database"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DatabaseConfig::default().validate().is_ok());
    }

    #[test]
    fn test_in_memory_path_is_valid() {
        let config = DatabaseConfig {
            path: ":memory:".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values() {
        let config = DatabaseConfig {
            path: " ".to_string(),
            max_connections: 0,
            enable_wal: false,
        };
        assert_eq!(config.validate().unwrap_err().len(), 2);
    }
}
