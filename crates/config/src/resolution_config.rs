//! Content resolution policy section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Resolve identifiers that fail ISBN checksum validation
    pub allow_unvalidated_identifiers: bool,

    /// Cached content older than this is resolved again; `None` keeps it forever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_max_age_days: Option<u32>,

    /// Consult the built-in sample texts
    pub enable_fixtures: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            allow_unvalidated_identifiers: true,
            cache_max_age_days: None,
            enable_fixtures: true,
        }
    }
}

impl ConfigSection for ResolutionConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = Vec::new();
        if let Some(days) = self.cache_max_age_days {
            results.push(Validator::in_range(
                days,
                1,
                3650,
                "resolution.cache_max_age_days",
            ));
        }
        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        self.allow_unvalidated_identifiers = other.allow_unvalidated_identifiers;
        self.cache_max_age_days = other.cache_max_age_days;
        self.enable_fixtures = other.enable_fixtures;
    }

    fn section_name(&self) -> &'static str {
        "resolution"
    }
}
