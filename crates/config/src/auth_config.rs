//! Static bearer-token authentication section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User a bearer token authenticates as
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUser {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    /// Bearer token → user
    pub tokens: BTreeMap<String, TokenUser>,
}

impl ConfigSection for AuthConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = Vec::new();
        for (token, user) in &self.tokens {
            results.push(Validator::not_empty(token, "auth.tokens"));
            if !user.email.contains('@') {
                results.push(Err(ValidationError::with_value(
                    "auth.tokens.email",
                    "must be an email address",
                    &user.email,
                )));
            }
        }
        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        self.tokens.extend(other.tokens);
    }

    fn section_name(&self) -> &'static str {
        "auth"
    }
}
