//! Bibliographic metadata

use crate::types::{Timestamp, Validator};
use serde::{Deserialize, Serialize};

/// Maximum number of subjects kept per book
pub const MAX_SUBJECTS: usize = 5;

/// Metadata for one edition, as returned by the bibliographic API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookMetadata {
    pub identifier: String,
    pub title: String,
    pub authors: Vec<String>,
    pub cover_url: Option<String>,
    pub publisher: Option<String>,
    pub publish_date: Option<String>,
    pub page_count: Option<u32>,
    pub subjects: Vec<String>,
    pub fetched_at: Timestamp,
}

impl BookMetadata {
    /// Creates metadata with required fields
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            authors: Vec::new(),
            cover_url: None,
            publisher: None,
            publish_date: None,
            page_count: None,
            subjects: Vec::new(),
            fetched_at: Timestamp::now(),
        }
    }

    /// Sets the subject list, keeping at most [`MAX_SUBJECTS`]
    pub fn with_subjects(mut self, subjects: Vec<String>) -> Self {
        self.subjects = subjects.into_iter().take(MAX_SUBJECTS).collect();
        self
    }

    /// First listed author, if any
    pub fn primary_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}

impl Validator for BookMetadata {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.identifier.trim().is_empty() {
            errors.push("Identifier cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if self.subjects.len() > MAX_SUBJECTS {
            errors.push(format!("At most {} subjects are kept", MAX_SUBJECTS));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
