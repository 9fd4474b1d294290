//! Per-user reading state: progress, bookmarks and highlights

use crate::types::{Timestamp, Validator};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default highlight color
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "yellow";

/// Unique identifier for a bookmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookmarkId(Uuid);

impl BookmarkId {
    /// Creates a new random BookmarkId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a BookmarkId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Returns the BookmarkId as a string
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for BookmarkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightId(Uuid);

impl HighlightId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for HighlightId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HighlightId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reading position of one user in one book
///
/// Unique per (user, identifier); saving again overwrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub user_email: String,
    pub identifier: String,
    pub position: f64,
    pub last_updated: Timestamp,
}

impl Progress {
    pub fn new(user_email: impl Into<String>, identifier: impl Into<String>, position: f64) -> Self {
        Self {
            user_email: user_email.into(),
            identifier: identifier.into(),
            position,
            last_updated: Timestamp::now(),
        }
    }
}

impl Validator for Progress {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.identifier.trim().is_empty() {
            errors.push("Identifier cannot be empty".to_string());
        }

        if !self.position.is_finite() || self.position < 0.0 {
            errors.push("Position must be a non-negative number".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A user bookmark at a position in a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: BookmarkId,
    pub user_email: String,
    pub identifier: String,
    pub position: f64,
    pub text: String,
    pub created_at: Timestamp,
}

impl Bookmark {
    /// Creates a new bookmark at the specified position
    pub fn new(
        user_email: impl Into<String>,
        identifier: impl Into<String>,
        position: f64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: BookmarkId::new(),
            user_email: user_email.into(),
            identifier: identifier.into(),
            position,
            text: text.into(),
            created_at: Timestamp::now(),
        }
    }
}

impl Validator for Bookmark {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.identifier.trim().is_empty() {
            errors.push("Identifier cannot be empty".to_string());
        }

        if !self.position.is_finite() || self.position < 0.0 {
            errors.push("Bookmark position must be a non-negative number".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A highlighted passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub id: HighlightId,
    pub user_email: String,
    pub identifier: String,
    pub text: String,
    pub color: String,
    pub created_at: Timestamp,
}

impl Highlight {
    /// Creates a highlight; `None` color falls back to [`DEFAULT_HIGHLIGHT_COLOR`]
    pub fn new(
        user_email: impl Into<String>,
        identifier: impl Into<String>,
        text: impl Into<String>,
        color: Option<String>,
    ) -> Self {
        Self {
            id: HighlightId::new(),
            user_email: user_email.into(),
            identifier: identifier.into(),
            text: text.into(),
            color: color.unwrap_or_else(|| DEFAULT_HIGHLIGHT_COLOR.to_string()),
            created_at: Timestamp::now(),
        }
    }
}

impl Validator for Highlight {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.identifier.trim().is_empty() {
            errors.push("Identifier cannot be empty".to_string());
        }

        if self.text.trim().is_empty() {
            errors.push("Highlight text cannot be empty".to_string());
        }

        if self.color.trim().is_empty() {
            errors.push("Highlight color cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
