//! Curated identifier → catalog key table
//!
//! The table is built once at startup and shared read-only.

use serde::Serialize;
use std::collections::HashMap;

/// One curated mapping from a canonical identifier to a plain-text catalog key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry<'a> {
    pub identifier: &'a str,
    pub catalog_key: u32,
}

const BUILTIN_ENTRIES: &[(&str, u32)] = &[
    // Pride and Prejudice
    ("9780141439518", 1342),
    ("9780553213102", 1342),
    // Nineteen Eighty-Four
    ("9780451524935", 3748),
    ("9780141036144", 3748),
    // The Great Gatsby
    ("9780743273565", 64317),
    ("9780142437230", 64317),
    // Moby Dick
    ("9780142437247", 2701),
    ("9780553213119", 2701),
    // Frankenstein
    ("9780141439471", 84),
    ("9780486282114", 84),
    // Dracula
    ("9780141439846", 345),
    // Alice's Adventures in Wonderland
    ("9780141439761", 11),
    // The Adventures of Sherlock Holmes
    ("9780141036755", 1661),
    // War and Peace
    ("9780140447934", 2600),
    // Anna Karenina
    ("9780140449174", 1399),
    // Crime and Punishment
    ("9780140449136", 2554),
    // The Brothers Karamazov
    ("9780140449242", 28054),
    // Jane Eyre
    ("9780141441146", 1260),
    // Wuthering Heights
    ("9780141439556", 768),
    // Great Expectations
    ("9780141439563", 1400),
    // Oliver Twist
    ("9780141439747", 730),
    // A Tale of Two Cities
    ("9780141439600", 98),
    // Adventures of Huckleberry Finn
    ("9780142437179", 76),
    // The Adventures of Tom Sawyer
    ("9780141439648", 74),
    // The Count of Monte Cristo
    ("9780140449266", 1184),
    // The Three Musketeers
    ("9780141442334", 1257),
    // The Picture of Dorian Gray
    ("9780141439570", 174),
    // The Importance of Being Earnest
    ("9780141439594", 844),
    // Metamorphosis
    ("9780141182902", 5200),
    // Heart of Darkness
    ("9780141441672", 526),
    // The War of the Worlds
    ("9780141441030", 36),
    // The Time Machine
    ("9780141439976", 35),
];

/// Immutable catalog of known identifiers
#[derive(Debug, Clone, Default)]
pub struct CuratedCatalog {
    entries: HashMap<String, u32>,
}

impl CuratedCatalog {
    /// Creates an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the catalog from the built-in table
    pub fn builtin() -> Self {
        Self::empty().with_entries(
            BUILTIN_ENTRIES
                .iter()
                .map(|(id, key)| (id.to_string(), *key)),
        )
    }

    /// Adds entries, replacing existing mappings for the same identifier
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        self.entries.extend(entries);
        self
    }

    /// Looks up the catalog key for a canonical identifier
    pub fn lookup(&self, identifier: &str) -> Option<u32> {
        self.entries.get(identifier).copied()
    }

    /// Returns true if the identifier is curated
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = CatalogEntry<'_>> {
        self.entries.iter().map(|(identifier, key)| CatalogEntry {
            identifier: identifier.as_str(),
            catalog_key: *key,
        })
    }
}
