//! Book identifier canonicalization and check-digit validation
//!
//! Identifiers are the 10- and 13-digit ISBN classes. Canonicalization only
//! removes hyphens and whitespace; validation applies the check-digit rule
//! of the resulting length class. Everything here is pure.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length class of a canonical identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierKind {
    Isbn10,
    Isbn13,
}

/// A canonical identifier that passed its check-digit validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookIdentifier {
    value: String,
    kind: IdentifierKind,
}

impl BookIdentifier {
    /// Canonicalizes and validates a raw identifier
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let value = canonicalize(raw);
        let kind = match value.chars().count() {
            10 => IdentifierKind::Isbn10,
            13 => IdentifierKind::Isbn13,
            n => {
                return Err(AppError::invalid_identifier(
                    raw,
                    format!("expected 10 or 13 characters, got {}", n),
                ))
            }
        };

        let valid = match kind {
            IdentifierKind::Isbn10 => validate_isbn10(&value),
            IdentifierKind::Isbn13 => validate_isbn13(&value),
        };

        if !valid {
            return Err(AppError::invalid_identifier(raw, "check digit mismatch"));
        }

        Ok(Self { value, kind })
    }

    /// Returns the canonical digit string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the length class
    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }
}

impl fmt::Display for BookIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for BookIdentifier {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for BookIdentifier {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BookIdentifier> for String {
    fn from(id: BookIdentifier) -> Self {
        id.value
    }
}

/// Removes hyphens and whitespace from a raw identifier
pub fn canonicalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// Returns true if `raw` canonicalizes to a valid ISBN-10 or ISBN-13
pub fn is_valid_identifier(raw: &str) -> bool {
    BookIdentifier::parse(raw).is_ok()
}

fn digit_value(c: char) -> Option<u32> {
    c.to_digit(10).filter(|_| c.is_ascii_digit())
}

/// Descending weights 10..2 over the first nine digits plus the check value
/// (`X` = 10) must be divisible by 11.
fn validate_isbn10(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() != 10 {
        return false;
    }

    let mut total = 0u32;
    for (i, c) in chars[..9].iter().enumerate() {
        match digit_value(*c) {
            Some(d) => total += (10 - i as u32) * d,
            None => return false,
        }
    }

    let check = match chars[9] {
        'X' => 10,
        c => match digit_value(c) {
            Some(d) => d,
            None => return false,
        },
    };

    (total + check) % 11 == 0
}

/// Alternating weights 1,3 over the first twelve digits;
/// check digit = (10 - sum mod 10) mod 10.
fn validate_isbn13(value: &str) -> bool {
    let digits: Option<Vec<u32>> = value.chars().map(digit_value).collect();
    let digits = match digits {
        Some(d) if d.len() == 13 => d,
        _ => return false,
    };

    let total: u32 = digits[..12]
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    let check = (10 - (total % 10)) % 10;

    check == digits[12]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_strips_separators() {
        assert_eq!(canonicalize("978-0-14-143951-8"), "9780141439518");
        assert_eq!(canonicalize(" 0 306 40615 2 "), "0306406152");
        assert_eq!(canonicalize("abc"), "abc");
    }

    #[test]
    fn test_valid_isbn13() {
        let id = BookIdentifier::parse("978-0-14-143951-8").unwrap();
        assert_eq!(id.as_str(), "9780141439518");
        assert_eq!(id.kind(), IdentifierKind::Isbn13);
    }

    #[test]
    fn test_invalid_isbn13_check_digit() {
        assert!(!is_valid_identifier("9780141439519"));
    }

    #[test]
    fn test_isbn13_rejects_non_digits() {
        assert!(!is_valid_identifier("978014143951X"));
    }

    #[test]
    fn test_valid_isbn10() {
        let id = BookIdentifier::parse("0-306-40615-2").unwrap();
        assert_eq!(id.as_str(), "0306406152");
        assert_eq!(id.kind(), IdentifierKind::Isbn10);
    }

    #[test]
    fn test_isbn10_with_x_check() {
        assert!(is_valid_identifier("080442957X"));
        assert!(!is_valid_identifier("080442957x"));
        assert!(!is_valid_identifier("08044295X7"));
    }

    #[test]
    fn test_1234567890_is_invalid() {
        assert!(!is_valid_identifier("1234567890"));
        let err = BookIdentifier::parse("1234567890").unwrap_err();
        assert!(matches!(err, AppError::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_other_lengths_are_invalid() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("12345"));
        assert!(!is_valid_identifier("97801414395181"));
    }

    #[test]
    fn test_validation_invariant_under_separators() {
        let samples = [
            "9780141439518",
            "9780141439519",
            "0306406152",
            "0306406153",
            "080442957X",
            "1234567890",
        ];
        for raw in samples {
            let expected = is_valid_identifier(raw);
            let chars: Vec<char> = raw.chars().collect();
            for split in 1..chars.len() {
                let hyphenated: String = chars[..split]
                    .iter()
                    .chain(['-'].iter())
                    .chain(chars[split..].iter())
                    .collect();
                let spaced = hyphenated.replace('-', " ");
                assert_eq!(is_valid_identifier(&hyphenated), expected, "{}", hyphenated);
                assert_eq!(is_valid_identifier(&spaced), expected, "{}", spaced);
            }
        }
    }

    #[test]
    fn test_isbn13_check_matches_for_every_last_digit() {
        // Exactly one final digit satisfies the check for a given 12-digit prefix
        let prefix = "978014143951";
        let valid: Vec<u32> = (0..10)
            .filter(|d| is_valid_identifier(&format!("{}{}", prefix, d)))
            .collect();
        assert_eq!(valid, vec![8]);
    }

    #[test]
    fn test_serde_round_trip_through_string() {
        let id = BookIdentifier::parse("9780141439518").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"9780141439518\"");
        let back: BookIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<BookIdentifier>("\"1234567890\"").is_err());
    }
}
