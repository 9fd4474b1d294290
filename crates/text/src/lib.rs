//! Text normalization for fetched book bodies
//!
//! Each [`Dialect`] has its own cleanup pass. Normalization never fails;
//! the worst case is an empty string, which callers treat as a miss.

mod common;
mod consts;
mod html;
mod ocr;
mod plain;

use athena_core::{Dialect, RawFetchResult};

pub use html::normalize_html;
pub use ocr::normalize_ocr;
pub use plain::normalize_plain_text;

/// Normalizes `raw` according to its dialect
pub fn normalize(raw: &str, dialect: Dialect) -> String {
    let text = match dialect {
        Dialect::PlainText => normalize_plain_text(raw),
        Dialect::Html => normalize_html(raw),
        Dialect::OcrDump => normalize_ocr(raw),
    };
    log::debug!(
        "Normalized {} body: {} -> {} chars",
        dialect,
        raw.chars().count(),
        text.chars().count()
    );
    text
}

/// Normalizes an adapter result
pub fn normalize_fetch(result: &RawFetchResult) -> String {
    normalize(&result.text, result.dialect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use athena_core::Provenance;

    #[test]
    fn test_dispatch_by_dialect() {
        let html = "<p>Paragraph one here.</p><p>Paragraph two here.</p>";
        assert_eq!(
            normalize(html, Dialect::Html),
            "Paragraph one here.\n\nParagraph two here."
        );
        assert_eq!(
            normalize("line one\n\nline two", Dialect::OcrDump),
            "line one\nline two"
        );
        assert_eq!(
            normalize("line one\n\nline two", Dialect::PlainText),
            "line one\nline two"
        );
    }

    #[test]
    fn test_normalize_fetch() {
        let raw = RawFetchResult::new(
            "<html><body><p>Body text.</p></body></html>",
            Provenance::MetadataArchive,
            Dialect::Html,
            "https://archive.test/x",
        );
        assert_eq!(normalize_fetch(&raw), "Body text.");
    }
}
