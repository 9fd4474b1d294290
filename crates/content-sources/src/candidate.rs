// FILE: src/candidate.rs

use athena_core::{
    meets_length_floor, Dialect, FetchedText, Provenance, RawFetchResult, MIN_RAW_TEXT_LEN,
};

/// Normalizes one candidate body and accepts it if it clears both floors
///
/// `None` means the caller should try its next candidate URL.
pub(crate) fn accept(
    body: String,
    origin: Provenance,
    dialect: Dialect,
    url: &str,
) -> Option<FetchedText> {
    if !meets_length_floor(&body, MIN_RAW_TEXT_LEN) {
        log::debug!("Body from {} too short ({} chars)", url, body.chars().count());
        return None;
    }

    let raw = RawFetchResult::new(body, origin, dialect, url);
    let text = athena_text::normalize_fetch(&raw);
    if !meets_length_floor(&text, dialect.min_usable_len()) {
        log::debug!(
            "Body from {} normalized to {} chars as {}, below floor",
            url,
            text.chars().count(),
            dialect
        );
        return None;
    }

    Some(FetchedText {
        text,
        origin,
        dialect,
        url: raw.url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_floor() {
        let short = "a".repeat(MIN_RAW_TEXT_LEN - 1);
        assert!(accept(short, Provenance::MetadataArchive, Dialect::OcrDump, "u").is_none());
    }

    #[test]
    fn test_normalized_floor_applies_per_dialect() {
        // Page-number lines count toward the raw floor but not the normalized one
        let padded = |len: usize| format!("{}\n{}", "a".repeat(len), "17\n".repeat(200));

        assert!(accept(padded(499), Provenance::MetadataArchive, Dialect::OcrDump, "u").is_none());

        let hit = accept(padded(500), Provenance::MetadataArchive, Dialect::OcrDump, "u").unwrap();
        assert_eq!(hit.text, "a".repeat(500));
        assert_eq!(hit.url, "u");
        assert_eq!(hit.dialect, Dialect::OcrDump);
    }

    #[test]
    fn test_script_only_page_is_rejected() {
        let page = format!(
            "<!DOCTYPE html><html><head><script>{}</script></head><body><nav>Menu</nav></body></html>",
            "var x = 1;".repeat(120)
        );
        assert!(page.chars().count() >= MIN_RAW_TEXT_LEN);
        assert!(accept(page, Provenance::MetadataArchive, Dialect::Html, "u").is_none());
    }
}
