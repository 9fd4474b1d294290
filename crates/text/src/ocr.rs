//! Raw OCR text dumps

use crate::common::{collapse_whitespace, decode_entities, finish_lines, strip_chrome_phrases};
use crate::consts::ANY_TAG;

/// Cleans OCR output: stray tags and chrome removed, one line per line
pub fn normalize_ocr(raw: &str) -> String {
    let text = ANY_TAG.replace_all(raw, "");
    let text = decode_entities(&text);
    let text = strip_chrome_phrases(&text);
    let text = collapse_whitespace(&text);

    finish_lines(&text, "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_joined_by_newline() {
        let raw = "Full text of \"Moby Dick\"\n\nCHAPTER 1\n\nLoomings.\n\n\n\n\n  Call me Ishmael.  ";
        assert_eq!(
            normalize_ocr(raw),
            "\"Moby Dick\"\nCHAPTER 1\nLoomings.\nCall me Ishmael."
        );
    }

    #[test]
    fn test_stray_tags_removed() {
        let raw = "Some <b>bold</b> words\n<pre>\nMore words";
        assert_eq!(normalize_ocr(raw), "Some bold words\nMore words");
    }

    #[test]
    fn test_page_numbers_dropped() {
        let raw = "The first page.\n17\nPage 18\nThe next page.";
        assert_eq!(normalize_ocr(raw), "The first page.\nThe next page.");
    }
}
