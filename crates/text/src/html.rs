//! HTML pages from the scanned text archive

use crate::common::{collapse_whitespace, decode_entities, finish_lines, strip_chrome_phrases};
use crate::consts::*;

/// Converts an archive HTML page into paragraphs separated by blank lines
pub fn normalize_html(raw: &str) -> String {
    let mut text = raw.to_string();

    for (pattern, replacement) in [
        (&*SCRIPT_BLOCK, ""),
        (&*STYLE_BLOCK, ""),
        (&*NOSCRIPT_BLOCK, ""),
        (&*COMMENT_BLOCK, ""),
        (&*HEADER_BLOCK, "\n"),
        (&*FOOTER_BLOCK, "\n"),
        (&*NAV_BLOCK, "\n"),
        (&*ASIDE_BLOCK, "\n"),
        (&*CHROME_DIV, "\n"),
        (&*ANCHOR, " "),
        (&*BREAK_TAG, "\n"),
        (&*PARAGRAPH_CLOSE, "\n\n"),
        (&*HEADING_CLOSE, "\n\n"),
        (&*DIV_CLOSE, "\n"),
        (&*SPAN_CLOSE, " "),
        (&*ANY_TAG, " "),
    ] {
        text = pattern.replace_all(&text, replacement).into_owned();
    }

    let text = decode_entities(&text);
    let text = strip_chrome_phrases(&text);
    let text = collapse_whitespace(&text);

    finish_lines(&text, "\n\n")
}
