//! Passes shared by the HTML and OCR dialects

use crate::consts::*;
use regex::Captures;
use std::borrow::Cow;

/// Minimum characters a line needs to survive the final line filter
const MIN_LINE_CHARS: usize = 3;

/// Decodes the common named entities and numeric references in one pass
///
/// Unknown named entities are dropped. Single-pass decoding means `&amp;lt;`
/// becomes `&lt;`, not `<`.
pub(crate) fn decode_entities(text: &str) -> Cow<'_, str> {
    ENTITY.replace_all(text, |caps: &Captures| {
        let name = &caps[1];
        if let Some(num) = name.strip_prefix('#') {
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => num.parse::<u32>().ok(),
            };
            return code
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default();
        }
        match name {
            "nbsp" => " ",
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            "apos" => "'",
            _ => "",
        }
        .to_string()
    })
}

/// Removes archive page chrome phrases
pub(crate) fn strip_chrome_phrases(text: &str) -> String {
    let mut out = text.to_string();
    for pattern in [
        &*SKIP_TO_CONTENT,
        &*RESTORE_ACCESS,
        &*INTERNET_ARCHIVE,
        &*WAYBACK_MACHINE,
        &*HAMBURGER_ICON,
        &*ICON_CAPTION,
        &*FULL_TEXT_OF,
        &*ILLUSTRATION_MARK,
        &*UNDERSCORE_MARKER,
    ] {
        if let Cow::Owned(replaced) = pattern.replace_all(&out, "") {
            out = replaced;
        }
    }
    out
}

/// Collapses runs of blank lines and horizontal whitespace
pub(crate) fn collapse_whitespace(text: &str) -> String {
    let text = EXCESS_NEWLINES.replace_all(text, "\n\n\n");
    HORIZONTAL_SPACE.replace_all(&text, " ").into_owned()
}

/// Trims lines, drops page numbers and near-empty lines, and joins the rest
pub(crate) fn finish_lines(text: &str, separator: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() >= MIN_LINE_CHARS)
        .filter(|line| !PAGE_NUMBER_LINE.is_match(line))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_named_entities() {
        assert_eq!(
            decode_entities("a&nbsp;b &amp; c &lt;d&gt; &quot;e&quot; &apos;f&#39;"),
            "a b & c <d> \"e\" 'f'"
        );
    }

    #[test]
    fn test_decode_numeric_entities() {
        assert_eq!(decode_entities("&#8212;&#x2014;&#X41;"), "\u{2014}\u{2014}A");
        assert_eq!(decode_entities("bad&#1114112;ref"), "badref");
    }

    #[test]
    fn test_unknown_entities_dropped() {
        assert_eq!(decode_entities("caf&eacute;s &hellip;"), "cafs ");
    }

    #[test]
    fn test_decoding_is_single_pass() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_strip_chrome_phrases() {
        let text = "Skip to main content\nInternet Archive logo\nThe Wayback Machine\n\
                    Ask the publishers to restore access to 500,000+ books.\nChapter I";
        let cleaned = strip_chrome_phrases(text);
        assert!(!cleaned.contains("Skip to main content"));
        assert!(!cleaned.contains("Internet Archive"));
        assert!(!cleaned.contains("Wayback Machine"));
        assert!(!cleaned.contains("restore access"));
        assert!(cleaned.contains("Chapter I"));
    }

    #[test]
    fn test_underscore_markers_removed() {
        assert_eq!(strip_chrome_phrases("before __marker__ after"), "before  after");
    }

    #[test]
    fn test_finish_lines_filters() {
        let text = "  12  \nPage 4\nPAGE 4 of 300\nok\nA real line of prose.\n\n  Another one  ";
        assert_eq!(
            finish_lines(text, "\n"),
            "A real line of prose.\nAnother one"
        );
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a    b\n\n\n\n\n\nc"), "a b\n\n\nc");
    }
}
