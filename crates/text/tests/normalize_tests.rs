//! Integration tests for the dialect normalizers

use athena_core::Dialect;
use athena_text::{normalize, normalize_plain_text};

const ARCHIVE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Full text of "Frankenstein"</title>
  <script>window.archive_analytics = { trackPageView: function () { return "tracker"; } };</script>
</head>
<body>
  <div class="topnav">Skip to main content</div>
  <p>Internet Archive</p>
  <p>Ask the publishers to restore access to 500,000+ books.</p>
  <p>You will rejoice to hear that no disaster has accompanied<a href="/details/frank">the commencement</a>of an enterprise.</p>
  <p>I arrived here yesterday, and my first task is to assure my dear sister of my welfare.</p>
</body>
</html>"#;

#[test]
fn test_archive_html_scenario() {
    let text = normalize(ARCHIVE_PAGE, Dialect::Html);

    assert!(!text.contains("archive_analytics"));
    assert!(!text.contains("tracker"));
    assert!(!text.contains("Skip to main content"));
    assert!(!text.contains("Internet Archive"));
    assert!(!text.contains("restore access"));
    assert!(!text.contains("the commencement"));
    assert!(text.contains("no disaster has accompanied of an enterprise."));
    assert!(text.contains("I arrived here yesterday"));
}

#[test]
fn test_archive_html_paragraph_layout() {
    let text = normalize(ARCHIVE_PAGE, Dialect::Html);
    let paragraphs: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(paragraphs.len(), 3);
    assert_eq!(paragraphs[0], "\"Frankenstein\"");
    assert!(paragraphs.iter().all(|p| p.trim() == *p && !p.is_empty()));
}

#[test]
fn test_plain_text_outputs_trimmed_non_empty_lines() {
    let raw = "The Project Gutenberg eBook of Emma\n\n*** START OF THE PROJECT GUTENBERG EBOOK EMMA ***\n\n\
               VOLUME I\n\n\nCHAPTER I   \n\n\nEmma Woodhouse, handsome, clever, and rich.\n\n\
               *** END OF THE PROJECT GUTENBERG EBOOK EMMA ***\nlicense";
    let text = normalize_plain_text(raw);
    assert_eq!(
        text,
        "VOLUME I\nCHAPTER I\nEmma Woodhouse, handsome, clever, and rich."
    );
    for line in text.lines() {
        assert!(!line.is_empty());
        assert_eq!(line.trim_end(), line);
    }
    assert_eq!(normalize_plain_text(&text), text);
}

#[test]
fn test_empty_inputs_normalize_to_empty() {
    for dialect in [Dialect::PlainText, Dialect::Html, Dialect::OcrDump] {
        assert_eq!(normalize("", dialect), "");
    }
}
