use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Plain-text banner markers and annotations
regex!(START_MARKER, r"(?i)START OF (?:THE |THIS )?PROJECT GUTENBERG");
regex!(END_MARKER, r"(?i)END OF (?:THE |THIS )?PROJECT GUTENBERG");
regex!(BANNER_SIGNATURE, r"(?i)project gutenberg");
regex!(PRODUCER_CREDIT, r"(?s)Produced by.*?\n\n");
regex!(ILLUSTRATION, r"(?is)\[Illustration.*?\]");
regex!(BRACKETED, r"\[[^\]\n]*\]");
regex!(EXCESS_NEWLINES, r"\n{4,}");

// Blocks removed together with their content. The regex crate has no
// backreferences, so each element gets its own pattern.
regex!(SCRIPT_BLOCK, r"(?is)<script\b[^>]*>.*?</script\s*>");
regex!(STYLE_BLOCK, r"(?is)<style\b[^>]*>.*?</style\s*>");
regex!(NOSCRIPT_BLOCK, r"(?is)<noscript\b[^>]*>.*?</noscript\s*>");
regex!(COMMENT_BLOCK, r"(?s)<!--.*?-->");
regex!(HEADER_BLOCK, r"(?is)<header\b[^>]*>.*?</header\s*>");
regex!(FOOTER_BLOCK, r"(?is)<footer\b[^>]*>.*?</footer\s*>");
regex!(NAV_BLOCK, r"(?is)<nav\b[^>]*>.*?</nav\s*>");
regex!(ASIDE_BLOCK, r"(?is)<aside\b[^>]*>.*?</aside\s*>");
regex!(
    CHROME_DIV,
    r#"(?is)<div\b[^>]*\bclass\s*=\s*["'][^"']*\b(?:nav|menu|header|footer|sidebar|advertisement|sponsor)\b[^"']*["'][^>]*>.*?</div\s*>"#
);
regex!(ANCHOR, r"(?is)<a\b[^>]*>.*?</a\s*>");

// Structural tags
regex!(BREAK_TAG, r"(?i)<br\s*/?>");
regex!(PARAGRAPH_CLOSE, r"(?i)</p\s*>");
regex!(HEADING_CLOSE, r"(?i)</h[1-6]\s*>");
regex!(DIV_CLOSE, r"(?i)</div\s*>");
regex!(SPAN_CLOSE, r"(?i)</span\s*>");
regex!(ANY_TAG, r"<[^>]+>");

regex!(ENTITY, r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);");

// Site chrome left over in scanned-text pages
regex!(SKIP_TO_CONTENT, r"(?i)Skip to main content");
regex!(RESTORE_ACCESS, r"(?is)Ask the publishers to restore access.*?books");
regex!(INTERNET_ARCHIVE, r"(?i)Internet Archive");
regex!(WAYBACK_MACHINE, r"(?i)Wayback Machine");
regex!(HAMBURGER_ICON, r"(?i)Hamburger icon");
regex!(ICON_CAPTION, r"(?is)an icon used to represent.*?icon");
regex!(FULL_TEXT_OF, r"(?i)Full text of");
regex!(ILLUSTRATION_MARK, r"(?i)\[Illustration\]");
regex!(UNDERSCORE_MARKER, r"__[^_]*__");

regex!(HORIZONTAL_SPACE, r"[ \t\x{a0}]{2,}");
regex!(PAGE_NUMBER_LINE, r"(?i)^(?:\d+|Page \d+|Page \d+ of \d+)$");
