//! Plain text wrapped in a license banner

use crate::consts::*;

/// Lines skipped when a banner is present but has no start marker
const UNMARKED_HEADER_LINES: usize = 20;

/// Restricts `raw` to the text between the banner markers
///
/// With no start marker, leading 20-line blocks are dropped for as long as
/// they still mention the banner, so the output never re-triggers the skip.
fn interior(raw: &str) -> Vec<&str> {
    let lines: Vec<&str> = raw.lines().collect();

    let start = lines.iter().position(|line| START_MARKER.is_match(line));
    let body_start = start.map_or(0, |i| i + 1);
    let body_end = lines[body_start..]
        .iter()
        .position(|line| END_MARKER.is_match(line))
        .map_or(lines.len(), |i| body_start + i);
    let mut body = &lines[body_start..body_end];

    if start.is_none() {
        while body.len() > UNMARKED_HEADER_LINES
            && body[..UNMARKED_HEADER_LINES]
                .iter()
                .any(|line| BANNER_SIGNATURE.is_match(line))
        {
            body = &body[UNMARKED_HEADER_LINES..];
        }
    }

    body.to_vec()
}

/// Normalizes a plain-text document
pub fn normalize_plain_text(raw: &str) -> String {
    let body = interior(raw).join("\n");

    let body = PRODUCER_CREDIT.replace_all(&body, "");
    let body = ILLUSTRATION.replace_all(&body, "");
    let body = BRACKETED.replace_all(&body, "");
    let body = EXCESS_NEWLINES.replace_all(&body, "\n\n\n");

    body.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
