//! HTML-to-text flattening for content blocks.
//!
//! Sponsor content is free-form markup whose line structure carries meaning
//! (one field per line), so flattening keeps `<br>` and block boundaries as
//! newlines instead of collapsing everything into one run of text.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// `<br>`, `<br/>`, `<br />` in any case.
static BR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?\s*>").expect("BR_TAG regex"));

/// Closing tags of block-level elements that end a line.
static BLOCK_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(?:p|div|li|h[1-6]|tr|section|article)\s*>").expect("BLOCK_CLOSE regex")
});

/// Script and style bodies never contribute text.
static SCRIPT_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("SCRIPT_OR_STYLE regex")
});

/// Any remaining tag (or comment) once line breaks have been placed.
static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").expect("ANY_TAG regex"));

/// Horizontal whitespace runs within a line (NBSP included).
static INLINE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{00A0}\u{3000}]+").expect("INLINE_SPACE regex"));

/// Decode HTML entities (`&amp;`, `&#x1F3AF;`, `&nbsp;`, …).
#[must_use]
pub fn decode_entities(s: &str) -> String {
    html_escape::decode_html_entities(s).into_owned()
}

/// Flatten a fragment of HTML into newline-separated text.
///
/// `<br>` and closing block tags become line breaks, every other tag is
/// stripped, entities are decoded last (so `&lt;b&gt;` survives as text),
/// lines are trimmed and blank lines dropped.
#[must_use]
pub fn html_to_text_with_breaks(html: &str) -> String {
    let text = SCRIPT_OR_STYLE.replace_all(html, "");
    let text = BR_TAG.replace_all(&text, "\n");
    let text = BLOCK_CLOSE.replace_all(&text, "\n");
    let text = ANY_TAG.replace_all(&text, "");
    let text = decode_entities(&text);

    text.lines()
        .map(|line| INLINE_SPACE.replace_all(line, " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncate to at most `max_chars` Unicode scalar values.
#[must_use]
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}
