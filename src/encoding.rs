//! Input transcoding.
//!
//! Prairie Card pages are UTF-8, but profile HTML also arrives from caches
//! and mirrors that re-serve it as Shift_JIS or EUC-JP. Raw bytes are
//! decoded to UTF-8 before any extraction runs.
//!
//! Encoding is taken from, in order: a byte order mark, a `charset`
//! declaration in a `<meta>` tag within the first [`SNIFF_WINDOW`] bytes,
//! then UTF-8. Invalid sequences become U+FFFD; decoding never fails.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Number of leading bytes searched for a charset declaration.
pub const SNIFF_WINDOW: usize = 2048;

/// `charset=` inside a `<meta>` tag, covering both `<meta charset>` and the
/// `http-equiv="Content-Type"` form.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s[^>]{0,200}?charset\s*=\s*["']?([A-Za-z0-9_.:\-]{1,40})"#)
        .expect("META_CHARSET regex")
});

/// Result of decoding raw input.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
    /// True if any byte sequence had to be replaced.
    pub had_errors: bool,
}

/// Charset label declared by a `<meta>` tag, if any.
#[must_use]
pub fn declared_charset(head: &str) -> Option<&str> {
    META_CHARSET
        .captures(head)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Detect the encoding of raw HTML bytes.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_WINDOW)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode raw HTML bytes to UTF-8.
///
/// # Examples
///
/// ```
/// use prairie_card_parser::encoding::decode_html;
///
/// let decoded = decode_html(b"<html><body><h1>Alice</h1></body></html>");
/// assert!(decoded.text.contains("Alice"));
/// assert!(!decoded.had_errors);
/// ```
#[must_use]
pub fn decode_html(bytes: &[u8]) -> Decoded {
    let detected = detect_encoding(bytes);
    let (text, encoding, had_errors) = detected.decode(bytes);
    Decoded {
        text: text.into_owned(),
        encoding,
        had_errors,
    }
}
