//! HTML meta tag extraction.
//!
//! Works on the raw markup rather than the parsed tree so a value can be
//! read without building a document, and so the cost of matching is set by
//! the pattern bounds alone.
//!
//! Every gap between `<meta` and the attributes of interest is a bounded
//! repetition (`[^>]{0,N}`) and the captured content is length-capped. An
//! attribute value thousands of characters long therefore cannot drag the
//! matcher across the document.

use crate::html_processing::decode_entities;
use crate::options::Limits;
use crate::patterns;

/// Attribute that names a meta tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAttr {
    Property,
    Name,
}

impl KeyAttr {
    fn as_str(self) -> &'static str {
        match self {
            KeyAttr::Property => "property",
            KeyAttr::Name => "name",
        }
    }
}

/// Build the four ordering patterns for `property`.
///
/// Order: `property…content`, `content…property`, `name…content`,
/// `content…name`. Quoted values accept either quote style; the content
/// capture lives in group 1 (double-quoted) or group 2 (single-quoted).
fn meta_patterns(property: &str, limits: &Limits) -> [String; 4] {
    let key = patterns::escape(property);
    let gap = limits.attr_gap;
    let cap = limits.meta_content_max;
    let content = format!(r#"content\s*=\s*(?:"([^"]{{0,{cap}}})"|'([^']{{0,{cap}}})')"#);

    let key_then_content = |attr: KeyAttr| {
        format!(
            r#"(?i)<meta\s[^>]{{0,{gap}}}?{attr}\s*=\s*["']{key}["'][^>]{{0,{gap}}}?{content}"#,
            attr = attr.as_str()
        )
    };
    let content_then_key = |attr: KeyAttr| {
        format!(
            r#"(?i)<meta\s[^>]{{0,{gap}}}?{content}[^>]{{0,{gap}}}?{attr}\s*=\s*["']{key}["']"#,
            attr = attr.as_str()
        )
    };

    [
        key_then_content(KeyAttr::Property),
        content_then_key(KeyAttr::Property),
        key_then_content(KeyAttr::Name),
        content_then_key(KeyAttr::Name),
    ]
}

/// Extract the `content` of the `<meta>` tag named `property`.
///
/// Matches `property=` and `name=` keyed tags in either attribute order,
/// case-insensitively. The first pattern that matches wins; its capture is
/// trimmed and entity-decoded. Empty content counts as absent.
#[must_use]
pub fn extract_meta_content(html: &str, property: &str, limits: &Limits) -> Option<String> {
    if html.is_empty() || property.trim().is_empty() {
        return None;
    }

    for pattern in meta_patterns(property.trim(), limits) {
        let Some(re) = patterns::get_or_compile(&pattern) else {
            continue;
        };
        let Some(caps) = re.captures(html) else {
            continue;
        };
        let value = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| decode_entities(m.as_str().trim()))
            .unwrap_or_default();
        if !value.is_empty() {
            return Some(value);
        }
    }
    None
}

/// First non-empty meta value among `properties`, in order.
#[must_use]
pub fn first_meta_content(html: &str, properties: &[&str], limits: &Limits) -> Option<String> {
    properties
        .iter()
        .find_map(|property| extract_meta_content(html, property, limits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn meta(html: &str, property: &str) -> Option<String> {
        extract_meta_content(html, property, &Limits::default())
    }

    #[test]
    fn test_property_then_content() {
        let html = r#"<meta property="og:title" content="Alice のプロフィール">"#;
        assert_eq!(meta(html, "og:title").as_deref(), Some("Alice のプロフィール"));
    }

    #[test]
    fn test_content_then_property() {
        let html = r#"<meta content="https://img.example/a.png" property="og:image" />"#;
        assert_eq!(meta(html, "og:image").as_deref(), Some("https://img.example/a.png"));
    }

    #[test]
    fn test_name_orderings() {
        let html = r#"<meta name="description" content="Hello there">"#;
        assert_eq!(meta(html, "description").as_deref(), Some("Hello there"));
        let html = r#"<meta content='Single quoted' name='twitter:title'>"#;
        assert_eq!(meta(html, "twitter:title").as_deref(), Some("Single quoted"));
    }

    #[test]
    fn test_case_insensitive_and_entities() {
        let html = r#"<META PROPERTY="OG:DESCRIPTION" CONTENT="Tom &amp; Jerry's">"#;
        assert_eq!(meta(html, "og:description").as_deref(), Some("Tom & Jerry's"));
    }

    #[test]
    fn test_property_is_escaped() {
        // `.` in the property must not act as a wildcard.
        let html = r#"<meta property="ogXtitle" content="wrong">"#;
        assert_eq!(meta(html, "og.title"), None);
    }

    #[test]
    fn test_missing_and_empty() {
        assert_eq!(meta("<meta property=\"og:title\" content=\"\">", "og:title"), None);
        assert_eq!(meta("<p>no meta</p>", "og:title"), None);
        assert_eq!(meta("", "og:title"), None);
        assert_eq!(meta("<meta name=\"x\" content=\"y\">", ""), None);
    }

    #[test]
    fn test_gap_bound_limits_reach() {
        let padding = "x".repeat(500);
        let html = format!(r#"<meta data-pad="{padding}" property="og:title" content="far">"#);
        assert_eq!(meta(&html, "og:title"), None);

        let roomy = Limits { attr_gap: 600, ..Limits::default() };
        assert_eq!(
            extract_meta_content(&html, "og:title", &roomy).as_deref(),
            Some("far")
        );
    }

    #[test]
    fn test_content_cap() {
        let long = "y".repeat(2000);
        let html = format!(r#"<meta property="og:description" content="{long}">"#);
        assert_eq!(meta(&html, "og:description"), None);
    }

    #[test]
    fn test_adversarial_attribute_is_fast() {
        // Warm the pattern cache so only matching is timed.
        let _ = meta("<meta property=\"og:title\" content=\"x\">", "og:title");

        let attack = format!(
            r#"<meta property="og:title" content="{}"#,
            "a\"b'c ".repeat(2000)
        );
        let start = Instant::now();
        let _ = meta(&attack, "og:title");
        let elapsed = start.elapsed();
        assert!(elapsed < Duration::from_secs(2), "meta extraction took {elapsed:?}");
    }

    #[test]
    fn test_first_meta_content_order() {
        let html = r#"<meta property="og:description" content="og"><meta name="description" content="plain">"#;
        let limits = Limits::default();
        assert_eq!(
            first_meta_content(html, &["description", "og:description"], &limits).as_deref(),
            Some("plain")
        );
    }
}
