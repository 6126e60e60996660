//! Compiled regex patterns for profile extraction.
//!
//! Fixed patterns are compiled once at first use with `LazyLock`. Patterns
//! that embed a caller-supplied literal or a configured bound are built with
//! [`escape`] and memoized through [`get_or_compile`].
//!
//! Every "any character" run in these patterns is either a negated class
//! that cannot cross a tag boundary or an explicitly bounded repetition.

#![allow(clippy::expect_used)]

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use regex::Regex;

// =============================================================================
// Escaping and dynamic patterns
// =============================================================================

/// Escape a literal so it can be embedded in a pattern verbatim.
///
/// Total: every input yields a pattern matching exactly that input.
#[must_use]
pub fn escape(literal: &str) -> String {
    regex::escape(literal)
}

/// Compiled dynamic patterns keyed by their source text.
///
/// `None` entries record patterns that failed to compile so they are not
/// retried on every call.
static PATTERN_CACHE: LazyLock<RwLock<HashMap<String, Option<Regex>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a pattern, caching the result.
///
/// Returns `None` for a pattern the regex engine refuses (for instance one
/// exceeding its size limit); callers treat that as "no match".
#[must_use]
pub fn get_or_compile(pattern: &str) -> Option<Regex> {
    {
        let cache = PATTERN_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.get(pattern) {
            return cached.clone();
        }
    }

    let compiled = Regex::new(pattern).ok();
    let mut cache = PATTERN_CACHE.write().unwrap_or_else(PoisonError::into_inner);
    cache
        .entry(pattern.to_string())
        .or_insert(compiled)
        .clone()
}

// =============================================================================
// Hashtags
// =============================================================================

/// Class tokens whose text is scanned for hashtags.
pub const HASHTAG_CONTAINERS: &[&str] = &["hashtag", "hashtags", "tag", "tags", "keyword", "keywords"];

/// `#` followed by ASCII word characters, kana, or Han ideographs.
///
/// Kana includes the prolonged sound mark (ー), which Unicode assigns to the
/// Common script.
pub static HASHTAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#(?:[A-Za-z0-9_]{1,50}|[\p{Hiragana}\p{Katakana}ー]{1,20}|\p{Han}{1,20})")
        .expect("HASHTAG regex")
});

// =============================================================================
// Titles
// =============================================================================

/// Trailing "- Prairie Card" / "| Prairie Card" suffix of a page title.
pub static TITLE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*[-|｜–—]\s*Prairie\s?Card\s*$").expect("TITLE_SUFFIX regex")
});

/// Separators left dangling at the end of a name recovered from a title.
pub static TRAILING_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\-|｜:：–—]+$").expect("TRAILING_SEPARATORS regex")
});

/// Pattern recovering a name from "<name> のプロフィール" style titles.
///
/// The name is non-greedy and capped at `max_chars`; the suffix must be
/// followed by whitespace or the end of the string.
#[must_use]
pub fn title_name_pattern(max_chars: usize) -> String {
    format!(r"(?i)^\s*(.{{1,{max_chars}}}?)\s*(?:のプロフィール|Profile|Prairie\s?Card)(?:\s|$)")
}

// =============================================================================
// Social links
// =============================================================================

/// Domain-anchored profile URL patterns, one per platform.
///
/// The host must follow the scheme directly, so a known domain appearing in
/// a query string or path of another site does not match.
pub static TWITTER_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.|mobile\.)?(?:twitter\.com|x\.com)/[A-Za-z0-9_]{1,50}(?:[/?#]\S{0,200})?$")
        .expect("TWITTER_URL regex")
});

pub static GITHUB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.)?github\.com/[A-Za-z0-9](?:[A-Za-z0-9-]{0,38})(?:[/?#]\S{0,200})?$")
        .expect("GITHUB_URL regex")
});

pub static LINKEDIN_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:[a-z]{2,3}\.|www\.)?linkedin\.com/(?:in|pub|company)/[^\s/?#]{1,100}(?:[/?#]\S{0,200})?$")
        .expect("LINKEDIN_URL regex")
});

pub static FACEBOOK_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.|m\.)?(?:facebook\.com|fb\.com)/[^\s/?#]{1,100}(?:[/?#]\S{0,200})?$")
        .expect("FACEBOOK_URL regex")
});

pub static QIITA_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.)?qiita\.com/[A-Za-z0-9_-]{1,50}(?:[/?#]\S{0,200})?$")
        .expect("QIITA_URL regex")
});

pub static ZENN_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.)?zenn\.dev/[A-Za-z0-9_-]{1,50}(?:[/?#]\S{0,200})?$")
        .expect("ZENN_URL regex")
});

/// Any absolute http(s) URL; generic links must at least look like one.
pub static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://[^\s/?#]{1,253}").expect("HTTP_URL regex"));

// =============================================================================
// Text cleaning
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn normalize_whitespace(s: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(s.trim(), " ").into_owned()
}
