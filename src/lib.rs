//! # prairie-card-parser
//!
//! Extracts attendee profiles from Prairie Card HTML pages.
//!
//! Given the markup of a profile page, the parser recovers the attendee's
//! name, headline fields, bounded skill/interest lists, social links and
//! sponsor content blocks, and returns them as a [`Profile`] ready to be
//! stored as JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use prairie_card_parser::{parse_profile, validate_source_url};
//!
//! assert!(validate_source_url("https://my.prairie.cards/u/alice"));
//!
//! let html = r#"<html><body>
//!   <h1 class="profile-name">Alice</h1>
//!   <span class="skill">Rust</span><span class="skill">Kubernetes</span>
//! </body></html>"#;
//!
//! let profile = parse_profile(html);
//! assert_eq!(profile.basic.name, "Alice");
//! assert_eq!(profile.details.skills, vec!["Rust", "Kubernetes"]);
//! ```
//!
//! ## Guarantees
//!
//! - Parsing never fails and never panics: malformed, truncated or empty
//!   input yields a profile with empty fields and a placeholder name.
//! - Every list is deduplicated and capped, the bio is length-capped.
//! - Matching cost is linear in the input: every pattern gap is bounded.
//! - Parses share no mutable state and can run concurrently.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM query helpers over `dom_query`.
pub mod dom;

/// HTML-to-text flattening and entity decoding.
pub mod html_processing;

/// Field, list, hashtag and social link extractors.
pub mod extractor;

/// `<meta>` tag extraction and name resolution.
pub mod metadata;

/// Sponsor content blocks and the CNDW2025 mini-format.
pub mod blocks;

/// Source URL validation.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result, UrlRejection};
pub use extract::assemble_profile;
pub use options::{Limits, Options, DEFAULT_CONTENT_BLOCK_MARKER, DEFAULT_PLACEHOLDER_NAME};
pub use patterns::escape;
pub use result::{
    BasicInfo, Cndw2025Fields, CustomContent, Details, Profile, ProfileContentBlock, ProfileMeta,
    SocialLinks, CONNECTED_BY, EVENT_HASHTAG,
};

/// Parses a profile page using default options.
///
/// `None` is treated as an empty document.
///
/// # Example
///
/// ```rust
/// use prairie_card_parser::parse_profile;
///
/// let profile = parse_profile(None::<&str>);
/// assert_eq!(profile.basic.name, "名前未設定");
/// ```
#[must_use]
pub fn parse_profile<'a>(html: impl Into<Option<&'a str>>) -> Profile {
    parse_profile_with_options(html, &Options::default())
}

/// Parses a profile page with custom options.
///
/// # Example
///
/// ```rust
/// use prairie_card_parser::{parse_profile_with_options, Limits, Options};
///
/// let html = r#"<span class="skill">a</span><span class="skill">b</span><span class="skill">c</span>"#;
/// let options = Options {
///     limits: Limits { max_skills: 2, ..Limits::default() },
///     ..Options::default()
/// };
/// let profile = parse_profile_with_options(html, &options);
/// assert_eq!(profile.details.skills, vec!["a", "b"]);
/// ```
#[must_use]
pub fn parse_profile_with_options<'a>(html: impl Into<Option<&'a str>>, options: &Options) -> Profile {
    extract::assemble_profile(html.into().unwrap_or_default(), options)
}

/// Parses a profile page from raw bytes.
///
/// The charset is taken from a byte order mark or a `<meta>` declaration,
/// defaulting to UTF-8. Undecodable bytes become U+FFFD.
///
/// # Example
///
/// ```rust
/// use prairie_card_parser::parse_profile_bytes;
///
/// let html = b"<html><head><meta charset=\"utf-8\"></head><body><h1>Alice</h1></body></html>";
/// assert_eq!(parse_profile_bytes(html).basic.name, "Alice");
/// ```
#[must_use]
pub fn parse_profile_bytes(html: &[u8]) -> Profile {
    parse_profile_bytes_with_options(html, &Options::default())
}

/// Parses a profile page from raw bytes with custom options.
#[must_use]
pub fn parse_profile_bytes_with_options(html: &[u8], options: &Options) -> Profile {
    let decoded = encoding::decode_html(html);
    if options.debug {
        tracing::debug!(
            encoding = decoded.encoding.name(),
            had_errors = decoded.had_errors,
            "decoded input"
        );
    }
    extract::assemble_profile(&decoded.text, options)
}

/// True if `url` is an acceptable Prairie Card profile URL.
///
/// Only `https://my.prairie.cards/u/{username}` and
/// `https://my.prairie.cards/cards/{uuid}` are accepted.
#[must_use]
pub fn validate_source_url(url: &str) -> bool {
    url_utils::validate_prairie_card_url(url)
}

/// Checks a source URL, returning the parsed URL or the reason it was refused.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] carrying the first failed check.
///
/// # Example
///
/// ```rust
/// use prairie_card_parser::{check_source_url, Error, UrlRejection};
///
/// let err = check_source_url("http://my.prairie.cards/u/alice").unwrap_err();
/// assert!(matches!(err, Error::InvalidUrl(UrlRejection::NotHttps(_))));
/// ```
pub fn check_source_url(url: &str) -> Result<url::Url> {
    Ok(url_utils::check_prairie_card_url(url)?)
}
