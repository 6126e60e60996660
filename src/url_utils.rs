//! Prairie Card source URL validation.
//!
//! A profile may only be fetched from `https://my.prairie.cards` under one
//! of two path shapes. Checks run in a fixed order and the first failure
//! decides the [`UrlRejection`]. The raw input is inspected before parsing
//! because the URL parser normalizes away exactly the sequences
//! (`..`, `%2e%2e`) that must be refused.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::UrlRejection;

/// The only host profiles are fetched from.
pub const ALLOWED_HOST: &str = "my.prairie.cards";

/// Scheme prefixes refused before parsing, and inside query strings.
const DANGEROUS_SCHEMES: &[&str] = &["javascript:", "data:", "vbscript:", "file:"];

/// Raw-input sequences that denote a parent directory.
const TRAVERSAL_SEQUENCES: &[&str] = &["..", "%2e%2e", "%2e.", ".%2e"];

/// `/u/{username}` with an optional trailing slash.
static USER_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/u/[A-Za-z0-9._-]+/?$").expect("USER_PATH regex"));

/// `/cards/{uuid}` with an optional trailing slash.
static CARD_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/cards/[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}/?$")
        .expect("CARD_PATH regex")
});

/// Check a candidate source URL, reporting why it was refused.
///
/// # Errors
///
/// Returns the first [`UrlRejection`] that applies, in this order:
/// dangerous scheme prefix, unparseable, non-https, port, host,
/// traversal, dangerous query, path shape.
pub fn check_prairie_card_url(input: &str) -> Result<Url, UrlRejection> {
    let raw = input.trim();
    let lowered = raw.to_ascii_lowercase();

    if DANGEROUS_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
        return Err(UrlRejection::DangerousScheme);
    }

    let url = Url::parse(raw).map_err(|e| UrlRejection::Unparseable(e.to_string()))?;

    if url.scheme() != "https" {
        return Err(UrlRejection::NotHttps(url.scheme().to_string()));
    }

    // `Url::port` is `None` for the scheme default, so only an explicit
    // non-443 port shows up here.
    if let Some(port) = url.port() {
        if port != 443 {
            return Err(UrlRejection::Port(port));
        }
    }

    match url.host_str() {
        Some(host) if host == ALLOWED_HOST => {}
        other => return Err(UrlRejection::Host(other.unwrap_or_default().to_string())),
    }

    if TRAVERSAL_SEQUENCES.iter().any(|seq| lowered.contains(seq)) || url.path().contains("//") {
        return Err(UrlRejection::PathTraversal);
    }

    if let Some(query) = url.query() {
        let decoded: String = url
            .query_pairs()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        let haystacks = [query.to_ascii_lowercase(), decoded.to_ascii_lowercase()];
        if haystacks
            .iter()
            .any(|h| DANGEROUS_SCHEMES.iter().any(|scheme| h.contains(scheme)))
        {
            return Err(UrlRejection::DangerousQuery);
        }
    }

    let path = url.path();
    if !USER_PATH.is_match(path) && !CARD_PATH.is_match(path) {
        return Err(UrlRejection::PathShape(path.to_string()));
    }

    Ok(url)
}

/// True if `input` is an acceptable Prairie Card profile URL.
#[must_use]
pub fn validate_prairie_card_url(input: &str) -> bool {
    check_prairie_card_url(input).is_ok()
}
