//! Error types for prairie-card-parser.
//!
//! Profile extraction itself never fails: every extractor degrades to an
//! empty value. These types cover the surfaces around it: source URL
//! validation, option validation, JSON round-trips and CLI input.

/// Reason a source URL was refused by the validator.
///
/// The boolean validator collapses all of these to `false`; the detailed
/// form exists for logging and for callers that want to report why.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlRejection {
    /// Input starts with `javascript:`, `data:`, `vbscript:` or `file:`.
    #[error("disallowed scheme prefix")]
    DangerousScheme,

    /// The URL parser refused the input.
    #[error("unparseable URL: {0}")]
    Unparseable(String),

    /// Scheme other than `https`.
    #[error("scheme must be https, got {0}")]
    NotHttps(String),

    /// Explicit port other than 443.
    #[error("port {0} not allowed")]
    Port(u16),

    /// Host other than the single allowed Prairie Card host.
    #[error("host {0:?} not allowed")]
    Host(String),

    /// `..` segments (raw or percent-encoded) or an empty path segment.
    #[error("path traversal sequence")]
    PathTraversal,

    /// Query string smuggles a disallowed scheme.
    #[error("disallowed scheme in query string")]
    DangerousQuery,

    /// Path is neither `/u/{username}` nor `/cards/{uuid}`.
    #[error("path {0:?} is not a profile path")]
    PathShape(String),
}

/// Error type for the fallible surfaces of the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source URL failed validation.
    #[error("invalid Prairie Card URL: {0}")]
    InvalidUrl(#[from] UrlRejection),

    /// Options carry a bound that would disable extraction.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Profile JSON could not be produced or read back.
    #[error("profile serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
