//! Configuration options for profile extraction.
//!
//! Every cap the engine enforces lives in [`Limits`] so the core stays free
//! of module-level tunables and can be tested with tight bounds.

use crate::error::{Error, Result};

/// Placeholder used when no name strategy yields a value.
pub const DEFAULT_PLACEHOLDER_NAME: &str = "名前未設定";

/// `data-object-type` value marking sponsor content anchors.
pub const DEFAULT_CONTENT_BLOCK_MARKER: &str = "profile_content";

/// Size limits applied during extraction.
///
/// List caps are applied after deduplication. Character counts are Unicode
/// scalar values, never bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Default: `15`
    pub max_tags: usize,

    /// Default: `15`
    pub max_skills: usize,

    /// Default: `10`
    pub max_interests: usize,

    /// Default: `10`
    pub max_certifications: usize,

    /// Default: `10`
    pub max_communities: usize,

    /// Hashtags taken from whitelisted containers before merging into tags.
    ///
    /// Default: `10`
    pub max_hashtags: usize,

    /// Maximum bio length in characters.
    ///
    /// Default: `500`
    pub max_bio_chars: usize,

    /// Upper bound of every "any characters" gap inside a tag pattern
    /// (`<meta>` tags, labelled anchors).
    ///
    /// This is what keeps meta matching bounded on adversarial attribute
    /// values thousands of characters long.
    ///
    /// Default: `200`
    pub attr_gap: usize,

    /// Maximum captured `content` length of a `<meta>` tag.
    ///
    /// Default: `1000`
    pub meta_content_max: usize,

    /// Maximum name length recovered from a page title.
    ///
    /// Default: `100`
    pub title_name_max: usize,

    /// Maximum length of the inline-text title fallback for content blocks.
    ///
    /// Default: `100`
    pub inline_title_max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_tags: 15,
            max_skills: 15,
            max_interests: 10,
            max_certifications: 10,
            max_communities: 10,
            max_hashtags: 10,
            max_bio_chars: 500,
            attr_gap: 200,
            meta_content_max: 1000,
            title_name_max: 100,
            inline_title_max: 100,
        }
    }
}

/// Configuration options for profile extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// Parsing does not check options. Hand-built options should pass
/// [`Options::validate`] first: a zero `attr_gap` turns off meta and label
/// matching without any error.
///
/// # Example
///
/// ```rust
/// use prairie_card_parser::{Limits, Options};
///
/// let options = Options {
///     debug: true,
///     limits: Limits {
///         max_skills: 5,
///         ..Limits::default()
///     },
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Emit `tracing` diagnostics for each extraction stage.
    ///
    /// Default: `false`
    pub debug: bool,

    /// Size limits.
    pub limits: Limits,

    /// Name used when every name strategy comes back empty.
    ///
    /// Default: `"名前未設定"`
    pub placeholder_name: String,

    /// `data-object-type` value that marks sponsor content anchors.
    ///
    /// Default: `"profile_content"`
    pub content_block_marker: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            debug: false,
            limits: Limits::default(),
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_string(),
            content_block_marker: DEFAULT_CONTENT_BLOCK_MARKER.to_string(),
        }
    }
}

impl Options {
    /// Reject configurations that would silently disable extraction.
    ///
    /// Zero list caps are allowed (they simply empty the list); zero pattern
    /// bounds and an empty placeholder are not.
    pub fn validate(&self) -> Result<()> {
        let l = &self.limits;
        let bounds = [
            ("attr_gap", l.attr_gap),
            ("meta_content_max", l.meta_content_max),
            ("title_name_max", l.title_name_max),
            ("inline_title_max", l.inline_title_max),
        ];
        for (name, value) in bounds {
            if value == 0 {
                return Err(Error::InvalidOptions(format!("{name} must be greater than zero")));
            }
        }
        if self.placeholder_name.trim().is_empty() {
            return Err(Error::InvalidOptions("placeholder_name must not be empty".to_string()));
        }
        if self.content_block_marker.trim().is_empty() {
            return Err(Error::InvalidOptions("content_block_marker must not be empty".to_string()));
        }
        Ok(())
    }
}
