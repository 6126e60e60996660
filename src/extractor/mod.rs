//! Field-level extractors.
//!
//! # Module Structure
//!
//! - `fields`: single values and lists located by class token or `data-field`
//! - `tags`: hashtags from whitelisted containers
//! - `social`: platform profile URLs and labelled personal links
//!
//! Every extractor returns an empty value (`""`, empty `Vec`, `None`) when
//! nothing matches; none of them can fail.

pub mod fields;
pub mod social;
pub mod tags;

use std::collections::HashSet;

pub use fields::{extract_array_by_class, extract_text_by_class, first_text, TextSource};
pub use social::{extract_social_links, find_labelled_link};
pub use tags::extract_hashtags;

/// Trim, drop empty entries, deduplicate (first occurrence wins), then cap.
///
/// Deduplication is case-sensitive value equality and always happens before
/// truncation, so duplicates never use up slots.
#[must_use]
pub fn finalize_list<I, S>(values: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .map(|v| v.as_ref().trim().to_string())
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(v.clone()))
        .take(cap)
        .collect()
}
