//! Hashtag extraction.
//!
//! The hashtag pattern is only ever applied to the text of whitelisted
//! containers (`hashtag`, `tag`, `keyword` classes and their plurals).
//! Scanning the whole page would pick up `#` from fragment links, colour
//! codes and prose.

use dom_query::Document;

use crate::dom;
use crate::patterns::{HASHTAG, HASHTAG_CONTAINERS};

/// Collect up to `max` distinct hashtags (with their leading `#`) from the
/// whitelisted containers, in document order.
#[must_use]
pub fn extract_hashtags(doc: &Document, max: usize) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    if max == 0 {
        return tags;
    }

    for container in dom::elements_with_any_class(doc, HASHTAG_CONTAINERS) {
        let text = dom::text_content(&container);
        for found in HASHTAG.find_iter(&text) {
            let tag = found.as_str().to_string();
            if !tags.contains(&tag) {
                tags.push(tag);
                if tags.len() >= max {
                    return tags;
                }
            }
        }
    }
    tags
}
