//! Class- and attribute-keyed field extraction.
//!
//! Key behaviors:
//! - Identifiers match whole class tokens only (`skill` does not match
//!   `skill-tag`).
//! - Text is the element's leading text: everything before its first child
//!   element, trimmed. A match never reaches across an element boundary.
//! - Empty text counts as no match; the next candidate is tried.

use std::collections::HashSet;

use dom_query::Document;

use crate::dom;

/// Attribute naming a field explicitly, e.g. `<li data-field="skill">`.
pub const DATA_FIELD_ATTR: &str = "data-field";

/// One place a text value may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource<'s> {
    /// Element with this class token (falls back to a tag of the same name).
    Class(&'s str),
    /// Element with `data-field="..."`.
    DataField(&'s str),
}

/// Document-level tags never used for the tag-name fallback.
///
/// Without this, `<title>` would be read as the job title of every page.
const NON_CONTENT_TAGS: &[&str] = &["title", "head", "meta", "script", "style", "template"];

/// Extract a single text value associated with a class identifier.
///
/// Tries, in order:
/// 1. elements whose class list contains `identifier`
/// 2. elements whose tag name equals `identifier` (content tags only)
///
/// Returns the trimmed leading text of the first element that has any, or
/// an empty string.
#[must_use]
pub fn extract_text_by_class(doc: &Document, identifier: &str) -> String {
    first_leading_text(dom::elements_with_class(doc, identifier))
        .or_else(|| {
            let is_content_tag = !NON_CONTENT_TAGS
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(identifier));
            if is_content_tag {
                first_leading_text(dom::elements_by_tag(doc, identifier))
            } else {
                None
            }
        })
        .unwrap_or_default()
}

/// Extract the text of the first `data-field="field"` element.
#[must_use]
pub fn extract_text_by_data_field(doc: &Document, field: &str) -> String {
    first_leading_text(dom::elements_with_attr(doc, DATA_FIELD_ATTR, field)).unwrap_or_default()
}

/// Extract every value associated with an identifier across the document.
///
/// Collects, in this order, the leading text of:
/// 1. every element whose class list contains `identifier`
/// 2. every element with `data-field="identifier"`
///
/// Values are trimmed, empty ones dropped, duplicates removed keeping the
/// first occurrence.
#[must_use]
pub fn extract_array_by_class(doc: &Document, identifier: &str) -> Vec<String> {
    let by_class = dom::elements_with_class(doc, identifier);
    let by_field = dom::elements_with_attr(doc, DATA_FIELD_ATTR, identifier);

    let mut seen = HashSet::new();
    let mut values: Vec<String> = Vec::new();
    for el in by_class.iter().chain(by_field.iter()) {
        let text = dom::leading_text(el).trim().to_string();
        if !text.is_empty() && seen.insert(text.clone()) {
            values.push(text);
        }
    }
    values
}

/// Try each source in order; first non-empty value wins.
#[must_use]
pub fn first_text(doc: &Document, sources: &[TextSource<'_>]) -> Option<String> {
    sources
        .iter()
        .map(|source| match *source {
            TextSource::Class(identifier) => extract_text_by_class(doc, identifier),
            TextSource::DataField(field) => extract_text_by_data_field(doc, field),
        })
        .find(|value| !value.is_empty())
}

fn first_leading_text(elements: Vec<dom::Selection<'_>>) -> Option<String> {
    elements
        .iter()
        .map(|el| dom::leading_text(el).trim().to_string())
        .find(|text| !text.is_empty())
}
