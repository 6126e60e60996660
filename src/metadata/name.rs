//! Name resolution.
//!
//! Prairie Card markup has changed shape several times, so the name is
//! looked up through an ordered list of sources. The first source yielding
//! a non-empty value wins; later sources are never consulted.

use dom_query::Document;

use crate::dom;
use crate::extractor::fields::{extract_text_by_class, extract_text_by_data_field};
use crate::options::Limits;
use crate::patterns::{self, TITLE_SUFFIX, TRAILING_SEPARATORS};

use super::meta_tags::extract_meta_content;

/// Where a resolved name came from, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    ProfileNameClass,
    NameClass,
    NameDataField,
    UserNameClass,
    DisplayNameClass,
    FirstH1,
    NamedH2,
    TitlePattern,
    TitleSuffix,
}

/// Meta tags whose value may carry "<name> のプロフィール" style titles.
const TITLE_META_PROPERTIES: &[&str] = &["og:title", "twitter:title"];

/// Resolve the attendee name, or an empty string if every source fails.
#[must_use]
pub fn resolve_name(doc: &Document, html: &str, limits: &Limits) -> String {
    resolve_name_with_source(doc, html, limits)
        .map(|(name, _)| name)
        .unwrap_or_default()
}

/// Resolve the attendee name together with the source that produced it.
#[must_use]
pub fn resolve_name_with_source(doc: &Document, html: &str, limits: &Limits) -> Option<(String, NameSource)> {
    let candidates: [(NameSource, fn(&Document) -> String); 7] = [
        (NameSource::ProfileNameClass, |d| extract_text_by_class(d, "profile-name")),
        (NameSource::NameClass, |d| extract_text_by_class(d, "name")),
        (NameSource::NameDataField, |d| extract_text_by_data_field(d, "name")),
        (NameSource::UserNameClass, |d| extract_text_by_class(d, "user-name")),
        (NameSource::DisplayNameClass, |d| extract_text_by_class(d, "display-name")),
        (NameSource::FirstH1, first_heading_text),
        (NameSource::NamedH2, named_h2_text),
    ];

    for (source, candidate) in candidates {
        let value = candidate(doc);
        if !value.is_empty() {
            return Some((value, source));
        }
    }

    name_from_titles(doc, html, limits)
}

/// Text of the first non-empty `<h1>`.
fn first_heading_text(doc: &Document) -> String {
    dom::elements_by_tag(doc, "h1")
        .iter()
        .map(dom::normalized_text)
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

/// Text of the first `<h2>` whose class attribute mentions "name".
fn named_h2_text(doc: &Document) -> String {
    dom::elements_by_tag(doc, "h2")
        .iter()
        .filter(|h2| {
            h2.attr("class")
                .is_some_and(|class| class.to_ascii_lowercase().contains("name"))
        })
        .map(dom::normalized_text)
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

/// Name derived from page titles.
///
/// a. `og:title`, `twitter:title`, then `<title>` are matched against the
///    "<name> のプロフィール" / "<name> Profile" / "<name> Prairie Card"
///    pattern, with the name bounded by `limits.title_name_max`;
/// b. `<title>` with a trailing "- Prairie Card" / "| Prairie Card" removed,
///    used as is when there is no such suffix.
fn name_from_titles(doc: &Document, html: &str, limits: &Limits) -> Option<(String, NameSource)> {
    let page_title = dom::elements_by_tag(doc, "title")
        .first()
        .map(dom::normalized_text)
        .filter(|t| !t.is_empty());

    let mut titles: Vec<String> = TITLE_META_PROPERTIES
        .iter()
        .filter_map(|property| extract_meta_content(html, property, limits))
        .collect();
    titles.extend(page_title.clone());

    if let Some(re) = patterns::get_or_compile(&patterns::title_name_pattern(limits.title_name_max)) {
        for title in &titles {
            let name = re
                .captures(title)
                .and_then(|caps| caps.get(1))
                .map(|m| clean_title_name(m.as_str()));
            if let Some(name) = name.filter(|n| !n.is_empty()) {
                return Some((name, NameSource::TitlePattern));
            }
        }
    }

    let title = page_title?;
    let name = clean_title_name(&TITLE_SUFFIX.replace(&title, ""));
    (!name.is_empty()).then_some((name, NameSource::TitleSuffix))
}

fn clean_title_name(raw: &str) -> String {
    TRAILING_SEPARATORS.replace(raw.trim(), "").trim().to_string()
}
