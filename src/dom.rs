//! DOM query helpers
//!
//! Thin layer over `dom_query` exposing the handful of queries the
//! extractors need: by class token, by attribute value, by tag name, and
//! "text up to the first child element".
//!
//! None of these build CSS selectors from caller input. Identifiers are
//! compared against attributes directly, so an odd identifier can never
//! produce an invalid selector (which `dom_query` would reject by panicking).

pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

/// Every element in the document, in document order.
const ANY_ELEMENT: &str = "*";

/// Parse HTML string into document
///
/// html5ever never fails: unclosed and misnested markup is repaired.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get a trimmed, non-empty attribute value
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// True if the element's class list contains `token` as a whole token.
///
/// `"skill-tag"` does not contain the token `"skill"`.
#[must_use]
pub fn has_class_token(sel: &Selection, token: &str) -> bool {
    sel.attr("class")
        .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == token))
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Querying ===

/// Elements whose class list contains `token`, in document order.
#[must_use]
pub fn elements_with_class<'a>(doc: &'a Document, token: &str) -> Vec<Selection<'a>> {
    doc.select("[class]")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|el| has_class_token(el, token))
        .collect()
}

/// Elements carrying at least one of `tokens`, each reported once, in document order.
#[must_use]
pub fn elements_with_any_class<'a>(doc: &'a Document, tokens: &[&str]) -> Vec<Selection<'a>> {
    doc.select("[class]")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|el| tokens.iter().any(|token| has_class_token(el, token)))
        .collect()
}

/// Elements whose attribute `name` equals `value` (trimmed), in document order.
#[must_use]
pub fn elements_with_attr<'a>(doc: &'a Document, name: &str, value: &str) -> Vec<Selection<'a>> {
    doc.select(ANY_ELEMENT)
        .nodes()
        .iter()
        .filter(|node| node.attr(name).is_some_and(|v| v.trim() == value))
        .map(|node| Selection::from(*node))
        .collect()
}

/// Elements with the given tag name (ASCII case-insensitive), in document order.
#[must_use]
pub fn elements_by_tag<'a>(doc: &'a Document, tag: &str) -> Vec<Selection<'a>> {
    doc.select(ANY_ELEMENT)
        .nodes()
        .iter()
        .filter(|node| node.node_name().is_some_and(|n| n.eq_ignore_ascii_case(tag)))
        .map(|node| Selection::from(*node))
        .collect()
}

/// Descendants of `sel` whose class list contains `token`, in document order.
#[must_use]
pub fn descendants_with_class<'a>(sel: &Selection<'a>, token: &str) -> Vec<Selection<'a>> {
    sel.select("[class]")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|el| has_class_token(el, token))
        .collect()
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Text that precedes the element's first child element.
///
/// Mirrors "everything up to the next `<`": text nodes are concatenated
/// until an element child is reached; comments are skipped. The result is
/// entity-decoded (the parser already did that) but not trimmed.
#[must_use]
pub fn leading_text(sel: &Selection) -> String {
    let Some(node) = sel.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();
    for child in node.children() {
        if child.is_element() {
            break;
        }
        if child.is_text() {
            out.push_str(&child.text());
        }
    }
    out
}

/// Non-empty, whitespace-normalized text nodes below `sel`, in document order.
///
/// Script and style bodies are skipped.
#[must_use]
pub fn text_runs(sel: &Selection) -> Vec<String> {
    let Some(root) = sel.nodes().first() else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    for node in root.descendants() {
        if !node.is_text() {
            continue;
        }
        let in_code = node.parent().and_then(|p| p.node_name()).is_some_and(|tag| {
            tag.eq_ignore_ascii_case("script") || tag.eq_ignore_ascii_case("style")
        });
        if in_code {
            continue;
        }
        let text = crate::patterns::normalize_whitespace(&node.text());
        if !text.is_empty() {
            runs.push(text);
        }
    }
    runs
}

/// Whitespace-normalized text of the element and its descendants.
#[must_use]
pub fn normalized_text(sel: &Selection) -> String {
    crate::patterns::normalize_whitespace(&sel.text())
}
