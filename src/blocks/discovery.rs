//! Content block discovery.
//!
//! A block is an anchor carrying `data-object-type="<marker>"`. Its title
//! and description are recovered through ordered strategies since sponsors
//! author the inner markup freely:
//!
//! - title: `.profile-content-title`, then the first heading / `strong` /
//!   `b`, then the first short text run
//! - description: `.profile-content-description`, then the first `p` or
//!   `div` with real text, then the whole block flattened

use dom_query::{Document, Selection};

use crate::dom;
use crate::html_processing::html_to_text_with_breaks;
use crate::options::Limits;
use crate::result::ProfileContentBlock;

/// Attribute whose value marks a content block anchor.
pub const CONTENT_BLOCK_ATTR: &str = "data-object-type";

const TITLE_CLASS: &str = "profile-content-title";
const DESCRIPTION_CLASS: &str = "profile-content-description";

/// Elements whose text is taken as a block title, in priority of appearance.
const TITLE_ELEMENTS: &str = "h1, h2, h3, h4, h5, h6, strong, b";

/// Elements scanned for a description paragraph.
const DESCRIPTION_ELEMENTS: &str = "p, div";

/// A description paragraph must be longer than this (in characters).
const MIN_PARAGRAPH_CHARS: usize = 10;

/// Find every content block in document order.
///
/// Blocks with neither a title nor a description are dropped.
#[must_use]
pub fn discover_blocks(doc: &Document, marker: &str, limits: &Limits) -> Vec<ProfileContentBlock> {
    dom::elements_with_attr(doc, CONTENT_BLOCK_ATTR, marker)
        .iter()
        .filter(|el| dom::tag_name(el).as_deref() == Some("a"))
        .map(|anchor| parse_block(anchor, limits))
        .filter(|block| !block.title.is_empty() || !block.description.is_empty())
        .collect()
}

fn parse_block(anchor: &Selection, limits: &Limits) -> ProfileContentBlock {
    let title = block_title(anchor, limits);
    let description = block_description(anchor, &title);

    ProfileContentBlock {
        title,
        description,
        href: dom::non_empty_attribute(anchor, "href"),
        object_id: dom::non_empty_attribute(anchor, "data-object-id"),
    }
}

fn block_title(anchor: &Selection, limits: &Limits) -> String {
    if let Some(title) = dom::descendants_with_class(anchor, TITLE_CLASS)
        .iter()
        .map(dom::normalized_text)
        .find(|t| !t.is_empty())
    {
        return title;
    }

    if let Some(title) = anchor
        .select(TITLE_ELEMENTS)
        .nodes()
        .iter()
        .map(|node| dom::normalized_text(&Selection::from(*node)))
        .find(|t| !t.is_empty())
    {
        return title;
    }

    dom::text_runs(anchor)
        .into_iter()
        .find(|run| run.chars().count() <= limits.inline_title_max)
        .unwrap_or_default()
}

fn block_description(anchor: &Selection, title: &str) -> String {
    if let Some(description) = dom::descendants_with_class(anchor, DESCRIPTION_CLASS)
        .iter()
        .map(|el| html_to_text_with_breaks(&dom::inner_html(el)))
        .find(|t| !t.is_empty())
    {
        return description;
    }

    if let Some(paragraph) = anchor
        .select(DESCRIPTION_ELEMENTS)
        .nodes()
        .iter()
        .map(|node| without_title(&html_to_text_with_breaks(&Selection::from(*node).inner_html()), title))
        .find(|t| t.chars().count() > MIN_PARAGRAPH_CHARS)
    {
        return paragraph;
    }

    without_title(&html_to_text_with_breaks(&dom::inner_html(anchor)), title)
}

/// Remove the first occurrence of `title` and tidy the remaining lines.
fn without_title(text: &str, title: &str) -> String {
    let stripped = if title.is_empty() {
        text.to_string()
    } else {
        text.replacen(title, "", 1)
    };
    stripped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blocks(html: &str) -> Vec<ProfileContentBlock> {
        let doc = dom::parse(html);
        discover_blocks(&doc, "profile_content", &Limits::default())
    }

    #[test]
    fn test_dedicated_classes() {
        let html = r#"
            <a data-object-type="profile_content" data-object-id="b1" href="https://example.com/e">
              <div class="profile-content-title">【CNDW2025】</div>
              <div class="profile-content-description">line one<br>line &amp; two</div>
            </a>"#;
        assert_eq!(
            blocks(html),
            vec![ProfileContentBlock {
                title: "【CNDW2025】".to_string(),
                description: "line one\nline & two".to_string(),
                href: Some("https://example.com/e".to_string()),
                object_id: Some("b1".to_string()),
            }]
        );
    }

    #[test]
    fn test_heading_title_and_paragraph_description() {
        let html = r#"
            <a data-object-type="profile_content">
              <h3>Sponsor Talk</h3>
              <p>short</p>
              <p>A paragraph that is long enough</p>
            </a>"#;
        let found = blocks(html);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Sponsor Talk");
        assert_eq!(found[0].description, "A paragraph that is long enough");
        assert_eq!(found[0].href, None);
    }

    #[test]
    fn test_title_removed_from_paragraph() {
        let html = r#"
            <a data-object-type="profile_content">
              <div><strong>Booth</strong><br>Visit us at booth 12 today</div>
            </a>"#;
        let found = blocks(html);
        assert_eq!(found[0].title, "Booth");
        assert_eq!(found[0].description, "Visit us at booth 12 today");
    }

    #[test]
    fn test_inline_text_title_and_flattened_description() {
        let html = r#"<a data-object-type="profile_content">Plain title<span>more</span></a>"#;
        let found = blocks(html);
        assert_eq!(found[0].title, "Plain title");
        assert_eq!(found[0].description, "more");
    }

    #[test]
    fn test_overlong_inline_run_is_not_a_title() {
        let long = "x".repeat(150);
        let html = format!(r#"<a data-object-type="profile_content">{long}<i>Short</i></a>"#);
        assert_eq!(blocks(&html)[0].title, "Short");
    }

    #[test]
    fn test_empty_blocks_dropped_and_order_kept() {
        let html = r#"
            <a data-object-type="profile_content"></a>
            <a data-object-type="profile_content"><b>First</b></a>
            <a data-object-type="other"><b>Ignored</b></a>
            <div data-object-type="profile_content"><b>Not an anchor</b></div>
            <a data-object-type="profile_content"><b>Second</b></a>"#;
        let titles: Vec<String> = blocks(html).into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_custom_marker() {
        let html = r#"<a data-object-type="sponsor"><b>Custom</b></a>"#;
        let doc = dom::parse(html);
        let found = discover_blocks(&doc, "sponsor", &Limits::default());
        assert_eq!(found.len(), 1);
    }
}
