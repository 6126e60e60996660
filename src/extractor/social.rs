//! Social and personal link extraction.
//!
//! Platform links are recognised by a domain-anchored URL pattern on each
//! anchor `href`. Personal links (website, blog) have no recognisable
//! domain, so they are found by identifier (class / `data-field`) or by an
//! identifying label sitting next to the anchor.

use std::sync::LazyLock;

use dom_query::Document;
use regex::Regex;

use crate::dom;
use crate::options::Limits;
use crate::patterns::{
    self, FACEBOOK_URL, GITHUB_URL, HTTP_URL, LINKEDIN_URL, QIITA_URL, TWITTER_URL, ZENN_URL,
};
use crate::result::SocialLinks;

use super::fields::DATA_FIELD_ATTR;

/// Labels identifying a personal website link.
pub const WEBSITE_LABELS: &[&str] = &["website", "homepage", "web site", "ウェブサイト", "ホームページ", "Webサイト"];

/// Labels identifying a blog link.
pub const BLOG_LABELS: &[&str] = &["blog", "ブログ"];

/// Which platform a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Platform {
    Twitter,
    Github,
    Linkedin,
    Facebook,
    Qiita,
    Zenn,
}

static PLATFORMS: [(Platform, &LazyLock<Regex>); 6] = [
    (Platform::Twitter, &TWITTER_URL),
    (Platform::Github, &GITHUB_URL),
    (Platform::Linkedin, &LINKEDIN_URL),
    (Platform::Facebook, &FACEBOOK_URL),
    (Platform::Qiita, &QIITA_URL),
    (Platform::Zenn, &ZENN_URL),
];

/// Extract every social and personal link.
///
/// The first matching anchor in document order wins for each platform.
#[must_use]
pub fn extract_social_links(doc: &Document, html: &str, limits: &Limits) -> SocialLinks {
    let mut links = SocialLinks::default();

    for node in doc.select("a[href]").nodes() {
        let anchor = dom::Selection::from(*node);
        let Some(href) = dom::non_empty_attribute(&anchor, "href") else {
            continue;
        };

        for (platform, pattern) in &PLATFORMS {
            if !pattern.is_match(&href) {
                continue;
            }
            let slot = match platform {
                Platform::Twitter => &mut links.twitter,
                Platform::Github => &mut links.github,
                Platform::Linkedin => &mut links.linkedin,
                Platform::Facebook => &mut links.facebook,
                Platform::Qiita => &mut links.qiita,
                Platform::Zenn => &mut links.zenn,
            };
            if slot.is_none() {
                *slot = Some(href.clone());
            }
            break;
        }
    }

    links.website = find_labelled_link(doc, html, "website", WEBSITE_LABELS, limits);
    links.blog = find_labelled_link(doc, html, "blog", BLOG_LABELS, limits);
    links
}

/// Find a personal link by identifier, then by an adjacent label.
///
/// Strategies, first hit wins:
/// 1. an element with class `identifier` or `data-field="identifier"` that is,
///    or contains, an anchor with an absolute http(s) `href`
/// 2. an anchor directly preceded by one of `labels`
/// 3. an anchor whose text (or the text right after it) is one of `labels`
#[must_use]
pub fn find_labelled_link(
    doc: &Document,
    html: &str,
    identifier: &str,
    labels: &[&str],
    limits: &Limits,
) -> Option<String> {
    let mut candidates = dom::elements_with_class(doc, identifier);
    candidates.extend(dom::elements_with_attr(doc, DATA_FIELD_ATTR, identifier));

    for el in &candidates {
        if let Some(href) = anchor_href(el) {
            return Some(href);
        }
    }

    if labels.is_empty() {
        return None;
    }

    let gap = limits.attr_gap;
    let alternation = labels
        .iter()
        .map(|label| patterns::escape(label))
        .collect::<Vec<_>>()
        .join("|");
    let href = r#"href\s*=\s*["'](https?://[^"'\s<>]{1,500})["']"#;

    // Label, at most a few wrapper tags, then the anchor.
    let label_before = format!(
        r"(?i)(?:{alternation})[^<]{{0,50}}(?:</?[a-z][^>]{{0,{gap}}}>\s*){{0,4}}<a\s[^>]{{0,{gap}}}?{href}"
    );
    // Anchor whose text, or the text right after it, carries the label.
    let label_after = format!(
        r"(?i)<a\s[^>]{{0,{gap}}}?{href}[^>]{{0,{gap}}}>[^<]{{0,100}}?(?:</a>\s*[(\[（]?\s*)?(?:{alternation})"
    );

    [label_before, label_after]
        .iter()
        .filter_map(|p| patterns::get_or_compile(p))
        .find_map(|re| {
            re.captures(html)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
}

/// The `href` of `el` itself if it is an anchor, else of its first anchor descendant.
fn anchor_href(el: &dom::Selection) -> Option<String> {
    if dom::tag_name(el).as_deref() == Some("a") {
        return dom::non_empty_attribute(el, "href").filter(|h| HTTP_URL.is_match(h));
    }
    el.select("a[href]")
        .nodes()
        .iter()
        .map(|node| dom::Selection::from(*node))
        .filter_map(|a| dom::non_empty_attribute(&a, "href"))
        .find(|h| HTTP_URL.is_match(h))
}
