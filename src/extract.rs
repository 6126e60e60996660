//! Profile assembly.
//!
//! Parses the page once, runs every field extractor against the tree (and
//! the meta/label extractors against the raw markup), then normalizes the
//! results into a [`Profile`]: placeholder name, merged tags, capped lists,
//! truncated bio, fixed metadata.

use chrono::Utc;
use tracing::debug;

use crate::blocks;
use crate::dom::{self, Document};
use crate::extractor::{
    extract_array_by_class, extract_hashtags, extract_social_links, finalize_list, first_text,
    TextSource,
};
use crate::html_processing::truncate_chars;
use crate::metadata::{self, first_meta_content};
use crate::options::{Limits, Options};
use crate::result::{BasicInfo, CustomContent, Details, Profile, ProfileMeta};

const TITLE_SOURCES: &[TextSource<'static>] = &[
    TextSource::Class("title"),
    TextSource::Class("job-title"),
    TextSource::Class("position"),
    TextSource::DataField("title"),
];

const COMPANY_SOURCES: &[TextSource<'static>] = &[
    TextSource::Class("company"),
    TextSource::Class("organization"),
    TextSource::Class("affiliation"),
    TextSource::DataField("company"),
];

const BIO_SOURCES: &[TextSource<'static>] = &[
    TextSource::Class("bio"),
    TextSource::Class("description"),
    TextSource::Class("about"),
    TextSource::DataField("bio"),
];

/// Meta tags consulted for the bio once the markup has none.
const BIO_META: &[&str] = &["description", "og:description"];

const MOTTO_SOURCES: &[TextSource<'static>] = &[TextSource::Class("motto"), TextSource::DataField("motto")];

/// Image classes marking the avatar.
const AVATAR_CLASSES: &[&str] = &["avatar", "profile-image"];

/// Build a profile from HTML. Never fails; missing data yields empty fields.
#[must_use]
pub fn assemble_profile(html: &str, options: &Options) -> Profile {
    if options.debug {
        debug!(html_len = html.len(), "starting profile extraction");
    }

    let doc = dom::parse(html);
    let limits = &options.limits;

    let basic = extract_basic(&doc, html, options);
    let details = extract_details(&doc, limits);
    let social = extract_social_links(&doc, html, limits);

    let profile_content_blocks = blocks::discover_blocks(&doc, &options.content_block_marker, limits);
    let cndw2025 = blocks::parse_cndw2025(&profile_content_blocks);

    if options.debug {
        debug!(
            name = %basic.name,
            tags = details.tags.len(),
            skills = details.skills.len(),
            interests = details.interests.len(),
            blocks = profile_content_blocks.len(),
            cndw2025 = cndw2025.is_some(),
            "profile extraction finished"
        );
    }

    Profile {
        basic,
        details,
        social,
        custom: CustomContent {
            profile_content_blocks,
            cndw2025,
        },
        meta: ProfileMeta::stamped(Utc::now()),
    }
}

fn extract_basic(doc: &Document, html: &str, options: &Options) -> BasicInfo {
    let limits = &options.limits;

    let name = match metadata::resolve_name_with_source(doc, html, limits) {
        Some((name, source)) => {
            if options.debug {
                debug!(?source, "name resolved");
            }
            name
        }
        None => {
            if options.debug {
                debug!(placeholder = %options.placeholder_name, "no name found");
            }
            options.placeholder_name.clone()
        }
    };

    let bio = first_text(doc, BIO_SOURCES)
        .or_else(|| first_meta_content(html, BIO_META, limits))
        .map(|bio| truncate_chars(&bio, limits.max_bio_chars))
        .unwrap_or_default();

    BasicInfo {
        name,
        title: first_text(doc, TITLE_SOURCES).unwrap_or_default(),
        company: first_text(doc, COMPANY_SOURCES).unwrap_or_default(),
        bio,
        avatar: extract_avatar(doc, html, limits),
    }
}

fn extract_details(doc: &Document, limits: &Limits) -> Details {
    let mut tags = extract_array_by_class(doc, "tag");
    tags.extend(extract_hashtags(doc, limits.max_hashtags));

    Details {
        tags: finalize_list(tags, limits.max_tags),
        skills: finalize_list(extract_array_by_class(doc, "skill"), limits.max_skills),
        interests: finalize_list(extract_array_by_class(doc, "interest"), limits.max_interests),
        certifications: finalize_list(
            extract_array_by_class(doc, "certification"),
            limits.max_certifications,
        ),
        communities: finalize_list(extract_array_by_class(doc, "community"), limits.max_communities),
        motto: first_text(doc, MOTTO_SOURCES),
    }
}

/// `src` of the first avatar image, else `og:image`.
fn extract_avatar(doc: &Document, html: &str, limits: &Limits) -> Option<String> {
    dom::elements_with_any_class(doc, AVATAR_CLASSES)
        .iter()
        .filter(|el| dom::tag_name(el).as_deref() == Some("img"))
        .find_map(|img| dom::non_empty_attribute(img, "src"))
        .or_else(|| first_meta_content(html, &["og:image"], limits))
}
