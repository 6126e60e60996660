//! Result types for extraction output.
//!
//! This module defines the profile record produced by a parse call. The
//! engine builds one record per call and never touches it again; the JSON
//! shape (camelCase keys) is what the persistence layer stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Connector tag stamped on every profile.
pub const CONNECTED_BY: &str = "CND²";

/// Event hashtag stamped on every profile.
pub const EVENT_HASHTAG: &str = "#CNDW2025";

/// Attendee profile extracted from a Prairie Card page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub basic: BasicInfo,
    pub details: Details,
    pub social: SocialLinks,
    pub custom: CustomContent,
    pub meta: ProfileMeta,
}

/// Identity and headline fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    /// Display name. Never empty: falls back to the configured placeholder.
    pub name: String,

    /// Job title or role.
    pub title: String,

    /// Company or organization.
    pub company: String,

    /// Free-form self introduction, at most 500 characters by default.
    pub bio: String,

    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Bounded, deduplicated lists plus the motto.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    pub tags: Vec<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub certifications: Vec<String>,
    pub communities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motto: Option<String>,
}

/// Social and personal links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qiita: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zenn: Option<String>,
}

/// Sponsor-defined content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomContent {
    /// Content blocks in document order.
    pub profile_content_blocks: Vec<ProfileContentBlock>,

    /// Structured fields parsed from the CNDW2025 block, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cndw2025: Option<Cndw2025Fields>,
}

/// One sponsor content unit (`<a data-object-type="profile_content">`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileContentBlock {
    pub title: String,

    /// Entity-decoded text; `<br>` and paragraph boundaries become `\n`.
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
}

/// Key/value fields parsed out of the CNDW2025 content block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cndw2025Fields {
    pub interest_area: Option<String>,
    #[serde(rename = "favoriteOSS")]
    pub favorite_oss: Option<String>,
    pub participation_count: Option<String>,
    pub focus_session: Option<String>,
    pub message: Option<String>,

    /// Full description text the fields were parsed from.
    pub raw: String,

    /// The block's `href`.
    pub event_url: Option<String>,
}

impl Cndw2025Fields {
    /// True when at least one of the five fields was recognised.
    #[must_use]
    pub fn has_any_field(&self) -> bool {
        self.interest_area.is_some()
            || self.favorite_oss.is_some()
            || self.participation_count.is_some()
            || self.focus_session.is_some()
            || self.message.is_some()
    }
}

/// Bookkeeping attached at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMeta {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub connected_by: String,
    pub hashtag: String,

    /// Always `false` here; reserved for a recovery mode that fills gaps
    /// from partial pages.
    pub is_partial_data: bool,
}

impl ProfileMeta {
    /// Metadata stamped at `now`.
    #[must_use]
    pub fn stamped(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            connected_by: CONNECTED_BY.to_string(),
            hashtag: EVENT_HASHTAG.to_string(),
            is_partial_data: false,
        }
    }
}

impl Profile {
    /// Serialize to JSON in the stored (camelCase) shape.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed variant of [`Profile::to_json`].
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a stored profile back.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
