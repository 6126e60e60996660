//! CNDW2025 sponsor block parsing.
//!
//! The sponsor block description is a small line-oriented format:
//!
//! ```text
//! 🎯 興味分野: Platform Engineering
//! 🌟 推しOSS: Argo CD
//! 📊 参加回数: 3回目
//! 🎤 注目セッション: Keynote
//! 🔥 ひとこと: よろしくお願いします！
//! ```
//!
//! Each emoji-anchored value runs until the next known emoji or the end of
//! the line. Older cards omit the emoji; those are read with label patterns
//! anchored at the start of a line, but only when no emoji field matched at
//! all.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::patterns;
use crate::result::{Cndw2025Fields, ProfileContentBlock};

/// Block title marking the sponsor block: `【CNDW2025】`, `[CNDW2025]` or bare.
static SPONSOR_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)【\s*CNDW2025\s*】|\[\s*CNDW2025\s*\]|\bCNDW2025\b").expect("SPONSOR_TITLE regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    InterestArea,
    FavoriteOss,
    ParticipationCount,
    FocusSession,
    Message,
}

/// Emoji and accepted labels per field.
const FIELDS: [(Field, char, &[&str]); 5] = [
    (Field::InterestArea, '🎯', &["興味分野", "Interest Area"]),
    (Field::FavoriteOss, '🌟', &["推しOSS", "Favorite OSS"]),
    (Field::ParticipationCount, '📊', &["参加回数", "Participation Count"]),
    (Field::FocusSession, '🎤', &["注目セッション", "Focus Session"]),
    (Field::Message, '🔥', &["ひとこと", "メッセージ", "Message"]),
];

fn label_alternation(labels: &[&str]) -> String {
    labels
        .iter()
        .map(|label| patterns::escape(label))
        .collect::<Vec<_>>()
        .join("|")
}

/// `<emoji> <label>[:] <value>`; the value stops at any field emoji or newline.
static EMOJI_PATTERNS: LazyLock<Vec<(Field, Regex)>> = LazyLock::new(|| {
    let stops: String = FIELDS.iter().map(|(_, emoji, _)| *emoji).collect();
    FIELDS
        .iter()
        .map(|(field, emoji, labels)| {
            let pattern = format!(
                r"(?i){emoji}\x{{FE0F}}?[^\S\n]*(?:{labels})[^\S\n]*[:：]?[^\S\n]*([^\n{stops}]+)",
                labels = label_alternation(labels),
            );
            (*field, Regex::new(&pattern).expect("CNDW emoji field regex"))
        })
        .collect()
});

/// `<label>: <value>` at the start of a line.
static PLAIN_PATTERNS: LazyLock<Vec<(Field, Regex)>> = LazyLock::new(|| {
    FIELDS
        .iter()
        .map(|(field, _, labels)| {
            let pattern = format!(
                r"(?im)^[ \t]*(?:{labels})[ \t]*[:：][ \t]*([^\n]+)",
                labels = label_alternation(labels),
            );
            (*field, Regex::new(&pattern).expect("CNDW plain field regex"))
        })
        .collect()
});

/// True if a block title names the CNDW2025 sponsor block.
#[must_use]
pub fn is_sponsor_title(title: &str) -> bool {
    SPONSOR_TITLE.is_match(title)
}

/// Parse the structured fields of the first CNDW2025 block.
///
/// Only the first block whose title carries the marker is considered.
/// Returns `None` when there is no such block or none of the five fields
/// could be read from its description.
#[must_use]
pub fn parse_cndw2025(blocks: &[ProfileContentBlock]) -> Option<Cndw2025Fields> {
    let block = blocks.iter().find(|b| is_sponsor_title(&b.title))?;

    let mut fields = Cndw2025Fields {
        raw: block.description.clone(),
        event_url: block.href.clone(),
        ..Cndw2025Fields::default()
    };

    apply_patterns(&mut fields, &block.description, &EMOJI_PATTERNS);
    if !fields.has_any_field() {
        apply_patterns(&mut fields, &block.description, &PLAIN_PATTERNS);
    }

    fields.has_any_field().then_some(fields)
}

fn apply_patterns(fields: &mut Cndw2025Fields, text: &str, patterns: &[(Field, Regex)]) {
    for (field, re) in patterns {
        let value = re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|v| !v.is_empty());
        if value.is_none() {
            continue;
        }
        let slot = match field {
            Field::InterestArea => &mut fields.interest_area,
            Field::FavoriteOss => &mut fields.favorite_oss,
            Field::ParticipationCount => &mut fields.participation_count,
            Field::FocusSession => &mut fields.focus_session,
            Field::Message => &mut fields.message,
        };
        *slot = value;
    }
}
