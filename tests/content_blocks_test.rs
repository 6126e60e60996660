use prairie_card_parser::{parse_profile, parse_profile_with_options, Cndw2025Fields, Options};
use pretty_assertions::assert_eq;

const EVENT_URL: &str = "https://event.cloudnativedays.jp/cndw2025";

fn card(title: &str, description_html: &str) -> String {
    format!(
        r#"<html><body>
            <h1 class="profile-name">Alice</h1>
            <a data-object-type="profile_content" data-object-id="obj-1" href="{EVENT_URL}">
                <div class="profile-content-title">{title}</div>
                <div class="profile-content-description">{description_html}</div>
            </a>
        </body></html>"#
    )
}

#[test]
fn emoji_block_populates_all_fields() {
    let html = card(
        "【CNDW2025】",
        "🎯 興味分野: Platform Engineering<br>🌟 推しOSS: Argo CD<br>📊 参加回数: 2回目<br>🎤 注目セッション: Keynote<br>🔥 ひとこと: Hello!",
    );
    let profile = parse_profile(html.as_str());

    assert_eq!(profile.custom.profile_content_blocks.len(), 1);
    let block = &profile.custom.profile_content_blocks[0];
    assert_eq!(block.title, "【CNDW2025】");
    assert_eq!(block.href.as_deref(), Some(EVENT_URL));
    assert_eq!(block.object_id.as_deref(), Some("obj-1"));

    assert_eq!(
        profile.custom.cndw2025,
        Some(Cndw2025Fields {
            interest_area: Some("Platform Engineering".to_string()),
            favorite_oss: Some("Argo CD".to_string()),
            participation_count: Some("2回目".to_string()),
            focus_session: Some("Keynote".to_string()),
            message: Some("Hello!".to_string()),
            raw: block.description.clone(),
            event_url: Some(EVENT_URL.to_string()),
        })
    );
}

#[test]
fn plain_label_block_populates_fields() {
    let html = card(
        "[CNDW2025]",
        "<p>Interest Area: Security</p><p>Favorite OSS: Falco</p><p>Participation Count: 1</p>",
    );
    let fields = parse_profile(html.as_str()).custom.cndw2025.expect("cndw2025 fields");
    assert_eq!(fields.interest_area.as_deref(), Some("Security"));
    assert_eq!(fields.favorite_oss.as_deref(), Some("Falco"));
    assert_eq!(fields.participation_count.as_deref(), Some("1"));
    assert_eq!(fields.focus_session, None);
}

#[test]
fn sponsor_block_without_fields_yields_none() {
    let html = card("CNDW2025", "Thanks for visiting our booth!");
    let profile = parse_profile(html.as_str());
    assert_eq!(profile.custom.profile_content_blocks.len(), 1);
    assert_eq!(profile.custom.cndw2025, None);
}

#[test]
fn non_sponsor_blocks_are_kept_but_not_parsed() {
    let html = card("Booth Info", "🎯 興味分野: Something");
    let profile = parse_profile(html.as_str());
    assert_eq!(profile.custom.profile_content_blocks[0].title, "Booth Info");
    assert_eq!(profile.custom.cndw2025, None);
}

#[test]
fn description_entities_decoded_and_breaks_kept() {
    let html = card("Notes", "Tom &amp; Jerry<br/>second&nbsp;line");
    let block = &parse_profile(html.as_str()).custom.profile_content_blocks[0];
    assert_eq!(block.description, "Tom & Jerry\nsecond line");
}

#[test]
fn blocks_without_dedicated_classes() {
    let html = r#"
        <a data-object-type="profile_content" href="https://example.com/a">
            <h4>Sponsor A</h4>
            <p>We build observability tooling.</p>
        </a>
        <a data-object-type="profile_content">
            <strong>Sponsor B</strong>
        </a>"#;
    let blocks = parse_profile(html).custom.profile_content_blocks;
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].title, "Sponsor A");
    assert_eq!(blocks[0].description, "We build observability tooling.");
    assert_eq!(blocks[1].title, "Sponsor B");
    assert_eq!(blocks[1].href, None);
}

#[test]
fn custom_marker_option() {
    let html = r#"<a data-object-type="sponsor_card"><b>Custom</b></a>"#;
    let default_blocks = parse_profile(html).custom.profile_content_blocks;
    assert!(default_blocks.is_empty());

    let options = Options {
        content_block_marker: "sponsor_card".to_string(),
        ..Options::default()
    };
    let blocks = parse_profile_with_options(html, &options).custom.profile_content_blocks;
    assert_eq!(blocks.len(), 1);
}
