use encoding_rs::{EUC_JP, SHIFT_JIS};
use prairie_card_parser::{parse_profile_bytes, parse_profile_bytes_with_options, Options};

fn encoded_card(charset: &str, encode: impl Fn(&str) -> Vec<u8>) -> Vec<u8> {
    let mut bytes = format!(r#"<html><head><meta charset="{charset}"></head><body>"#).into_bytes();
    bytes.extend(encode(r#"<h1 class="profile-name">山田太郎</h1><span class="skill">クラウド</span>"#));
    bytes.extend_from_slice(b"</body></html>");
    bytes
}

#[test]
fn utf8_bytes_parse_like_strings() {
    let html = r#"<meta charset="utf-8"><h1 class="profile-name">中村 ü é</h1>"#;
    assert_eq!(parse_profile_bytes(html.as_bytes()).basic.name, "中村 ü é");
}

#[test]
fn shift_jis_page_is_transcoded() {
    let bytes = encoded_card("Shift_JIS", |s| SHIFT_JIS.encode(s).0.into_owned());
    let profile = parse_profile_bytes(&bytes);
    assert_eq!(profile.basic.name, "山田太郎");
    assert_eq!(profile.details.skills, vec!["クラウド"]);
}

#[test]
fn euc_jp_declared_via_http_equiv() {
    let mut bytes =
        br#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=EUC-JP"></head><body>"#
            .to_vec();
    bytes.extend(EUC_JP.encode(r#"<div class="name">鈴木</div>"#).0.into_owned());
    bytes.extend_from_slice(b"</body></html>");
    assert_eq!(parse_profile_bytes(&bytes).basic.name, "鈴木");
}

#[test]
fn undeclared_bytes_default_to_utf8() {
    let html = "<h1>José</h1>";
    assert_eq!(parse_profile_bytes(html.as_bytes()).basic.name, "José");
}

#[test]
fn invalid_bytes_are_replaced_not_fatal() {
    let html = b"<h1>Bad \xFF\xFE name</h1>";
    let name = parse_profile_bytes(html).basic.name;
    assert!(name.starts_with("Bad"));
    assert!(name.contains('\u{FFFD}'));
}

#[test]
fn bytes_with_options() {
    let bytes = encoded_card("Shift_JIS", |s| SHIFT_JIS.encode(s).0.into_owned());
    let options = Options {
        debug: true,
        ..Options::default()
    };
    assert_eq!(parse_profile_bytes_with_options(&bytes, &options).basic.name, "山田太郎");
}
