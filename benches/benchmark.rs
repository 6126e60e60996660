//! Performance benchmarks for prairie-card-parser.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A typical profile card (~2KB)
//! - Cards padded to increasing sizes, to show linear scaling
//! - Adversarial `<meta>` attribute values that would stall an unbounded
//!   pattern

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prairie_card_parser::{parse_profile, validate_source_url};

const SAMPLE_CARD: &str = r#"
<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <title>山田太郎 - Prairie Card</title>
    <meta property="og:title" content="山田太郎のプロフィール">
    <meta name="description" content="クラウドネイティブが好きです。">
    <meta property="og:image" content="https://my.prairie.cards/images/yamada.png">
</head>
<body>
    <div class="card">
        <h1 class="profile-name">山田太郎</h1>
        <p class="job-title">Site Reliability Engineer</p>
        <p class="company">Example株式会社</p>
        <p class="bio">Kubernetes と Observability に取り組んでいます。</p>
        <ul>
            <li class="skill">Kubernetes</li>
            <li class="skill">Go</li>
            <li class="skill">Rust</li>
            <li class="interest">eBPF</li>
            <li class="community">CNDT</li>
        </ul>
        <div class="tags">#CNDW2025 #クラウドネイティブ #SRE</div>
        <a href="https://x.com/yamada">X</a>
        <a href="https://github.com/yamada">GitHub</a>
        <dl><dt>ブログ</dt><dd><a href="https://blog.yamada.dev">blog</a></dd></dl>
        <a data-object-type="profile_content" data-object-id="c1" href="https://event.cloudnativedays.jp/cndw2025">
            <div class="profile-content-title">【CNDW2025】</div>
            <div class="profile-content-description">
                🎯 興味分野: Platform Engineering<br>
                🌟 推しOSS: Argo CD<br>
                📊 参加回数: 3回目<br>
                🎤 注目セッション: Keynote<br>
                🔥 ひとこと: よろしくお願いします！
            </div>
        </a>
    </div>
</body>
</html>
"#;

fn bench_parse_card(c: &mut Criterion) {
    c.bench_function("parse_card", |b| {
        b.iter(|| parse_profile(black_box(SAMPLE_CARD)));
    });
}

fn bench_validate_url(c: &mut Criterion) {
    c.bench_function("validate_source_url", |b| {
        b.iter(|| validate_source_url(black_box("https://my.prairie.cards/u/yamada")));
    });
}

/// Same card, padded with unrelated markup
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for repeats in [10_usize, 100, 1000] {
        let padding = "<div class=\"filler\"><p>lorem ipsum dolor sit amet</p></div>".repeat(repeats);
        let html = SAMPLE_CARD.replace("</body>", &format!("{padding}</body>"));
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_card", html.len() / 1024), &html, |b, html| {
            b.iter(|| parse_profile(black_box(html.as_str())));
        });
    }

    group.finish();
}

/// Meta attribute values of 10k characters with quote characters mixed in
fn bench_adversarial_meta(c: &mut Criterion) {
    let mut group = c.benchmark_group("adversarial");

    let long_attr = format!(
        r#"<html><head><meta property="og:title" data-x="{}"></head><body></body></html>"#,
        "a'b ".repeat(2500)
    );
    let unterminated = format!(r#"<meta name="description" content="{}"#, "x\"y ".repeat(2500));

    for (name, html) in [("long_attribute", long_attr), ("unterminated_content", unterminated)] {
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", name), &html, |b, html| {
            b.iter(|| parse_profile(black_box(html.as_str())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_card,
    bench_validate_url,
    bench_scaling,
    bench_adversarial_meta
);
criterion_main!(benches);
