use std::sync::Arc;

use services::InMemorySource;

use crate::vm::InputEvent;

use super::test_harness::{setup_view_harness, setup_view_harness_with_source};

const THREE_SLIDES: &str = r#"{
    "slides": [
        {"title": "Welcome", "subtitle": "Kickoff", "speaker_line": "Say hello"},
        {"title": "Plan", "bullets": ["Build", "Test"], "timing": "4 min"},
        {"title": "Thanks", "note": "Questions?"}
    ]
}"#;

fn key(name: &str) -> InputEvent {
    InputEvent::Key(name.to_string())
}

/// Opening tag of the slide rendered with `data-idx="{idx}"`.
fn slide_tag(html: &str, idx: usize) -> &str {
    let marker = format!(r#"data-idx="{idx}""#);
    let at = html
        .find(&marker)
        .unwrap_or_else(|| panic!("no slide {idx} in {html}"));
    let start = html[..at].rfind('<').unwrap();
    let end = at + html[at..].find('>').unwrap() + 1;
    &html[start..end]
}

fn is_active(html: &str, idx: usize) -> bool {
    let tag = slide_tag(html, idx);
    assert!(tag.starts_with("<section "), "unexpected tag {tag}");
    if tag.contains(r#"class="slide active""#) {
        return true;
    }
    assert!(tag.contains(r#"class="slide""#), "unexpected tag {tag}");
    false
}

#[tokio::test(flavor = "current_thread")]
async fn deck_view_smoke_renders_first_slide() {
    let mut harness = setup_view_harness(THREE_SLIDES);
    harness.settle().await;

    let html = harness.render();
    assert!(is_active(&html, 0), "first slide not active in {html}");
    assert!(!is_active(&html, 1), "second slide active in {html}");
    assert!(!is_active(&html, 2), "third slide active in {html}");
    assert!(html.contains("<h1>Welcome</h1>"), "missing title in {html}");
    assert!(html.contains("<p>Build</p><p>Test</p>"), "missing bullets in {html}");
    assert!(html.contains("1 / 3"), "missing progress in {html}");
    assert!(html.contains("Say hello"), "missing speaker line in {html}");
    assert!(
        html.contains(r#"<div class="progressbar"><i style="width: 33%"></i></div>"#),
        "missing progress bar in {html}"
    );
    assert_eq!(harness.active_index(), Some(0));
}

#[tokio::test(flavor = "current_thread")]
async fn deck_view_smoke_arrow_keys_clamp_on_last_slide() {
    let mut harness = setup_view_harness(THREE_SLIDES);
    harness.settle().await;

    harness.send(key("ArrowRight"));
    harness.send(key("ArrowRight"));
    assert_eq!(harness.active_index(), Some(2));
    let html = harness.render();
    assert!(html.contains("3 / 3"), "missing progress in {html}");
    assert!(is_active(&html, 2), "last slide not active in {html}");
    assert!(!is_active(&html, 0), "first slide still active in {html}");

    harness.send(key("ArrowRight"));
    assert_eq!(harness.active_index(), Some(2));
    assert!(harness.render().contains("width: 100%"));
}

#[tokio::test(flavor = "current_thread")]
async fn deck_view_smoke_buttons_home_and_end() {
    let mut harness = setup_view_harness(THREE_SLIDES);
    harness.settle().await;

    harness.send(InputEvent::PrevClicked);
    assert_eq!(harness.active_index(), Some(0));
    harness.send(InputEvent::NextClicked);
    assert_eq!(harness.active_index(), Some(1));
    harness.send(key("End"));
    assert_eq!(harness.active_index(), Some(2));
    harness.send(key("Home"));
    assert_eq!(harness.active_index(), Some(0));
    harness.send(key("Escape"));
    assert_eq!(harness.active_index(), Some(0));
}

#[tokio::test(flavor = "current_thread")]
async fn deck_view_smoke_swipes() {
    let mut harness = setup_view_harness(THREE_SLIDES);
    harness.settle().await;

    harness.send(InputEvent::TouchStart(100.0));
    harness.send(InputEvent::TouchEnd(160.0));
    assert_eq!(harness.active_index(), Some(0));

    harness.send(InputEvent::TouchStart(160.0));
    harness.send(InputEvent::TouchEnd(100.0));
    assert_eq!(harness.active_index(), Some(1));

    harness.send(InputEvent::TouchStart(100.0));
    harness.send(InputEvent::TouchEnd(110.0));
    assert_eq!(harness.active_index(), Some(1));
}

#[tokio::test(flavor = "current_thread")]
async fn deck_view_smoke_speaker_panel_toggles() {
    let mut harness = setup_view_harness(THREE_SLIDES);
    harness.settle().await;

    assert!(harness.render().contains("display: block"));
    harness.send(InputEvent::SpeakerClicked);
    assert!(harness.render().contains("display: none"));
    harness.send(InputEvent::SpeakerClicked);
    assert!(harness.render().contains("display: block"));
}

#[tokio::test(flavor = "current_thread")]
async fn deck_view_smoke_speaker_text_follows_slide() {
    let mut harness = setup_view_harness(THREE_SLIDES);
    harness.settle().await;

    harness.send(InputEvent::NextClicked);
    let html = harness.render();
    assert!(!html.contains("Say hello"), "stale speaker line in {html}");
    assert!(html.contains("2 / 3"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn deck_view_smoke_escapes_slide_text() {
    let mut harness =
        setup_view_harness(r#"{"slides": [{"title": "<b>bold</b>", "bullets": ["a & b"]}]}"#);
    harness.settle().await;

    let html = harness.render();
    assert!(!html.contains("<b>bold</b>"), "title parsed as markup in {html}");
    assert!(html.contains("&lt;b&gt;bold"), "missing escaped title in {html}");
    assert!(html.contains("a &amp; b"), "missing escaped bullet in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn deck_view_smoke_renders_invalid_content_error() {
    let mut harness = setup_view_harness("{}");
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains(r#"<h1>Error</h1><p class="small">content.json not found or invalid.</p>"#),
        "missing invalid content message in {html}"
    );
    assert!(!html.contains("progressbar"), "unexpected progress bar in {html}");
    assert_eq!(harness.active_index(), None);

    harness.send(InputEvent::NextClicked);
    harness.send(key("End"));
    assert_eq!(harness.active_index(), None);
    assert!(harness.render().contains("content.json not found or invalid."));
}

#[tokio::test(flavor = "current_thread")]
async fn deck_view_smoke_renders_load_error() {
    let source = Arc::new(InMemorySource::failing("offline"));
    let mut harness = setup_view_harness_with_source(source);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains(r#"<h1>Error loading deck</h1><p class="small">Check that content.json is present.</p>"#),
        "missing load error in {html}"
    );
    assert_eq!(harness.active_index(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn deck_view_smoke_renders_bad_json_as_load_error() {
    let mut harness = setup_view_harness("{ this is not json");
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Error loading deck"), "missing load error in {html}");
}
