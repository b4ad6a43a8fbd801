#![cfg(not(target_arch = "wasm32"))]

const INDEX_HTML: &str = include_str!("../index.html");
const STYLE_CSS: &str = include_str!("../style.css");
const PAGE_TOML: &str = include_str!("../page.toml");

#[test]
fn index_loads_confetti_renderer_synchronously() {
    let start = INDEX_HTML
        .find("<script src=\"https://cdn.jsdelivr.net/npm/canvas-confetti")
        .expect("index.html must load canvas-confetti");
    let tag = &INDEX_HTML[start..];
    let tag = &tag[..tag.find('>').expect("script tag end")];
    assert!(!tag.contains("async"), "confetti must exist before the first burst");
    assert!(!tag.contains("defer"), "confetti must exist before the first burst");
    assert!(INDEX_HTML.contains("data-bin=\"kokuhaku\""));
}

#[test]
fn index_ships_styles_and_assets() {
    assert!(INDEX_HTML.contains("href=\"style.css\""));
    assert!(INDEX_HTML.contains("rel=\"copy-dir\" href=\"assets\""));
}

#[test]
fn only_active_stage_is_displayed() {
    let hidden = STYLE_CSS.find(".stage {").expect("stage rule");
    let shown = STYLE_CSS.find(".stage.active {").expect("active stage rule");
    assert!(hidden < shown, "active rule must come after the base rule");
    let base = &STYLE_CSS[hidden..shown];
    assert!(base.contains("display: none"));
}

#[test]
fn wheel_transition_matches_spin_duration() {
    let seconds = kokuhaku_core::wheel::SPIN_DURATION_MS / 1000;
    assert!(STYLE_CSS.contains(&format!("transition: transform {seconds}s")));
}

#[test]
fn signature_pad_blocks_touch_scrolling() {
    let rule = STYLE_CSS
        .find(".signature-pad {")
        .map(|start| &STYLE_CSS[start..])
        .expect("signature pad rule");
    let end = rule.find('}').expect("rule end");
    assert!(rule[..end].contains("touch-action: none"));
}

#[test]
fn page_audio_sources_live_under_assets() {
    let audio = kokuhaku_core::PAGE_CONFIG.audio;
    for src in [audio.background, audio.click, audio.woosh, audio.win] {
        assert!(src.starts_with("assets/"), "{src} is outside the copied assets dir");
        assert!(PAGE_TOML.contains(src));
    }
}
