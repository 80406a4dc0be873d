//! Tests for the page template in both deployment modes.

use codehouse_core::{Catalog, Chapter, DisplayContext, Layer};
use codehouse_render::{PageContext, RenderMode, render_index};

fn house_page(mode: RenderMode) -> String {
    let display = DisplayContext::new("octo", "house", None);
    render_index(&PageContext::new(Catalog::shared(), &display, mode))
}

#[test]
fn test_document_basics() {
    let html = house_page(RenderMode::Server);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<title>The House that Code Built</title>"));
    assert!(html.contains("<main"));
    assert!(html.contains("<section"));
    assert!(html.contains("role=\"contentinfo\""));
    assert!(html.contains("class=\"skip-link\""));
}

#[test]
fn test_three_column_layout() {
    let html = house_page(RenderMode::Server);
    assert!(html.contains("three-column-layout"));
    assert!(html.contains("class=\"column left-column\""));
    assert!(html.contains("<section class=\"column center-column\">"));
    assert!(html.contains("class=\"column right-column\""));
    assert!(html.contains("<div class=\"layer-toggles\""));
    assert!(html.contains("<div class=\"preset-buttons\""));
}

#[test]
fn test_accessibility_markers() {
    let html = house_page(RenderMode::Server);
    assert!(html.contains("aria-live=\"polite\""));
    assert!(html.contains("aria-label=\"Toggle dark mode\""));
    assert!(html.contains("aria-pressed=\"true\""));
    assert!(html.contains("aria-pressed=\"false\""));
    assert!(html.contains("id=\"chapter-presets-heading\""));
    assert!(html.contains("id=\"layer-controls-heading\""));
    assert!(html.contains("aria-labelledby=\"chapter-presets-heading\""));
    assert!(html.contains("aria-labelledby=\"layer-controls-heading\""));
    assert!(html.contains("setAttribute('aria-label'"));
    assert!(!html.contains("tabindex=\"-1\""));
}

#[test]
fn test_keyboard_and_theme_support() {
    let html = house_page(RenderMode::Server);
    assert!(html.contains("keydown"));
    assert!(html.contains("ArrowLeft"));
    assert!(html.contains("ArrowRight"));
    assert!(html.contains("focus()"));
    assert!(html.contains("--bg-color: #f5f5f5;"));
    assert!(html.contains("--text-color: #333;"));
    assert!(html.contains("--bg-color: #121212;"));
    assert!(html.contains("--text-color: #e0e0e0;"));
    assert!(html.contains("max-width"));
}

#[test]
fn test_audio_section() {
    let html = house_page(RenderMode::Server);
    assert!(html.contains("<section class=\"audio-section full-width\">"));
    assert!(html.contains("Tom Waits - What's He Building in There?"));
    assert!(html.contains("youtube.com/embed/04qPdGNA_KM"));
    assert!(html.contains("id=\"toggle-audio\""));
    assert!(html.contains("aria-label=\"Mute audio\""));
    assert!(html.contains("Accessibility Note"));
}

#[test]
fn test_every_layer_and_chapter_rendered() {
    let html = house_page(RenderMode::Server);
    for layer in Catalog::shared().layers() {
        assert!(html.contains(&format!("id=\"toggle-{}\"", layer.id())));
    }
    for chapter in Catalog::shared().chapters() {
        assert!(html.contains(&format!("data-preset=\"{}\"", chapter.preset_key())));
    }
    assert!(html.contains("data-layers=\"environment-layer house-structure html-tags-layer\""));
}

#[test]
fn test_server_mode_paths() {
    let html = house_page(RenderMode::Server);
    assert!(html.contains("data-svg-base=\"/svg/\""));
    assert!(!html.contains("<base"));
    assert!(html.contains(
        "property=\"og:image\" content=\"https://octo.github.io/house/static/house-preview.png\""
    ));
    assert!(html.contains("href=\"https://github.com/octo/house\""));
}

#[test]
fn test_static_mode_paths() {
    let html = house_page(RenderMode::Static);
    assert!(!html.contains("/svg/"));
    assert!(html.contains("data-svg-base=\"svg/\""));
    assert!(html.contains("<head><base href=\"https://octo.github.io/house/\">"));
    assert_eq!(html.matches("<base href=").count(), 1);
    assert!(html.contains("property=\"og:image\" content=\"static/house-preview.png\""));
    assert!(html.contains("name=\"twitter:image\" content=\"static/house-preview.png\""));
}

#[test]
fn test_rendering_is_deterministic() {
    assert_eq!(house_page(RenderMode::Static), house_page(RenderMode::Static));
    assert_eq!(house_page(RenderMode::Server), house_page(RenderMode::Server));
}

#[test]
fn test_single_layer_scenario() {
    let catalog = Catalog::new(
        vec![Layer::new("a", "Alpha", true)],
        vec![Chapter::new("Base", "base", "Only alpha", ["a"])],
    )
    .expect("Valid catalog");
    let display = DisplayContext::default();
    let html = render_index(&PageContext::new(&catalog, &display, RenderMode::Server));

    assert!(html.contains(concat!(
        "<label class=\"layer-toggle active\" for=\"toggle-a\">",
        "<input type=\"checkbox\" id=\"toggle-a\" data-layer=\"a\""
    )));
    assert!(html.contains("checked>"));
    assert!(html.contains(concat!(
        "<button type=\"button\" class=\"preset-button active\" ",
        "data-preset=\"base\" data-layers=\"a\" aria-pressed=\"true\">"
    )));
    assert!(html.contains("<span class=\"preset-name\">Base</span>"));
}

#[test]
fn test_hidden_layer_not_checked() {
    let catalog = Catalog::new(
        vec![Layer::new("a", "Alpha", true), Layer::new("b", "Beta", false)],
        vec![Chapter::new("Beta only", "beta", "", ["b"])],
    )
    .expect("Valid catalog");
    let display = DisplayContext::default();
    let html = render_index(&PageContext::new(&catalog, &display, RenderMode::Server));

    assert!(html.contains("<label class=\"layer-toggle\" for=\"toggle-b\">"));
    assert!(html.contains("aria-label=\"Show Beta layer\">"));
    assert!(html.contains("data-preset=\"beta\" data-layers=\"b\" aria-pressed=\"false\""));
}
