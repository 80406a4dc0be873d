//! The single page template.

use crate::PageContext;
use codehouse_core::{Catalog, Chapter, Layer};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use tracing::{debug, instrument};

/// Title shown in the page header, the document title and social cards.
pub const SITE_TITLE: &str = "The House that Code Built";

const SITE_DESCRIPTION: &str = "An interactive, layered illustration of how HTML, CSS, \
JavaScript and backend systems come together to build a website.";

const AUDIO_TITLE: &str = "Tom Waits - What's He Building in There?";
const AUDIO_EMBED_URL: &str = "https://www.youtube.com/embed/04qPdGNA_KM?enablejsapi=1";

const STYLE: &str = include_str!("../assets/house.css");
const SCRIPT: &str = include_str!("../assets/house.js");

/// Renders the complete HTML document.
///
/// Output depends only on the context, so equal contexts render byte-identical pages.
#[instrument(skip_all, fields(mode = %page.mode()))]
pub fn render_index(page: &PageContext<'_>) -> String {
    let html = index_markup(page).into_string();
    debug!(bytes = html.len(), "Rendered index page");
    html
}

/// The document as maud markup.
pub fn index_markup(page: &PageContext<'_>) -> Markup {
    let catalog = page.catalog();
    let display = page.display();
    let mode = page.mode();
    let preview_image = mode.preview_image_url(display);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                @if let Some(href) = mode.base_href(display) {
                    base href=(href);
                }
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (SITE_TITLE) }
                meta name="description" content=(SITE_DESCRIPTION);
                meta property="og:type" content="website";
                meta property="og:title" content=(SITE_TITLE);
                meta property="og:description" content=(SITE_DESCRIPTION);
                meta property="og:url" content=(display.published_site_url());
                meta property="og:image" content=(preview_image);
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(SITE_TITLE);
                meta name="twitter:description" content=(SITE_DESCRIPTION);
                meta name="twitter:image" content=(preview_image);
                style { (PreEscaped(STYLE)) }
            }
            body {
                a class="skip-link" href="#main-content" { "Skip to main content" }
                header class="site-header" {
                    h1 { (SITE_TITLE) }
                    button id="theme-toggle" class="theme-toggle" type="button"
                        aria-label="Toggle dark mode" aria-pressed="false" { "Dark mode" }
                }
                main id="main-content" {
                    div class="three-column-layout" {
                        section class="column left-column"
                            aria-labelledby="chapter-presets-heading" {
                            h2 id="chapter-presets-heading" { "Chapters" }
                            div class="preset-buttons" role="group" aria-label="Chapter presets" {
                                @for chapter in catalog.chapters() {
                                    (preset_button(catalog, chapter))
                                }
                            }
                        }
                        section class="column center-column" {
                            h2 class="visually-hidden" { "House illustration" }
                            div id="house-stage" class="house-stage"
                                aria-label="Layered illustration of the house"
                                data-svg-base=(mode.asset_base()) {}
                            p id="layer-status" class="layer-status" aria-live="polite" {}
                        }
                        section class="column right-column"
                            aria-labelledby="layer-controls-heading" {
                            h2 id="layer-controls-heading" { "Layers" }
                            div class="layer-toggles" role="group" aria-label="Visible layers" {
                                @for layer in catalog.layers() {
                                    (layer_toggle(layer))
                                }
                            }
                        }
                    }
                    (audio_section())
                }
                footer class="site-footer" role="contentinfo" {
                    p {
                        (SITE_TITLE) " by " (display.account_name()) ". "
                        a href=(display.repository_url())
                            aria-label="View the source code on GitHub" {
                            "Source code"
                        }
                        " | "
                        a href=(display.published_site_url()) aria-label="Open the published site" {
                            "Published site"
                        }
                    }
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}

fn preset_button(catalog: &Catalog, chapter: &Chapter) -> Markup {
    let pressed = catalog.is_default_chapter(chapter);
    html! {
        button type="button" class=(preset_class(pressed))
            data-preset=(chapter.preset_key())
            data-layers=(chapter.layer_list())
            aria-pressed=(pressed_attr(pressed)) {
            span class="preset-name" { (chapter.display_name()) }
            span class="preset-description" { (chapter.description()) }
        }
    }
}

fn layer_toggle(layer: &Layer) -> Markup {
    let toggle_id = format!("toggle-{}", layer.id());
    html! {
        label class=(toggle_class(layer.default_visible())) for=(toggle_id) {
            input type="checkbox" id=(toggle_id)
                data-layer=(layer.id())
                data-name=(layer.display_name())
                aria-label=(format!("Show {} layer", layer.display_name()))
                checked[layer.default_visible()];
            span { (layer.display_name()) }
        }
    }
}

fn audio_section() -> Markup {
    html! {
        section class="audio-section full-width" {
            h2 id="audio-heading" { (AUDIO_TITLE) }
            div class="audio-player" {
                iframe id="audio-frame" src=(AUDIO_EMBED_URL)
                    title=(AUDIO_TITLE)
                    allow="autoplay; encrypted-media"
                    loading="lazy" {}
            }
            button id="toggle-audio" class="audio-toggle" type="button"
                aria-label="Mute audio" aria-pressed="false" { "Mute" }
            p class="accessibility-note" {
                strong { "Accessibility Note: " }
                "The song includes unsettling spoken-word audio. "
                "Use the mute button at any time, or skip this section entirely."
            }
        }
    }
}

fn preset_class(pressed: bool) -> &'static str {
    if pressed {
        "preset-button active"
    } else {
        "preset-button"
    }
}

fn toggle_class(active: bool) -> &'static str {
    if active {
        "layer-toggle active"
    } else {
        "layer-toggle"
    }
}

fn pressed_attr(pressed: bool) -> &'static str {
    if pressed { "true" } else { "false" }
}
