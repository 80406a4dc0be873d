//! Synthesized SVG documents: asset placeholders and the social preview card.

use codehouse_core::Layer;
use maud::html;

/// Width of the social preview card in pixels.
pub const PREVIEW_WIDTH: u32 = 1200;
/// Height of the social preview card in pixels.
pub const PREVIEW_HEIGHT: u32 = 630;

/// Placeholder returned by the live server for an asset no source could provide.
///
/// # Examples
///
/// ```
/// let svg = codehouse_render::missing_asset_svg("roof.svg");
/// assert!(svg.contains("roof.svg (not found)"));
/// ```
pub fn missing_asset_svg(filename: &str) -> String {
    labelled_frame(&format!("{filename} (not found)"))
}

/// Placeholder written by the static exporter for a layer without a real asset.
pub fn layer_placeholder_svg(layer: &Layer) -> String {
    labelled_frame(&format!("{} (Placeholder)", layer.placeholder_label()))
}

// 800x600 outline with a centred, escaped caption.
fn labelled_frame(label: &str) -> String {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 800 600" {
            rect width="800" height="600" fill="none" stroke="#ccc" stroke-width="1" {}
            text x="400" y="300" font-family="Arial" font-size="24"
                text-anchor="middle" fill="#999" {
                (label)
            }
        }
    }
    .into_string()
}

/// Decorative card used as the Open Graph / Twitter preview image.
pub fn preview_svg() -> String {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width=(PREVIEW_WIDTH) height=(PREVIEW_HEIGHT)
            viewBox=(format!("0 0 {PREVIEW_WIDTH} {PREVIEW_HEIGHT}")) {
            rect width=(PREVIEW_WIDTH) height=(PREVIEW_HEIGHT) fill="#4CAF50" {}
            polygon points="600,100 300,350 900,350"
                fill="#f5deb3" stroke="#333" stroke-width="4" {}
            rect x="350" y="350" width="500" height="300"
                fill="#f5deb3" stroke="#333" stroke-width="4" {}
            rect x="525" y="500" width="150" height="150"
                fill="#8B4513" stroke="#333" stroke-width="2" {}
            circle cx="650" cy="575" r="10" fill="#FFD700" {}
            text x="600" y="80" font-family="Arial" font-size="48"
                text-anchor="middle" fill="#fff" font-weight="bold" {
                (crate::SITE_TITLE)
            }
            text x="600" y="580" font-family="Arial" font-size="32"
                text-anchor="middle" fill="#fff" {
                "Interactive Web Development Visualization"
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_asset_escapes_markup() {
        let svg = missing_asset_svg("<script>&.svg");
        assert!(svg.contains("&lt;script&gt;&amp;.svg (not found)"));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn frames_are_well_formed_xml_elements() {
        let svg = layer_placeholder_svg(&Layer::new("systems-layer", "Backend Systems", false));
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("<rect width=\"800\" height=\"600\""));
        assert!(svg.contains("></rect>"));
        assert!(svg.contains("Systems Layer (Placeholder)"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn preview_has_card_dimensions() {
        let svg = preview_svg();
        assert!(svg.contains("width=\"1200\""));
        assert!(svg.contains("viewBox=\"0 0 1200 630\""));
        assert!(svg.contains("The House that Code Built"));
    }
}
