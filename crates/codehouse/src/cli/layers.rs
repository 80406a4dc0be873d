//! Catalog inspection command handler.

use super::LayersFormat;
use codehouse_core::Catalog;
use std::fmt::Write as _;

/// Formats the catalog for the terminal.
pub fn render_layers(catalog: &Catalog, format: LayersFormat) -> serde_json::Result<String> {
    match format {
        LayersFormat::Json => serde_json::to_string_pretty(catalog),
        LayersFormat::Human => {
            let mut out = String::from("Layers:\n");
            for layer in catalog.layers() {
                let marker = if layer.default_visible() { "*" } else { " " };
                let _ = writeln!(out, "  {marker} {:<20} {}", layer.id(), layer.display_name());
            }
            out.push_str("Chapters:\n");
            for chapter in catalog.chapters() {
                let _ = writeln!(
                    out,
                    "    {:<16} {} [{}]",
                    chapter.preset_key(),
                    chapter.display_name(),
                    chapter.layer_list()
                );
            }
            Ok(out)
        }
    }
}

/// Handle the `layers` command
pub fn handle_layers_command(format: LayersFormat) -> serde_json::Result<()> {
    print!("{}", render_layers(Catalog::shared(), format)?);
    Ok(())
}
