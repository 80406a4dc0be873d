//! Builds the self-contained static site.

use crate::config::ExportConfig;
use crate::contract::verify_static_page;
use crate::preview::rasterize_preview;
use codehouse_core::Catalog;
use codehouse_error::{ExportError, ExportErrorKind, ExportResult};
use codehouse_render::{
    PREVIEW_IMAGE_PATH, PageContext, RenderMode, SVG_DIR, layer_placeholder_svg, preview_svg,
    render_index,
};
use derive_getters::Getters;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Name of the rendered page inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Summary of a finished export.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ExportReport {
    /// Asset files copied from the source directories, sorted
    copied: Vec<String>,
    /// Layer ids that received a generated placeholder
    placeholders: Vec<String>,
    /// Path of the written page
    index_path: PathBuf,
    /// Path of the rasterized preview image
    preview_path: PathBuf,
}

/// Exports the site for `catalog` according to `config`.
///
/// The output directory is deleted and rebuilt, so two runs with the same
/// inputs produce byte-identical pages.
pub struct StaticExporter<'a> {
    catalog: &'a Catalog,
    config: &'a ExportConfig,
}

impl<'a> StaticExporter<'a> {
    /// Creates an exporter over the given catalog.
    pub fn new(catalog: &'a Catalog, config: &'a ExportConfig) -> Self {
        Self { catalog, config }
    }

    /// Runs every export step in order.
    #[instrument(skip(self), fields(output = %self.config.output_dir().display()))]
    pub fn run(&self) -> ExportResult<ExportReport> {
        let out = self.config.output_dir();
        let svg_dir = out.join(SVG_DIR);
        let static_dir = out.join("static");

        clean_output(out)?;
        for dir in [out.as_path(), svg_dir.as_path(), static_dir.as_path()] {
            fs::create_dir_all(dir)
                .map_err(|e| ExportError::new(ExportErrorKind::create_dir(dir, e)))?;
        }

        let copied = self.copy_assets(&svg_dir)?;
        let placeholders = self.write_placeholders(&svg_dir)?;
        let index_path = self.write_index(out)?;
        let preview_path = write_preview(&static_dir)?;

        let report = ExportReport {
            copied: copied.into_iter().collect(),
            placeholders,
            index_path,
            preview_path,
        };
        info!(
            copied = report.copied.len(),
            placeholders = report.placeholders.len(),
            "Static export complete"
        );
        Ok(report)
    }

    fn copy_assets(&self, svg_dir: &Path) -> ExportResult<BTreeSet<String>> {
        let mut copied = BTreeSet::new();
        for source in self.config.asset_dirs() {
            if !source.is_dir() {
                info!(dir = %source.display(), "Asset directory not found, skipping");
                continue;
            }
            for (name, path) in svg_files(source)? {
                let target = svg_dir.join(&name);
                fs::copy(&path, &target)
                    .map_err(|e| ExportError::new(ExportErrorKind::copy(&path, &target, e)))?;
                debug!(file = %name, "Copied asset");
                copied.insert(name);
            }
        }
        info!(count = copied.len(), "Copied SVG assets");
        Ok(copied)
    }

    fn write_placeholders(&self, svg_dir: &Path) -> ExportResult<Vec<String>> {
        let mut written = Vec::new();
        for layer in self.catalog.layers() {
            let target = svg_dir.join(layer.asset_filename());
            if target.exists() {
                continue;
            }
            write_file(&target, layer_placeholder_svg(layer).as_bytes())?;
            warn!(layer = %layer.id(), "No asset for layer, wrote placeholder");
            written.push(layer.id().clone());
        }
        Ok(written)
    }

    fn write_index(&self, out: &Path) -> ExportResult<PathBuf> {
        let page = PageContext::new(self.catalog, self.config.display(), RenderMode::Static);
        let html = render_index(&page);
        verify_static_page(&html)?;

        let path = out.join(INDEX_FILE);
        write_file(&path, html.as_bytes())?;
        info!(path = %path.display(), base = %self.config.display().base_href(), "Wrote page");
        Ok(path)
    }
}

/// Exports the built-in house catalog.
pub fn export(config: &ExportConfig) -> ExportResult<ExportReport> {
    StaticExporter::new(Catalog::shared(), config).run()
}

fn clean_output(out: &Path) -> ExportResult<()> {
    if out.exists() {
        fs::remove_dir_all(out).map_err(|e| ExportError::new(ExportErrorKind::clean(out, e)))?;
        debug!(dir = %out.display(), "Removed previous output");
    }
    Ok(())
}

/// Lists regular `*.svg` files in `dir`, sorted by name.
fn svg_files(dir: &Path) -> ExportResult<Vec<(String, PathBuf)>> {
    let entries =
        fs::read_dir(dir).map_err(|e| ExportError::new(ExportErrorKind::read_dir(dir, e)))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ExportError::new(ExportErrorKind::read_dir(dir, e)))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("svg") {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            files.push((name.to_string(), path.clone()));
        }
    }
    files.sort();
    Ok(files)
}

fn write_preview(static_dir: &Path) -> ExportResult<PathBuf> {
    let svg = preview_svg();
    write_file(&static_dir.join("house-preview.svg"), svg.as_bytes())?;

    let png = static_dir.join(preview_file_name());
    rasterize_preview(&svg, &png)?;
    info!(path = %png.display(), "Wrote preview image");
    Ok(png)
}

fn preview_file_name() -> &'static str {
    PREVIEW_IMAGE_PATH
        .rsplit('/')
        .next()
        .unwrap_or(PREVIEW_IMAGE_PATH)
}

fn write_file(path: &Path, contents: &[u8]) -> ExportResult<()> {
    fs::write(path, contents).map_err(|e| ExportError::new(ExportErrorKind::write(path, e)))
}
