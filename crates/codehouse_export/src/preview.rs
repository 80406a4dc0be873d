//! Social preview image: the vector card and its PNG rendering.

use codehouse_error::{ExportError, ExportErrorKind, ExportResult};
use codehouse_render::{PREVIEW_HEIGHT, PREVIEW_WIDTH};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Rasterizes `svg` into a `PREVIEW_WIDTH` x `PREVIEW_HEIGHT` PNG at `out`.
#[instrument(skip(svg), fields(out = %out.display()))]
pub fn rasterize_preview(svg: &str, out: &Path) -> ExportResult<()> {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    debug!(faces = fontdb.len(), "Loaded system fonts");

    let opts = usvg::Options {
        fontdb: Arc::new(fontdb),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| ExportError::new(ExportErrorKind::rasterize(out, e)))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(PREVIEW_WIDTH, PREVIEW_HEIGHT).ok_or_else(|| {
        ExportError::new(ExportErrorKind::rasterize(out, "failed to allocate pixmap"))
    })?;

    let sx = PREVIEW_WIDTH as f32 / tree.size().width();
    let sy = PREVIEW_HEIGHT as f32 / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha; PNG wants straight alpha.
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    image::save_buffer_with_format(
        out,
        &rgba,
        PREVIEW_WIDTH,
        PREVIEW_HEIGHT,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| ExportError::new(ExportErrorKind::write(out, e)))?;

    debug!(bytes = rgba.len(), "Wrote preview png");
    Ok(())
}
