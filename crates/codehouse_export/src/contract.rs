//! Checks that a rendered page can be hosted from an arbitrary sub-path.

use codehouse_error::{ExportError, ExportErrorKind, ExportResult};

const HEAD_OPEN: &str = "<head>";
const BASE_OPEN: &str = "<base href=";
// Attribute values that start at the server root. A `/svg/` segment inside the
// site URL itself is fine.
const ABSOLUTE_SVG_ATTRS: [&str; 2] = ["\"/svg/", "'/svg/"];

/// Verifies the static hosting contract:
/// - no attribute value starting with the server-absolute `/svg/` path
/// - exactly one `<base href=...>` tag
/// - that tag is the first thing inside `<head>`
pub fn verify_static_page(html: &str) -> ExportResult<()> {
    if ABSOLUTE_SVG_ATTRS.iter().any(|attr| html.contains(attr)) {
        return Err(ExportError::new(ExportErrorKind::Contract(
            "page still references absolute /svg/ paths".to_string(),
        )));
    }

    let base_tags = html.matches(BASE_OPEN).count();
    if base_tags != 1 {
        return Err(ExportError::new(ExportErrorKind::Contract(format!(
            "expected exactly one base tag, found {base_tags}"
        ))));
    }

    let head = html.find(HEAD_OPEN).ok_or_else(|| {
        ExportError::new(ExportErrorKind::Contract("page has no <head> tag".to_string()))
    })?;
    if !html[head + HEAD_OPEN.len()..]
        .trim_start()
        .starts_with(BASE_OPEN)
    {
        return Err(ExportError::new(ExportErrorKind::Contract(
            "base tag does not immediately follow <head>".to_string(),
        )));
    }

    Ok(())
}
