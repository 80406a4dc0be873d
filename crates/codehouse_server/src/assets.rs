//! Ordered asset lookup for `GET /svg/{filename}`.
//!
//! Sources are tried in order. When none of them has the file, the resolver synthesizes a
//! placeholder, so resolution itself never fails.

use async_trait::async_trait;
use codehouse_render::missing_asset_svg;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// A place an asset may be found.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Short label used in logs.
    fn label(&self) -> &str;

    /// Returns the asset bytes, or `None` if this source does not have it.
    async fn lookup(&self, name: &str) -> Option<Vec<u8>>;
}

/// Serves files from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    label: String,
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source rooted at `root`.
    pub fn new(label: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            root: root.into(),
        }
    }

    /// Directory this source reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl AssetSource for DirectorySource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn lookup(&self, name: &str) -> Option<Vec<u8>> {
        if !is_plain_relative(name) {
            debug!(source = %self.label, name, "Rejected asset path outside the source root");
            return None;
        }
        let path = self.root.join(name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                trace!(
                    source = %self.label,
                    path = %path.display(),
                    error = %e,
                    "Asset not readable"
                );
                None
            }
        }
    }
}

/// Where a resolved asset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOrigin {
    /// Read from the named source
    Source(String),
    /// Synthesized because no source had it
    Placeholder,
}

/// Result of resolving an asset name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// Response body
    pub bytes: Vec<u8>,
    /// Which strategy produced it
    pub origin: AssetOrigin,
}

/// Tries each source in order, then falls back to a placeholder.
#[derive(Clone, Default)]
pub struct AssetResolver {
    sources: Vec<Arc<dyn AssetSource>>,
}

impl AssetResolver {
    /// Creates a resolver with no sources; every lookup yields a placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source after the existing ones.
    pub fn with_source(mut self, source: impl AssetSource + 'static) -> Self {
        self.sources.push(Arc::new(source));
        self
    }

    /// The local directory first, then the shared directory.
    pub fn from_dirs(asset_dir: impl Into<PathBuf>, shared_asset_dir: impl Into<PathBuf>) -> Self {
        Self::new()
            .with_source(DirectorySource::new("local", asset_dir))
            .with_source(DirectorySource::new("shared", shared_asset_dir))
    }

    /// Number of sources consulted before the placeholder.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Resolves `name`. Always succeeds.
    #[instrument(skip(self))]
    pub async fn resolve(&self, name: &str) -> ResolvedAsset {
        for source in &self.sources {
            if let Some(bytes) = source.lookup(name).await {
                debug!(source = source.label(), bytes = bytes.len(), "Asset found");
                return ResolvedAsset {
                    bytes,
                    origin: AssetOrigin::Source(source.label().to_string()),
                };
            }
        }

        debug!("Asset missing from every source, serving placeholder");
        ResolvedAsset {
            bytes: missing_asset_svg(name).into_bytes(),
            origin: AssetOrigin::Placeholder,
        }
    }
}

impl std::fmt::Debug for AssetResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetResolver")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.label()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

// Only plain descending components; no `..`, root or prefix.
fn is_plain_relative(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_relative_paths() {
        assert!(is_plain_relative("roof.svg"));
        assert!(is_plain_relative("nested/roof.svg"));
        assert!(!is_plain_relative("../secret.svg"));
        assert!(!is_plain_relative("/etc/passwd"));
        assert!(!is_plain_relative("a/../../b.svg"));
        assert!(!is_plain_relative(""));
    }

    #[tokio::test]
    async fn empty_resolver_yields_placeholder() {
        let resolved = AssetResolver::new().resolve("ghost.svg").await;
        assert_eq!(resolved.origin, AssetOrigin::Placeholder);
        let body = String::from_utf8(resolved.bytes).expect("utf-8 placeholder");
        assert!(body.contains("ghost.svg (not found)"));
    }
}
