//! Static export error types.

use std::path::Path;

/// Kinds of static export errors.
///
/// Every variant names the path the failing step was working on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExportErrorKind {
    /// Removing the previous output tree failed
    #[display("Failed to clean {}: {}", path, reason)]
    Clean {
        /// Directory being removed
        path: String,
        /// Underlying error message
        reason: String,
    },
    /// Creating an output directory failed
    #[display("Failed to create directory {}: {}", path, reason)]
    CreateDir {
        /// Directory being created
        path: String,
        /// Underlying error message
        reason: String,
    },
    /// Listing an asset source directory failed
    #[display("Failed to read directory {}: {}", path, reason)]
    ReadDir {
        /// Directory being listed
        path: String,
        /// Underlying error message
        reason: String,
    },
    /// Copying an asset into the output tree failed
    #[display("Failed to copy {} to {}: {}", from, to, reason)]
    Copy {
        /// Source file
        from: String,
        /// Destination file
        to: String,
        /// Underlying error message
        reason: String,
    },
    /// Writing an output file failed
    #[display("Failed to write {}: {}", path, reason)]
    Write {
        /// File being written
        path: String,
        /// Underlying error message
        reason: String,
    },
    /// Converting the preview vector to a raster image failed
    #[display("Failed to rasterize {}: {}", path, reason)]
    Rasterize {
        /// Target image path
        path: String,
        /// Underlying error message
        reason: String,
    },
    /// The rendered page violates the static hosting contract
    #[display("Static page contract violated: {}", _0)]
    Contract(String),
}

impl ExportErrorKind {
    /// Build a `Clean` kind from a path and error.
    pub fn clean(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Clean {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Build a `CreateDir` kind from a path and error.
    pub fn create_dir(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::CreateDir {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Build a `ReadDir` kind from a path and error.
    pub fn read_dir(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::ReadDir {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Build a `Copy` kind from source, destination and error.
    pub fn copy(from: &Path, to: &Path, err: impl std::fmt::Display) -> Self {
        Self::Copy {
            from: from.display().to_string(),
            to: to.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Build a `Write` kind from a path and error.
    pub fn write(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Write {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Build a `Rasterize` kind from a path and error.
    pub fn rasterize(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Rasterize {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Static export error with location tracking.
///
/// # Examples
///
/// ```
/// use codehouse_error::{ExportError, ExportErrorKind};
///
/// let err = ExportError::new(ExportErrorKind::Contract("missing base tag".to_string()));
/// assert!(format!("{}", err).contains("missing base tag"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The kind of error that occurred
    pub kind: ExportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExportError {
    /// Create a new export error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ExportErrorKind {
        &self.kind
    }
}

impl From<ExportErrorKind> for ExportError {
    #[track_caller]
    fn from(kind: ExportErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for static export operations.
pub type ExportResult<T> = Result<T, ExportError>;
