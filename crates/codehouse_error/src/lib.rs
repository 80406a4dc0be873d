//! Error types for The House that Code Built.
//!
//! Every crate in the workspace reports failures through a `*ErrorKind` enum wrapped in a
//! struct that records where the error was created. [`CodehouseError`] is the top-level
//! error every domain error converts into.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod export;
mod server;

pub use config::{ConfigError, ConfigErrorKind, ConfigResult};
pub use export::{ExportError, ExportErrorKind, ExportResult};
pub use server::{ServerError, ServerErrorKind, ServerResult};

/// Every error the workspace can surface at a run boundary.
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CodehouseErrorKind {
    /// Catalog or settings problem
    #[display("{}", _0)]
    Config(ConfigError),
    /// Live server failure
    #[display("{}", _0)]
    Server(ServerError),
    /// Static export failure
    #[display("{}", _0)]
    Export(ExportError),
}

/// Top-level error with location tracking.
///
/// # Examples
///
/// ```
/// use codehouse_error::{CodehouseError, ServerError, ServerErrorKind};
///
/// let err: CodehouseError = ServerError::new(ServerErrorKind::Serve("closed".into())).into();
/// assert!(format!("{}", err).contains("closed"));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Codehouse Error: {}", kind)]
pub struct CodehouseError {
    /// The wrapped domain error
    #[error(source)]
    pub kind: CodehouseErrorKind,
    /// Line number where the conversion happened
    pub line: u32,
    /// File where the conversion happened
    pub file: &'static str,
}

impl CodehouseError {
    /// Create a new top-level error at the current location.
    #[track_caller]
    pub fn new(kind: CodehouseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CodehouseErrorKind {
        &self.kind
    }
}

impl<T> From<T> for CodehouseError
where
    T: Into<CodehouseErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for top-level operations.
pub type CodehouseResult<T> = Result<T, CodehouseError>;
