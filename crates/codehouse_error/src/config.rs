//! Configuration error types.

/// Kinds of configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A layer was declared with an empty id
    #[display("Layer at position {} has an empty id", _0)]
    EmptyLayerId(usize),
    /// Two layers share the same id
    #[display("Duplicate layer id: {}", _0)]
    DuplicateLayer(String),
    /// A chapter was declared with an empty preset key
    #[display("Chapter at position {} has an empty preset key", _0)]
    EmptyPresetKey(usize),
    /// Two chapters share the same preset key
    #[display("Duplicate chapter preset: {}", _0)]
    DuplicatePreset(String),
    /// A chapter references a layer that was never declared
    #[display("Chapter '{}' references unknown layer '{}'", preset, layer)]
    UnknownLayer {
        /// Preset key of the offending chapter
        preset: String,
        /// The layer id that did not resolve
        layer: String,
    },
    /// A setting could not be parsed
    #[display("Invalid setting {}: {}", name, reason)]
    InvalidSetting {
        /// Name of the setting (environment variable or flag)
        name: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use codehouse_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::DuplicateLayer("roof".to_string()));
/// assert!(format!("{}", err).contains("Duplicate layer id: roof"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given kind at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

impl From<ConfigErrorKind> for ConfigError {
    #[track_caller]
    fn from(kind: ConfigErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
