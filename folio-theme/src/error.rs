//! # Theme Error Types
//!
//! Error types for the theming layer. Only structural problems surface as
//! errors; an unknown theme requested at runtime is ignored by the provider
//! and a stale persisted preference is discarded in favor of the fallback chain.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A theme record is missing one or more required tokens.
    #[error("Theme '{name}' is incomplete, missing: {}", missing.join(", "))]
    IncompleteTheme {
        /// The identifier of the offending theme.
        name: String,
        /// Token names (`color-*` / `style-*`) that are empty.
        missing: Vec<String>,
    },

    /// A registry was built without any theme.
    #[error("Theme registry must contain at least one theme")]
    EmptyRegistry,

    /// The style context was read while no provider was installed.
    #[error("use_style_context must be used within StyleProvider")]
    OutsideProvider,

    /// Theme configuration or registry file was not found.
    #[error("Theme file not found: {path:?}")]
    ThemeFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a theme configuration or registry file.
    #[error("Failed to parse theme file {path:?}: {details}")]
    ThemeParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// The preference store failed to persist a value.
    #[error("Failed to persist theme preference: {source}")]
    Storage {
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing or deserializing theme data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an incomplete theme error.
    pub fn incomplete(name: impl Into<String>, missing: Vec<String>) -> Self {
        Self::IncompleteTheme {
            name: name.into(),
            missing,
        }
    }

    /// Create a theme file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ThemeFileNotFound { path: path.into() }
    }

    /// Create a theme parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ThemeParseError {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create a storage error from any error type.
    pub fn storage(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage {
            source: Box::new(source),
        }
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
