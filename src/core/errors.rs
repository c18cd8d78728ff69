//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for goimpl operations
#[derive(Debug, Error)]
pub enum Error {
    /// Mutually exclusive or otherwise invalid generation options.
    #[error("Configuration error: {option}: {message}")]
    Config { option: String, message: String },

    /// The assembled stub document is not well-formed Go.
    #[error("Error parsing generated code: {line}:{column}: {message}")]
    Render {
        message: String,
        line: usize,
        column: usize,
        source_text: String,
    },

    /// The external reformat / import-resolution pass failed.
    #[error("Error fixing imports: {message}")]
    Reformat { message: String, source_text: String },

    /// Malformed or unresolvable type descriptors.
    #[error("Descriptor error: {message}")]
    Descriptor {
        message: String,
        path: Option<PathBuf>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            option: option.into(),
            message: message.into(),
        }
    }

    pub fn descriptor(message: impl Into<String>) -> Self {
        Self::Descriptor {
            message: message.into(),
            path: None,
        }
    }

    /// Create a descriptor error with the catalog path it came from
    pub fn descriptor_in(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Descriptor {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn reformat(message: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self::Reformat {
            message: message.into(),
            source_text: source_text.into(),
        }
    }

    /// Generated text retained for diagnosing render and reformat failures.
    pub fn source_text(&self) -> Option<&str> {
        match self {
            Self::Render { source_text, .. } | Self::Reformat { source_text, .. } => {
                Some(source_text)
            }
            _ => None,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
