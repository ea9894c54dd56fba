//! Error types for the carousel widget.

use std::path::PathBuf;

/// Result type alias for carousel operations.
pub type Result<T> = std::result::Result<T, CarouselError>;

/// Errors that can occur while building curves, controllers, or configuration.
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    /// An argument was outside its documented domain.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// File I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CarouselError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this is an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
