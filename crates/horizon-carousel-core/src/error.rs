//! Error types for Horizon Carousel core systems.

use std::fmt;

/// The main error type for core operations.
#[derive(Debug)]
pub enum CoreError {
    /// Update-loop related error.
    Tick(TickError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tick(err) => write!(f, "Update loop error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tick(err) => Some(err),
        }
    }
}

/// Update-loop specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickError {
    /// The listener ID is invalid or the listener has already been removed.
    InvalidListenerId,
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidListenerId => write!(f, "Invalid or removed update listener ID"),
        }
    }
}

impl std::error::Error for TickError {}

impl From<TickError> for CoreError {
    fn from(err: TickError) -> Self {
        Self::Tick(err)
    }
}

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
