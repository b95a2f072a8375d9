//! Error types shared by the codec and the converters.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Malformed or unrecognized file structure.
    #[error("format error: {0}")]
    Format(String),
    /// Shape or port-count precondition violated.
    #[error("dimension error: {0}")]
    Dimension(String),
    /// Structurally valid but insufficient data for the computation.
    #[error("data error: {0}")]
    Data(String),
    /// Underlying file I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NetworkError {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub(crate) fn dimension(msg: impl Into<String>) -> Self {
        Self::Dimension(msg.into())
    }

    pub(crate) fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, NetworkError>;
