//! Error types for Relay UI core operations.

use thiserror::Error;

/// Core error type for Relay UI operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Index out of bounds.
    #[error("index out of bounds: {index} >= {len}")]
    OutOfBounds {
        /// The attempted index.
        index: usize,
        /// The actual length.
        len: usize,
    },

    /// Invalid dimensions were provided.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// An item identifier was not found.
    #[error("unknown item id: {0}")]
    UnknownItem(String),
}

/// Result type alias using the core [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
