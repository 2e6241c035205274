//! Common error type for extkit consumers.

use thiserror::Error;

/// Top-level extkit error.
#[derive(Error, Debug)]
pub enum Error {
    /// Error raised by a core helper
    #[error(transparent)]
    Core(#[from] extkit_core::Error),

    /// Configuration document could not be parsed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using extkit Error.
pub type Result<T> = std::result::Result<T, Error>;
