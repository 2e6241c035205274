//! Error types for the fallible helpers

use thiserror::Error;

/// Errors raised by configuration validation and text replacement
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Similarity threshold outside 0..=100 (or NaN)
    #[error("threshold must be within 0..=100, got {0}")]
    InvalidThreshold(f64),

    /// Matcher configured to return no results
    #[error("max_results must be greater than zero")]
    InvalidMaxResults,

    /// Replacement requested for an empty search value
    #[error("search value must not be empty")]
    EmptyPattern,

    /// Search value could not be compiled into a matcher
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for extkit-core operations
pub type Result<T> = std::result::Result<T, Error>;
