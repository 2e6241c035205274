//! Edit distance and similarity scoring
//!
//! - `levenshtein` - classic dynamic-programming edit distance and the
//!   percentage similarity derived from it
//! - `matcher` - configurable approximate matcher that ranks candidates
//!
//! # Example
//!
//! ```rust
//! use extkit_core::distance::{distance, similarity_score};
//!
//! assert_eq!(distance("Some", "Saco"), 3);
//! assert_eq!(similarity_score("Some", "Somo"), 75.0);
//! ```

mod levenshtein;
mod matcher;

pub use levenshtein::{distance, is_approximately_equal, similarity_score};
pub use matcher::{ApproxMatcher, MatchConfig, Metric, RankedMatch};
