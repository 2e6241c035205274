//! extkit Core
//!
//! Stateless helpers for string comparison, mapping merge and iterator
//! filtering. Every operation is a pure function of its inputs.
//!
//! # Modules
//!
//! - `distance` - Levenshtein edit distance, similarity scoring, approximate matcher
//! - `merge` - comparer-aware `Mapping` and last-write-wins / resolver merges
//! - `text` - blank checks, any-prefix/suffix/substring, literal replace-all
//! - `query` - conditional filter adapters and distinct-by
//!
//! # Example
//!
//! ```rust
//! use extkit_core::distance::{distance, is_approximately_equal};
//! use extkit_core::merge::{merge, IgnoreCase, Mapping};
//!
//! assert_eq!(distance("Some", "Somo"), 1);
//! assert!(is_approximately_equal("Douglas", "Douuglas", 75.0));
//!
//! let left: Mapping<String, i32, IgnoreCase> = [("a".to_string(), 1)].into_iter().collect();
//! let right: Mapping<String, i32, IgnoreCase> = [("A".to_string(), 2)].into_iter().collect();
//! let merged = merge(&left, Some(&right));
//! assert_eq!(merged.get("a"), Some(&2));
//! ```

pub mod distance;
pub mod error;
pub mod merge;
pub mod query;
pub mod text;

// Re-export main types at crate root
pub use distance::{
    distance, is_approximately_equal, similarity_score, ApproxMatcher, MatchConfig, Metric,
    RankedMatch,
};
pub use error::{Error, Result};
pub use merge::{
    merge, merge_all, merge_all_with, merge_using, merge_with, IgnoreAsciiCase, IgnoreCase,
    KeyComparer, Mapping, Ordinal,
};
pub use query::{DistinctBy, Filter, Indexed, Plain, QueryExt, WhereIf};
pub use text::{Comparison, OptionStrExt, StrExt};
