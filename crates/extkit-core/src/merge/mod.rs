//! Mapping merge with pluggable key equality and conflict resolution
//!
//! A [`Mapping`] carries its own [`KeyComparer`]. Merging always allocates a
//! new mapping; sources are never mutated.
//!
//! # Comparer resolution
//!
//! 1. An explicit comparer passed to [`merge_using`] wins.
//! 2. Otherwise the result inherits the comparer of `left`.
//! 3. A plain `HashMap` converted with `Mapping::from` uses [`Ordinal`].
//!
//! When two keys are equal under the comparer, the stored form of the key
//! seen first is retained and only the value changes.
//!
//! # Example
//!
//! ```rust
//! use extkit_core::merge::{merge_with, IgnoreCase, Mapping};
//!
//! let mut left = Mapping::with_comparer(IgnoreCase);
//! left.insert("Name".to_string(), "Ada".to_string());
//! let mut right = Mapping::with_comparer(IgnoreCase);
//! right.insert("NAME".to_string(), "Lovelace".to_string());
//!
//! let merged = merge_with(&left, Some(&right), |a, b| format!("{a} {b}"));
//! assert_eq!(merged.get("name").map(String::as_str), Some("Ada Lovelace"));
//! assert_eq!(merged.keys().next().map(String::as_str), Some("Name"));
//! ```

mod comparer;
mod mapping;
mod merger;

pub use comparer::{IgnoreAsciiCase, IgnoreCase, KeyComparer, Ordinal};
pub use mapping::{IntoIter, Iter, Mapping};
pub use merger::{merge, merge_all, merge_all_with, merge_using, merge_with};
