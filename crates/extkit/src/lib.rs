//! # extkit
//!
//! Shared entry point for extkit consumers:
//! - **core**: everything from `extkit-core`, re-exported at the crate root
//! - **config**: serde-backed configuration with validation
//! - **error**: top-level error type
//! - **tracing**: subscriber setup driven by `RUST_LOG`
//!
//! ## Usage
//!
//! ```rust
//! use extkit::{Config, StrExt};
//!
//! let config = Config::from_json(r#"{"matcher": {"threshold": 80, "ignore_case": true}}"#).unwrap();
//! let matcher = config.matcher().unwrap();
//! assert!(matcher.is_match("DOUGLAS", "douglas"));
//! assert!("  ".is_blank());
//! ```

pub mod config;
pub mod error;
pub mod tracing;

pub use extkit_core::*;

pub use config::Config;
pub use error::{Error, Result};
