//! Configuration for extkit consumers
//!
//! Configuration is a JSON document; every field is optional and falls back
//! to its default. It can be supplied inline or through the `EXTKIT_CONFIG`
//! environment variable.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use extkit_core::distance::{ApproxMatcher, MatchConfig};

/// Environment variable holding a JSON configuration document
pub const CONFIG_ENV: &str = "EXTKIT_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default filter for [`crate::tracing::init_from_config`] when RUST_LOG is unset
    pub log_filter: String,
    /// Approximate matcher settings
    pub matcher: MatchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            matcher: MatchConfig::default(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON configuration document
    pub fn from_json(input: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `EXTKIT_CONFIG`, or the defaults when it is unset or blank
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(raw) if !raw.trim().is_empty() => {
                debug!(var = CONFIG_ENV, "loading configuration from environment");
                Self::from_json(&raw)
            }
            Ok(_) | Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(Error::Config(format!("{}: {}", CONFIG_ENV, e))),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(Error::Config("log_filter must not be empty".to_string()));
        }
        self.matcher.validate()?;
        Ok(())
    }

    /// Build an approximate matcher from the `matcher` section
    pub fn matcher(&self) -> Result<ApproxMatcher> {
        Ok(ApproxMatcher::with_config(self.matcher.clone())?)
    }
}
