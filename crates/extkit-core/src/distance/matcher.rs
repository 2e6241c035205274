//! ApproxMatcher - configurable approximate string matching
//!
//! Wraps the similarity score with a validated threshold and optional
//! normalisation (trim, case folding), and ranks candidate lists the way a
//! fuzzy vocabulary search does.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::debug;

use super::levenshtein::similarity_score;
use crate::error::{Error, Result};

/// Scoring metric, both scaled to `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Edit distance normalised by the longer length
    #[default]
    Levenshtein,
    /// Jaro-Winkler similarity, favours shared prefixes
    JaroWinkler,
}

/// Matcher configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum similarity (0-100) for a match
    pub threshold: f64,
    /// Lowercase both sides before scoring
    pub ignore_case: bool,
    /// Trim surrounding whitespace before scoring
    pub trim: bool,
    pub metric: Metric,
    /// Maximum results returned by `rank`
    pub max_results: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: 75.0,
            ignore_case: false,
            trim: false,
            metric: Metric::Levenshtein,
            max_results: 20,
        }
    }
}

impl MatchConfig {
    /// Check the threshold range and result limit.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.threshold) {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        if self.max_results == 0 {
            return Err(Error::InvalidMaxResults);
        }
        Ok(())
    }
}

/// A candidate that reached the threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub value: String,
    pub score: f64,
}

/// Approximate matcher over a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct ApproxMatcher {
    config: MatchConfig,
}

impl ApproxMatcher {
    /// Create a matcher with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with a custom configuration, rejecting invalid ones
    pub fn with_config(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    fn normalize<'s>(&self, value: &'s str) -> Cow<'s, str> {
        let value = if self.config.trim { value.trim() } else { value };
        if self.config.ignore_case {
            Cow::Owned(value.to_lowercase())
        } else {
            Cow::Borrowed(value)
        }
    }

    fn score_normalized(&self, a: &str, b: &str) -> f64 {
        match self.config.metric {
            Metric::Levenshtein => similarity_score(a, b),
            Metric::JaroWinkler => jaro_winkler(a, b) * 100.0,
        }
    }

    /// Similarity of `a` and `b` under the configured metric and normalisation
    pub fn score(&self, a: &str, b: &str) -> f64 {
        self.score_normalized(&self.normalize(a), &self.normalize(b))
    }

    /// True when `score(a, b)` reaches the configured threshold
    pub fn is_match(&self, a: &str, b: &str) -> bool {
        self.score(a, b) >= self.config.threshold
    }

    /// Score every candidate against `query` and return those reaching the
    /// threshold, best first (ties ordered by value), at most `max_results`.
    ///
    /// An empty query (after normalisation) matches nothing.
    pub fn rank<I, S>(&self, query: &str, candidates: I) -> Vec<RankedMatch>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let query = self.normalize(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut scanned = 0usize;
        let mut matches: Vec<RankedMatch> = candidates
            .into_iter()
            .filter_map(|candidate| {
                scanned += 1;
                let value = candidate.as_ref();
                let score = self.score_normalized(&query, &self.normalize(value));
                (score >= self.config.threshold).then(|| RankedMatch {
                    value: value.to_string(),
                    score,
                })
            })
            .collect();

        // Sort by score descending, then by value for stability
        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.value.cmp(&b.value))
        });
        matches.truncate(self.config.max_results);

        debug!(
            query = %query,
            scanned,
            matched = matches.len(),
            "ranked candidates"
        );
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<&'static str> {
        vec!["Douglas", "Douuglas", "Dougal", "Duglas", "Margaret"]
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_threshold_out_of_range() {
        let config = MatchConfig {
            threshold: 100.5,
            ..Default::default()
        };
        assert!(matches!(
            ApproxMatcher::with_config(config),
            Err(Error::InvalidThreshold(t)) if t == 100.5
        ));

        let config = MatchConfig {
            threshold: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let config = MatchConfig {
            threshold: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidThreshold(_))));
    }

    #[test]
    fn test_zero_max_results_rejected() {
        let config = MatchConfig {
            max_results: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidMaxResults)));
    }

    #[test]
    fn test_score_matches_similarity() {
        let matcher = ApproxMatcher::new();
        assert_eq!(matcher.score("Some", "Somo"), 75.0);
        assert!(matcher.is_match("Some", "Somo"));
        assert!(!matcher.is_match("Some", "Saco"));
    }

    #[test]
    fn test_ignore_case() {
        let strict = ApproxMatcher::new();
        assert_eq!(strict.score("DOUGLAS", "douglas"), 0.0);

        let folded = ApproxMatcher::with_config(MatchConfig {
            ignore_case: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(folded.score("DOUGLAS", "douglas"), 100.0);
    }

    #[test]
    fn test_trim() {
        let matcher = ApproxMatcher::with_config(MatchConfig {
            trim: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(matcher.score("  Some ", "Some"), 100.0);
    }

    #[test]
    fn test_jaro_winkler_metric() {
        let matcher = ApproxMatcher::with_config(MatchConfig {
            metric: Metric::JaroWinkler,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(matcher.score("Douglas", "Douglas"), 100.0);
        assert!(matcher.score("Douglas", "Douuglas") > 90.0);
        assert!(matcher.score("Douglas", "Margaret") < 75.0);
    }

    #[test]
    fn test_rank_orders_by_score_then_value() {
        let matcher = ApproxMatcher::new();
        let ranked = matcher.rank("Douglas", names());

        let values: Vec<&str> = ranked.iter().map(|m| m.value.as_str()).collect();
        // Dougal is two edits away (71.4) and falls below the threshold
        assert_eq!(values, vec!["Douglas", "Douuglas", "Duglas"]);
        assert_eq!(ranked[0].score, 100.0);
        assert_eq!(ranked[1].score, 87.5);
        assert!((ranked[2].score - 600.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_rank_limit() {
        let matcher = ApproxMatcher::with_config(MatchConfig {
            max_results: 1,
            ..Default::default()
        })
        .unwrap();
        let ranked = matcher.rank("Douglas", names());
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].value, "Douglas");
    }

    #[test]
    fn test_rank_empty_query() {
        let matcher = ApproxMatcher::with_config(MatchConfig {
            trim: true,
            threshold: 0.0,
            ..Default::default()
        })
        .unwrap();
        assert!(matcher.rank("   ", names()).is_empty());
    }

    #[test]
    fn test_rank_owned_candidates() {
        let matcher = ApproxMatcher::new();
        let candidates = vec!["works_at".to_string(), "wroks_at".to_string()];
        let ranked = matcher.rank("works_at", &candidates);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].value, "works_at");
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{"threshold": 60, "metric": "jaro_winkler"}"#).unwrap();
        assert_eq!(config.threshold, 60.0);
        assert_eq!(config.metric, Metric::JaroWinkler);
        assert_eq!(config.max_results, 20);
        assert!(!config.ignore_case);
    }
}
