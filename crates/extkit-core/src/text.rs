//! String predicates and replacement helpers

use regex::{NoExpand, RegexBuilder};

use crate::error::{Error, Result};

/// How search values are compared against the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Exact, case-sensitive
    #[default]
    Ordinal,
    /// Unicode case-insensitive
    IgnoreCase,
}

/// Extension methods on `str`
pub trait StrExt {
    /// True when empty or made only of whitespace
    fn is_blank(&self) -> bool;

    /// True when at least one non-whitespace character is present
    fn is_not_blank(&self) -> bool {
        !self.is_blank()
    }

    /// True when the text starts with any of `values`
    fn starts_with_any<I, S>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// True when the text ends with any of `values`
    fn ends_with_any<I, S>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// True when the text contains any of `values`
    fn contains_any<I, S>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// Replace every non-overlapping occurrence of `old` with `new`.
    ///
    /// `old` is matched literally and `new` is inserted verbatim. An empty
    /// `old` is rejected with [`Error::EmptyPattern`].
    fn replace_all(&self, old: &str, new: &str, comparison: Comparison) -> Result<String>;
}

impl StrExt for str {
    fn is_blank(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }

    fn starts_with_any<I, S>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values.into_iter().any(|v| self.starts_with(v.as_ref()))
    }

    fn ends_with_any<I, S>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values.into_iter().any(|v| self.ends_with(v.as_ref()))
    }

    fn contains_any<I, S>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values.into_iter().any(|v| self.contains(v.as_ref()))
    }

    fn replace_all(&self, old: &str, new: &str, comparison: Comparison) -> Result<String> {
        if old.is_empty() {
            return Err(Error::EmptyPattern);
        }

        match comparison {
            Comparison::Ordinal => Ok(self.replace(old, new)),
            Comparison::IgnoreCase => {
                let pattern = RegexBuilder::new(&regex::escape(old))
                    .case_insensitive(true)
                    .build()?;
                Ok(pattern.replace_all(self, NoExpand(new)).into_owned())
            }
        }
    }
}

/// Blank checks for optional strings, where `None` counts as blank
pub trait OptionStrExt {
    fn is_none_or_blank(&self) -> bool;

    fn is_some_and_not_blank(&self) -> bool {
        !self.is_none_or_blank()
    }
}

impl<S: AsRef<str>> OptionStrExt for Option<S> {
    fn is_none_or_blank(&self) -> bool {
        match self {
            Some(value) => value.as_ref().is_blank(),
            None => true,
        }
    }
}
