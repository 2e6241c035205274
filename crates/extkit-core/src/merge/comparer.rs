//! Key equality policies

use std::hash::Hash;

/// Defines key equality for a [`Mapping`](super::Mapping).
///
/// Two keys are equal when their canonical forms are equal. Implementations
/// must produce the same `Canonical` type for an owned key and for its
/// borrowed form (`String` and `str`), which lets lookups take `&str`.
pub trait KeyComparer<Q: ?Sized> {
    type Canonical: Hash + Eq;

    fn canonical(&self, key: &Q) -> Self::Canonical;
}

/// Exact, case-sensitive equality (the default)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ordinal;

impl<Q> KeyComparer<Q> for Ordinal
where
    Q: ?Sized + ToOwned,
    Q::Owned: Hash + Eq,
{
    type Canonical = Q::Owned;

    #[inline]
    fn canonical(&self, key: &Q) -> Q::Owned {
        key.to_owned()
    }
}

/// ASCII case-insensitive equality for string keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreAsciiCase;

impl<Q: ?Sized + AsRef<str>> KeyComparer<Q> for IgnoreAsciiCase {
    type Canonical = String;

    #[inline]
    fn canonical(&self, key: &Q) -> String {
        key.as_ref().to_ascii_lowercase()
    }
}

/// Unicode case-insensitive equality for string keys
///
/// Folds each char on its own (upper then lower), so the result never
/// depends on the char's position. Final and medial sigma compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreCase;

impl<Q: ?Sized + AsRef<str>> KeyComparer<Q> for IgnoreCase {
    type Canonical = String;

    #[inline]
    fn canonical(&self, key: &Q) -> String {
        key.as_ref()
            .chars()
            .flat_map(char::to_uppercase)
            .flat_map(char::to_lowercase)
            .collect()
    }
}
