//! Mapping - key/value collection with an explicit key comparer

use std::collections::hash_map::{self, Entry, HashMap};
use std::fmt;

use ahash::RandomState;

use super::comparer::{KeyComparer, Ordinal};

/// Key/value collection whose key equality is defined by `C`.
///
/// Entries are indexed by the comparer's canonical form of the key while the
/// key as first inserted is kept for iteration. Inserting a key equal to an
/// existing one replaces the value and leaves the stored key untouched.
/// Iteration order is unspecified.
pub struct Mapping<K, V, C = Ordinal>
where
    C: KeyComparer<K>,
{
    entries: HashMap<C::Canonical, (K, V), RandomState>,
    comparer: C,
}

impl<K, V, C> Mapping<K, V, C>
where
    C: KeyComparer<K>,
{
    /// Create an empty mapping using the default comparer
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::with_comparer(C::default())
    }

    pub fn with_comparer(comparer: C) -> Self {
        Self::with_capacity_and_comparer(0, comparer)
    }

    pub fn with_capacity_and_comparer(capacity: usize, comparer: C) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            comparer,
        }
    }

    /// The key equality policy of this mapping
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or overwrite a value, returning the previous one.
    ///
    /// On overwrite the originally stored key is kept and `key` is dropped.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entries.entry(self.comparer.canonical(&key)) {
            Entry::Occupied(mut slot) => Some(std::mem::replace(&mut slot.get_mut().1, value)),
            Entry::Vacant(slot) => {
                slot.insert((key, value));
                None
            }
        }
    }

    /// Insert a copy of `key`/`value`, or replace the existing value with
    /// `resolve(existing, value)`. Returns true on collision.
    pub(crate) fn upsert_with<F>(&mut self, key: &K, value: &V, resolve: &mut F) -> bool
    where
        K: Clone,
        V: Clone,
        F: FnMut(&V, &V) -> V,
    {
        match self.entries.entry(self.comparer.canonical(key)) {
            Entry::Occupied(mut slot) => {
                let resolved = resolve(&slot.get().1, value);
                slot.get_mut().1 = resolved;
                true
            }
            Entry::Vacant(slot) => {
                slot.insert((key.clone(), value.clone()));
                false
            }
        }
    }

    /// Look up a value by any key form the comparer understands
    /// (`&str` for `String` keys).
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized,
        C: KeyComparer<Q, Canonical = <C as KeyComparer<K>>::Canonical>,
    {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Look up the stored key and its value
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: ?Sized,
        C: KeyComparer<Q, Canonical = <C as KeyComparer<K>>::Canonical>,
    {
        let canonical = <C as KeyComparer<Q>>::canonical(&self.comparer, key);
        self.entries.get(&canonical).map(|(k, v)| (k, v))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        C: KeyComparer<Q, Canonical = <C as KeyComparer<K>>::Canonical>,
    {
        self.get_key_value(key).is_some()
    }

    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            inner: self.entries.values(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

impl<K, V, C> Default for Mapping<K, V, C>
where
    C: KeyComparer<K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Clone for Mapping<K, V, C>
where
    K: Clone,
    V: Clone,
    C: KeyComparer<K> + Clone,
    C::Canonical: Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            comparer: self.comparer.clone(),
        }
    }
}

impl<K, V, C> fmt::Debug for Mapping<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: KeyComparer<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Content equality under the comparer: same canonical keys, equal values.
/// The stored form of each key is not compared.
impl<K, V, C> PartialEq for Mapping<K, V, C>
where
    V: PartialEq,
    C: KeyComparer<K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.entries.iter().all(|(canonical, (_, value))| {
                other
                    .entries
                    .get(canonical)
                    .is_some_and(|(_, other_value)| other_value == value)
            })
    }
}

impl<K, V, C> Extend<(K, V)> for Mapping<K, V, C>
where
    C: KeyComparer<K>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C> FromIterator<(K, V)> for Mapping<K, V, C>
where
    C: KeyComparer<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iter);
        mapping
    }
}

/// A plain `HashMap` carries no comparer and converts with [`Ordinal`].
impl<K, V, S> From<HashMap<K, V, S>> for Mapping<K, V, Ordinal>
where
    Ordinal: KeyComparer<K>,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        let mut mapping = Self::with_capacity_and_comparer(map.len(), Ordinal);
        mapping.extend(map);
        mapping
    }
}

/// Borrowing iterator over `(&K, &V)`
pub struct Iter<'a, K, V, C>
where
    C: KeyComparer<K>,
{
    inner: hash_map::Values<'a, C::Canonical, (K, V)>,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C>
where
    C: KeyComparer<K>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> where C: KeyComparer<K> {}

/// Owning iterator over `(K, V)`
pub struct IntoIter<K, V, C>
where
    C: KeyComparer<K>,
{
    inner: hash_map::IntoValues<C::Canonical, (K, V)>,
}

impl<K, V, C> Iterator for IntoIter<K, V, C>
where
    C: KeyComparer<K>,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V, C> IntoIterator for &'a Mapping<K, V, C>
where
    C: KeyComparer<K>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for Mapping<K, V, C>
where
    C: KeyComparer<K>,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_values(),
        }
    }
}
