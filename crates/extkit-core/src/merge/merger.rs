//! Merge operations over mappings
//!
//! Every merge is a left-to-right fold: the accumulator starts as a copy of
//! the first source and each following source is absorbed in order. A key
//! already present in the accumulator is either overwritten (last write
//! wins) or passed to the caller's resolver as `(existing, incoming)`.

use tracing::{debug, trace};

use super::comparer::KeyComparer;
use super::mapping::Mapping;

/// Last-write-wins resolution
fn overwrite<V: Clone>(_existing: &V, incoming: &V) -> V {
    incoming.clone()
}

/// Fold one source into `target`, returning the number of collisions.
fn absorb<'s, K, V, C, S, F>(target: &mut Mapping<K, V, C>, source: S, resolver: &mut F) -> usize
where
    K: Clone + 's,
    V: Clone + 's,
    C: KeyComparer<K>,
    S: IntoIterator<Item = (&'s K, &'s V)>,
    F: FnMut(&V, &V) -> V,
{
    let mut collisions = 0;
    for (key, value) in source {
        if target.upsert_with(key, value, resolver) {
            collisions += 1;
        }
    }
    collisions
}

/// Merge `right` into a copy of `left`; on collision `right`'s value wins.
///
/// The result inherits `left`'s comparer, so keys equal under it collapse
/// into the key `left` stored. `None` for `right` yields a fresh copy of
/// `left`.
///
/// ```rust
/// use extkit_core::merge::{merge, Mapping};
///
/// let defaults: Mapping<&str, u32> = [("retries", 3), ("timeout", 30)].into_iter().collect();
/// let overrides: Option<Mapping<&str, u32>> = Some([("timeout", 5)].into_iter().collect());
///
/// let settings = merge(&defaults, overrides.as_ref());
/// assert_eq!(settings.get(&"timeout"), Some(&5));
/// assert_eq!(settings.get(&"retries"), Some(&3));
/// ```
pub fn merge<'r, K, V, C, R>(left: &Mapping<K, V, C>, right: Option<R>) -> Mapping<K, V, C>
where
    K: Clone + 'r,
    V: Clone + 'r,
    C: KeyComparer<K> + Clone,
    R: IntoIterator<Item = (&'r K, &'r V)>,
{
    merge_all_with(left, right, overwrite::<V>)
}

/// Merge `left` then `right` into a new mapping keyed by `comparer`.
///
/// The explicit comparer replaces whatever `left` would have provided; use
/// it to merge plain maps case-insensitively. Entries of `left` that collide
/// under the new comparer follow the same last-write-wins rule.
///
/// Sources are absorbed in their own iteration order. When a single
/// unordered source such as a `HashMap` holds several keys that collide
/// under `comparer`, which key is stored and which value survives is
/// unspecified; only the entry count is fixed.
pub fn merge_using<'l, 'r, K, V, C, L, R>(
    comparer: C,
    left: L,
    right: Option<R>,
) -> Mapping<K, V, C>
where
    K: Clone + 'l + 'r,
    V: Clone + 'l + 'r,
    C: KeyComparer<K>,
    L: IntoIterator<Item = (&'l K, &'l V)>,
    R: IntoIterator<Item = (&'r K, &'r V)>,
{
    let mut merged = Mapping::with_comparer(comparer);
    let mut resolver = overwrite::<V>;

    let mut collisions = absorb(&mut merged, left, &mut resolver);
    if let Some(right) = right {
        collisions += absorb(&mut merged, right, &mut resolver);
    }

    debug!(collisions, entries = merged.len(), "merged mappings with explicit comparer");
    merged
}

/// Merge `right` into a copy of `left`, resolving collisions with
/// `resolver(existing, incoming)`.
///
/// The resolver only runs for keys present on both sides; every other
/// value is copied unchanged.
pub fn merge_with<'r, K, V, C, R, F>(
    left: &Mapping<K, V, C>,
    right: Option<R>,
    resolver: F,
) -> Mapping<K, V, C>
where
    K: Clone + 'r,
    V: Clone + 'r,
    C: KeyComparer<K> + Clone,
    R: IntoIterator<Item = (&'r K, &'r V)>,
    F: FnMut(&V, &V) -> V,
{
    merge_all_with(left, right, resolver)
}

/// Fold every mapping of `rights` into a copy of `left`, last write wins.
pub fn merge_all<'r, K, V, C, I, R>(left: &Mapping<K, V, C>, rights: I) -> Mapping<K, V, C>
where
    K: Clone + 'r,
    V: Clone + 'r,
    C: KeyComparer<K> + Clone,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = (&'r K, &'r V)>,
{
    merge_all_with(left, rights, overwrite::<V>)
}

/// Fold every mapping of `rights` into a copy of `left`, resolving each
/// collision against the accumulated value.
///
/// For a key present in sources `s1..sN` the result is
/// `resolver(...resolver(resolver(s1, s2), s3)..., sN)`.
pub fn merge_all_with<'r, K, V, C, I, R, F>(
    left: &Mapping<K, V, C>,
    rights: I,
    mut resolver: F,
) -> Mapping<K, V, C>
where
    K: Clone + 'r,
    V: Clone + 'r,
    C: KeyComparer<K> + Clone,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = (&'r K, &'r V)>,
    F: FnMut(&V, &V) -> V,
{
    let mut merged = Mapping::with_capacity_and_comparer(left.len(), left.comparer().clone());

    // left's keys are already unique under this comparer
    absorb(&mut merged, left, &mut resolver);

    let mut sources = 1usize;
    let mut collisions = 0usize;
    for source in rights {
        let resolved = absorb(&mut merged, source, &mut resolver);
        trace!(source = sources, collisions = resolved, "absorbed mapping");
        collisions += resolved;
        sources += 1;
    }

    debug!(sources, collisions, entries = merged.len(), "merged mappings");
    merged
}
