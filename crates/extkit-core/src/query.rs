//! Conditional filtering and distinct-by adapters for iterators
//!
//! `where_if` applies a filter only when a condition holds, which keeps
//! optional search criteria out of the call site:
//!
//! ```rust
//! use extkit_core::query::QueryExt;
//!
//! let only_even: Option<bool> = Some(true);
//! let evens: Vec<i32> = (1..=10).where_if(only_even, |n| n % 2 == 0).collect();
//! assert_eq!(evens, vec![2, 4, 6, 8, 10]);
//!
//! let all: Vec<i32> = (1..=3).where_if(false, |n| n % 2 == 0).collect();
//! assert_eq!(all, vec![1, 2, 3]);
//! ```

use std::hash::Hash;

use ahash::AHashSet;

/// A filter over items and their position in the source sequence
pub trait Filter<T> {
    fn accept(&mut self, index: usize, item: &T) -> bool;
}

/// Filter on the item alone
#[derive(Debug, Clone)]
pub struct Plain<F>(pub F);

impl<T, F> Filter<T> for Plain<F>
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn accept(&mut self, _index: usize, item: &T) -> bool {
        (self.0)(item)
    }
}

/// Filter on the source index and the item
#[derive(Debug, Clone)]
pub struct Indexed<F>(pub F);

impl<T, F> Filter<T> for Indexed<F>
where
    F: FnMut(usize, &T) -> bool,
{
    #[inline]
    fn accept(&mut self, index: usize, item: &T) -> bool {
        (self.0)(index, item)
    }
}

#[derive(Debug, Clone)]
enum Branch<P, Q> {
    PassThrough,
    When(P),
    Otherwise(Q),
}

/// Iterator returned by the `where_if*` adapters
#[derive(Debug, Clone)]
pub struct WhereIf<I, P, Q> {
    iter: I,
    index: usize,
    branch: Branch<P, Q>,
}

impl<I, P, Q> Iterator for WhereIf<I, P, Q>
where
    I: Iterator,
    P: Filter<I::Item>,
    Q: Filter<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.iter.by_ref() {
            let index = self.index;
            self.index += 1;

            let keep = match &mut self.branch {
                Branch::PassThrough => true,
                Branch::When(filter) => filter.accept(index, &item),
                Branch::Otherwise(filter) => filter.accept(index, &item),
            };
            if keep {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        match self.branch {
            Branch::PassThrough => (lower, upper),
            _ => (0, upper),
        }
    }
}

/// Iterator returned by [`QueryExt::distinct_by`]
#[derive(Debug, Clone)]
pub struct DistinctBy<I, F, K> {
    iter: I,
    key: F,
    seen: AHashSet<K>,
}

impl<I, F, K> Iterator for DistinctBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let (key, seen) = (&mut self.key, &mut self.seen);
        self.iter.find(|item| seen.insert(key(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Query adapters available on every iterator.
///
/// Conditions take `bool` or `Option<bool>`; `None` counts as false.
pub trait QueryExt: Iterator + Sized {
    /// Keep items matching `predicate` when `condition` holds, otherwise
    /// yield everything.
    fn where_if<F>(
        self,
        condition: impl Into<Option<bool>>,
        predicate: F,
    ) -> WhereIf<Self, Plain<F>, Plain<F>>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.where_if_with(condition, Plain(predicate), None)
    }

    /// Like `where_if`, with the source index passed to the predicate
    fn where_if_indexed<F>(
        self,
        condition: impl Into<Option<bool>>,
        predicate: F,
    ) -> WhereIf<Self, Indexed<F>, Indexed<F>>
    where
        F: FnMut(usize, &Self::Item) -> bool,
    {
        self.where_if_with(condition, Indexed(predicate), None)
    }

    /// Filter with `if_predicate` when `condition` holds, else with
    /// `else_predicate`
    fn where_if_else<F, G>(
        self,
        condition: impl Into<Option<bool>>,
        if_predicate: F,
        else_predicate: G,
    ) -> WhereIf<Self, Plain<F>, Plain<G>>
    where
        F: FnMut(&Self::Item) -> bool,
        G: FnMut(&Self::Item) -> bool,
    {
        self.where_if_with(condition, Plain(if_predicate), Some(Plain(else_predicate)))
    }

    /// General form: any mix of [`Plain`] and [`Indexed`] filters. Without an
    /// `otherwise` filter a false condition passes everything through.
    fn where_if_with<P, Q>(
        self,
        condition: impl Into<Option<bool>>,
        when: P,
        otherwise: Option<Q>,
    ) -> WhereIf<Self, P, Q>
    where
        P: Filter<Self::Item>,
        Q: Filter<Self::Item>,
    {
        let branch = if condition.into().unwrap_or(false) {
            Branch::When(when)
        } else {
            match otherwise {
                Some(filter) => Branch::Otherwise(filter),
                None => Branch::PassThrough,
            }
        };

        WhereIf {
            iter: self,
            index: 0,
            branch,
        }
    }

    /// Yield the first item for each distinct key, in source order
    fn distinct_by<K, F>(self, key: F) -> DistinctBy<Self, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: Hash + Eq,
    {
        DistinctBy {
            iter: self,
            key,
            seen: AHashSet::new(),
        }
    }
}

impl<I: Iterator> QueryExt for I {}
