//! Fluent composition of the operators.
//!
//! `Query` holds borrowed references into the caller's slice, so chaining
//! `filter`/`sort_*` never clones records. Every step delegates to the free
//! operator functions and therefore has exactly their semantics.
//!
//! ```
//! use quarry_operators::AsQuery;
//!
//! let prices = [18, 10, 30, 22];
//! let cheap: Vec<i32> = prices
//!     .query()
//!     .filter(|p| *p < 25)
//!     .sort_descending(|p| *p)
//!     .project(|p| *p);
//! assert_eq!(cheap, vec![22, 18, 10]);
//! ```

use std::cmp::Ordering;

use crate::{filter, find, project, quantify, sort};

#[derive(Debug)]
pub struct Query<'a, T> {
    items: Vec<&'a T>,
}

impl<'a, T> Clone for Query<'a, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<'a, T> Query<'a, T> {
    pub fn new(seq: &'a [T]) -> Self {
        Self {
            items: seq.iter().collect(),
        }
    }

    /// Keep the elements satisfying `predicate`, in order.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self {
            items: filter::filter(&self.items, |e: &&'a T| predicate(*e)),
        }
    }

    /// Stable ascending sort by `key`.
    pub fn sort_ascending<K, F>(&self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        Self {
            items: sort::sort_ascending(&self.items, |e: &&'a T| key(*e)),
        }
    }

    /// Stable descending sort by `key`; ties keep their current order.
    pub fn sort_descending<K, F>(&self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        Self {
            items: sort::sort_descending(&self.items, |e: &&'a T| key(*e)),
        }
    }

    /// Stable ascending sort by comparator, for keys that are cheaper to borrow than to build.
    pub fn sort_ascending_by<F>(&self, mut cmp: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        Self {
            items: sort::sort_ascending_by(&self.items, |a: &&'a T, b: &&'a T| cmp(*a, *b)),
        }
    }

    /// Stable descending sort by comparator; ties keep their current order.
    pub fn sort_descending_by<F>(&self, mut cmp: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        Self {
            items: sort::sort_descending_by(&self.items, |a: &&'a T, b: &&'a T| cmp(*a, *b)),
        }
    }

    pub fn project<K, F>(&self, mut selector: F) -> Vec<K>
    where
        F: FnMut(&T) -> K,
    {
        project::project(&self.items, |e: &&'a T| selector(*e))
    }

    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        quantify::any(&self.items, |e: &&'a T| predicate(*e))
    }

    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        quantify::all(&self.items, |e: &&'a T| predicate(*e))
    }

    /// First element satisfying `predicate`, borrowed from the source slice.
    pub fn first_match<P>(&self, mut predicate: P) -> Option<&'a T>
    where
        P: FnMut(&T) -> bool,
    {
        find::first_match(&self.items, |e: &&'a T| predicate(*e)).copied()
    }

    /// Last element satisfying `predicate`, found by a single forward scan.
    pub fn last_match<P>(&self, mut predicate: P) -> Option<&'a T>
    where
        P: FnMut(&T) -> bool,
    {
        find::last_match(&self.items, |e: &&'a T| predicate(*e)).copied()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }

    pub fn into_refs(self) -> Vec<&'a T> {
        self.items
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().map(|e| (*e).clone()).collect()
    }
}

impl<'a, T> From<&'a [T]> for Query<'a, T> {
    fn from(seq: &'a [T]) -> Self {
        Self::new(seq)
    }
}

/// Start a `Query` from a borrowed sequence.
pub trait AsQuery<T> {
    fn query(&self) -> Query<'_, T>;
}

impl<T> AsQuery<T> for [T] {
    fn query(&self) -> Query<'_, T> {
        Query::new(self)
    }
}
