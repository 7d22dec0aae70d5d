//! Stable key-based sort operators.
//!
//! Both directions copy the input and sort the copy with a stable sort, so
//! elements whose keys compare equal keep their original relative order.
//! Descending order reverses the key comparison, never the tie order:
//! `sort_descending` is only `reverse(sort_ascending)` when no keys tie.

use std::cmp::{Ordering, Reverse};

/// Stable sort of a copy of `seq` by `key` ascending.
pub fn sort_ascending<T, K, F>(seq: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut out = seq.to_vec();
    out.sort_by_key(|e| key(e));

    #[cfg(feature = "tracing")]
    tracing::trace!(op = "sort_ascending", input = seq.len(), "operator evaluated");

    out
}

/// Stable sort of a copy of `seq` by `key` descending. Ties keep input order.
pub fn sort_descending<T, K, F>(seq: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut out = seq.to_vec();
    out.sort_by_key(|e| Reverse(key(e)));

    #[cfg(feature = "tracing")]
    tracing::trace!(op = "sort_descending", input = seq.len(), "operator evaluated");

    out
}

/// Stable sort of a copy of `seq` by the comparator `cmp`, ascending.
///
/// Use this over `sort_ascending` when the key would have to be allocated,
/// e.g. comparing `String` fields by reference.
pub fn sort_ascending_by<T, F>(seq: &[T], mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = seq.to_vec();
    out.sort_by(|a, b| cmp(a, b));

    #[cfg(feature = "tracing")]
    tracing::trace!(op = "sort_ascending_by", input = seq.len(), "operator evaluated");

    out
}

/// Stable sort of a copy of `seq` by the comparator `cmp`, descending.
/// Ties keep input order.
pub fn sort_descending_by<T, F>(seq: &[T], mut cmp: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = seq.to_vec();
    out.sort_by(|a, b| cmp(b, a));

    #[cfg(feature = "tracing")]
    tracing::trace!(op = "sort_descending_by", input = seq.len(), "operator evaluated");

    out
}
