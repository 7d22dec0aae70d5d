//! Filter operator.

/// Every element of `seq` for which `predicate` holds, in original relative order.
///
/// Empty input or no matches yields an empty `Vec`.
pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let out: Vec<T> = seq.iter().filter(|e| predicate(*e)).cloned().collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(op = "filter", input = seq.len(), output = out.len(), "operator evaluated");

    out
}
