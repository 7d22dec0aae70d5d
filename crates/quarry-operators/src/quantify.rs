//! Existential and universal quantifiers.

/// True iff at least one element satisfies `predicate`. Stops at the first match.
///
/// An empty sequence has no witness, so the answer is `false`.
pub fn any<T, P>(seq: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    let found = seq.iter().any(|e| predicate(e));

    #[cfg(feature = "tracing")]
    tracing::trace!(op = "any", input = seq.len(), result = found, "operator evaluated");

    found
}

/// True iff every element satisfies `predicate`. Stops at the first failure.
///
/// An empty sequence is vacuously true.
pub fn all<T, P>(seq: &[T], mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    let holds = seq.iter().all(|e| predicate(e));

    #[cfg(feature = "tracing")]
    tracing::trace!(op = "all", input = seq.len(), result = holds, "operator evaluated");

    holds
}
