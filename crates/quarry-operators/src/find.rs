//! First/last match operators.

/// The first element satisfying `predicate`, or `None`.
pub fn first_match<T, P>(seq: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    let hit = seq.iter().find(|e| predicate(*e));

    #[cfg(feature = "tracing")]
    tracing::trace!(
        op = "first_match",
        input = seq.len(),
        found = hit.is_some(),
        "operator evaluated"
    );

    hit
}

/// The last element satisfying `predicate`, or `None`.
///
/// Uses a single forward scan that keeps the most recent match, so the
/// predicate sees every element exactly once and in order.
pub fn last_match<T, P>(seq: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    let mut hit = None;
    for e in seq {
        if predicate(e) {
            hit = Some(e);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        op = "last_match",
        input = seq.len(),
        found = hit.is_some(),
        "operator evaluated"
    );

    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_pick_ends() {
        let seq = [(1, 'a'), (5, 'b'), (2, 'c'), (6, 'd'), (0, 'e')];
        assert_eq!(first_match(&seq, |(k, _)| *k >= 5), Some(&(5, 'b')));
        assert_eq!(last_match(&seq, |(k, _)| *k >= 5), Some(&(6, 'd')));
    }

    #[test]
    fn absent_when_nothing_matches() {
        let empty: [i32; 0] = [];
        assert_eq!(first_match(&empty, |_| true), None);
        assert_eq!(last_match(&empty, |_| true), None);
        assert_eq!(first_match(&[1, 2], |x| *x > 9), None);
        assert_eq!(last_match(&[1, 2], |x| *x > 9), None);
    }

    #[test]
    fn single_match_is_both_first_and_last() {
        let seq = [1, 2, 3, 4];
        let first = first_match(&seq, |x| *x == 3);
        let last = last_match(&seq, |x| *x == 3);
        assert_eq!(first, Some(&3));
        assert!(std::ptr::eq(first.unwrap(), last.unwrap()));
    }

    #[test]
    fn last_match_visits_in_forward_order() {
        let seq = [10, 20, 30];
        let mut seen = Vec::new();
        let _ = last_match(&seq, |x| {
            seen.push(*x);
            false
        });
        assert_eq!(seen, vec![10, 20, 30]);
    }
}
