//! Project operator.

/// `selector(e)` for each element, in order. The output always has `seq.len()` items.
pub fn project<T, K, F>(seq: &[T], selector: F) -> Vec<K>
where
    F: FnMut(&T) -> K,
{
    let out: Vec<K> = seq.iter().map(selector).collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(op = "project", input = seq.len(), "operator evaluated");

    out
}

#[cfg(test)]
mod tests {
    use super::project;

    #[test]
    fn maps_each_element_in_order() {
        let seq = [(1, "a"), (2, "b"), (3, "c")];
        assert_eq!(project(&seq, |(_, s)| *s), vec!["a", "b", "c"]);
    }

    #[test]
    fn length_is_preserved_even_for_duplicates() {
        let seq = [7, 7, 7, 1];
        let out = project(&seq, |_| ());
        assert_eq!(out.len(), seq.len());
    }

    #[test]
    fn empty_input_projects_to_empty() {
        let empty: [i32; 0] = [];
        assert!(project(&empty, |x| x * 2).is_empty());
    }
}
