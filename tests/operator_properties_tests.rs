//! Property tests for the operator laws.

mod test_data_gen;

use proptest::prelude::*;
use quarry_operators::{
    all, any, filter, first_match, last_match, project, sort_ascending, sort_descending,
};

/// (key, original position). Small key range forces ties.
fn tagged(keys: &[u8]) -> Vec<(u8, usize)> {
    keys.iter().copied().enumerate().map(|(i, k)| (k, i)).collect()
}

fn sorted_multiset(mut v: Vec<(u8, usize)>) -> Vec<(u8, usize)> {
    v.sort();
    v
}

proptest! {
    #[test]
    fn filter_is_ordered_exact_selection(keys in prop::collection::vec(0u8..10, 0..64), cut in 0u8..10) {
        let seq = tagged(&keys);
        let out = filter(&seq, |(k, _)| *k < cut);

        prop_assert!(out.iter().all(|(k, _)| *k < cut));
        prop_assert!(out.windows(2).all(|w| w[0].1 < w[1].1));
        let expected = seq.iter().filter(|(k, _)| *k < cut).count();
        prop_assert_eq!(out.len(), expected);
    }

    #[test]
    fn project_preserves_length(keys in prop::collection::vec(prop::num::u8::ANY, 0..64)) {
        prop_assert_eq!(project(&keys, |k| u32::from(*k) * 3).len(), keys.len());
    }

    #[test]
    fn sorts_preserve_multiset_and_are_stable(keys in prop::collection::vec(0u8..6, 0..64)) {
        let seq = tagged(&keys);
        let asc = sort_ascending(&seq, |(k, _)| *k);
        let desc = sort_descending(&seq, |(k, _)| *k);

        prop_assert_eq!(sorted_multiset(asc.clone()), sorted_multiset(seq.clone()));
        prop_assert_eq!(sorted_multiset(desc.clone()), sorted_multiset(seq.clone()));

        for w in asc.windows(2) {
            prop_assert!(w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1));
        }
        for w in desc.windows(2) {
            prop_assert!(w[0].0 > w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1));
        }
    }

    #[test]
    fn descending_is_reversed_ascending_without_ties(keys in prop::collection::btree_set(prop::num::u8::ANY, 0..64)) {
        // distinct keys, shuffled deterministically by position parity
        let mut ks: Vec<u8> = keys.into_iter().collect();
        ks.sort_by_key(|k| (k % 2, *k));
        let seq = tagged(&ks);
        let mut asc = sort_ascending(&seq, |(k, _)| *k);
        asc.reverse();
        prop_assert_eq!(sort_descending(&seq, |(k, _)| *k), asc);
    }

    #[test]
    fn quantifiers_agree_with_filter(keys in prop::collection::vec(0u8..10, 0..64), cut in 0u8..10) {
        let matched = filter(&keys, |k| *k >= cut).len();
        prop_assert_eq!(any(&keys, |k| *k >= cut), matched > 0);
        prop_assert_eq!(all(&keys, |k| *k >= cut), matched == keys.len());
    }

    #[test]
    fn first_and_last_bracket_the_filter(keys in prop::collection::vec(0u8..10, 0..64), cut in 0u8..10) {
        let seq = tagged(&keys);
        let matches = filter(&seq, |(k, _)| *k == cut);
        prop_assert_eq!(first_match(&seq, |(k, _)| *k == cut), matches.first());
        prop_assert_eq!(last_match(&seq, |(k, _)| *k == cut), matches.last());
        if matches.len() == 1 {
            prop_assert_eq!(first_match(&seq, |(k, _)| *k == cut), last_match(&seq, |(k, _)| *k == cut));
        }
    }
}

#[test]
fn test_empty_sequence_conventions() {
    let empty: Vec<u8> = Vec::new();
    assert!(all(&empty, |_| false));
    assert!(!any(&empty, |_| true));
    assert_eq!(first_match(&empty, |_| true), None);
    assert_eq!(last_match(&empty, |_| true), None);
    assert!(filter(&empty, |_| true).is_empty());
    assert!(project(&empty, |k| *k).is_empty());
}

#[test]
fn test_generated_catalog_sorts_stably() {
    let products = test_data_gen::generate_products(500, 7);
    let sorted = sort_descending(&products, |p| p.price);
    for w in sorted.windows(2) {
        assert!(w[0].price > w[1].price || (w[0].price == w[1].price && w[0].id < w[1].id));
    }
}
