//! Top-K against a full sort.

use std::cmp::Reverse;

use super::common::assert_ranked;
use super::strategies::{build_store, rows_strategy};
use proptest::prelude::*;

proptest! {
    /// Top-K equals the head of a full (score desc, name asc) sort.
    #[test]
    fn prop_top_k_matches_full_sort(rows in rows_strategy(), k in 0usize..40) {
        let store = build_store(&rows);

        let mut oracle: Vec<(Reverse<i64>, String)> = store
            .all_items()
            .iter()
            .map(|item| (Reverse(item.score()), item.name_or_empty().to_string()))
            .collect();
        oracle.sort();
        oracle.truncate(k);

        let top: Vec<(Reverse<i64>, String)> = store
            .compute_top_k(k)
            .iter()
            .map(|item| (Reverse(item.score()), item.name_or_empty().to_string()))
            .collect();

        prop_assert_eq!(top, oracle);
    }

    /// Consecutive pairs respect the ranking.
    #[test]
    fn prop_top_k_is_ordered(rows in rows_strategy(), k in 0usize..40) {
        let store = build_store(&rows);
        let top = store.compute_top_k(k);
        prop_assert_eq!(top.len(), k.min(store.len()));
        assert_ranked(&top);
    }

    /// The cache is exactly the last computed list, even after votes.
    #[test]
    fn prop_cache_holds_last_result(rows in rows_strategy(), k in 1usize..10, votes in 0usize..20) {
        let store = build_store(&rows);
        let computed: Vec<*const menurank::Item> =
            store.compute_top_k(k).into_iter().map(|i| i as *const _).collect();

        let all = store.all_items();
        for (i, item) in all.iter().enumerate().take(votes) {
            if i % 2 == 0 { item.up_vote() } else { item.down_vote() }
        }

        let cached: Vec<*const menurank::Item> =
            store.top_k_cache().into_iter().map(|i| i as *const _).collect();
        prop_assert_eq!(computed, cached);
    }

    /// A scoped top item never beats the global leader.
    #[test]
    fn prop_category_top_is_bounded(rows in rows_strategy()) {
        let store = build_store(&rows);
        if let (Some(scoped), Some(global)) = (
            store.top_item_in_category("vegetarian"),
            store.compute_top_k(1).first().copied(),
        ) {
            prop_assert!(scoped.score() <= global.score());
        }
    }
}
