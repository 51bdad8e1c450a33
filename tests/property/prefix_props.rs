//! Prefix search against a linear-scan oracle.

use std::collections::BTreeSet;

use super::strategies::{build_store, rows_strategy};
use menurank::{normalize_name, RetrievalService};
use proptest::prelude::*;

proptest! {
    /// The set of distinct normalized names found equals a linear scan.
    #[test]
    fn prop_prefix_matches_linear_scan(rows in rows_strategy(), query in "[a-zA-Z -]{0,3}") {
        let store = build_store(&rows);
        let service = RetrievalService::from_store(&store);

        let found: BTreeSet<String> = service
            .search_by_prefix(query.as_str())
            .iter()
            .map(|item| normalize_name(item.name_or_empty()))
            .collect();

        let wanted = normalize_name(&query);
        let expected: BTreeSet<String> = store
            .all_items()
            .iter()
            .filter_map(|item| item.name())
            .filter(|name| !name.is_empty())
            .map(normalize_name)
            .filter(|name| name.starts_with(&wanted))
            .collect();

        prop_assert_eq!(found, expected);
    }

    /// Each normalized name is indexed exactly once.
    #[test]
    fn prop_no_duplicate_keys(rows in rows_strategy()) {
        let store = build_store(&rows);
        let service = RetrievalService::from_store(&store);

        let all = service.search_by_prefix("");
        let distinct: BTreeSet<String> = all
            .iter()
            .map(|item| normalize_name(item.name_or_empty()))
            .collect();
        prop_assert_eq!(all.len(), distinct.len());
        prop_assert_eq!(all.len(), service.indexed_count());
    }

    /// The indexed item for a key is the first one in store order.
    #[test]
    fn prop_first_occurrence_is_indexed(rows in rows_strategy()) {
        let store = build_store(&rows);
        let service = RetrievalService::from_store(&store);

        for hit in service.search_by_prefix("") {
            let key = normalize_name(hit.name_or_empty());
            let first = store
                .all_items()
                .into_iter()
                .find(|item| item.name().map(normalize_name).as_deref() == Some(key.as_str()));
            prop_assert!(first.is_some_and(|first| std::ptr::eq(first, hit)));
        }
    }

    /// Upper- and lowercase queries agree.
    #[test]
    fn prop_query_case_is_ignored(rows in rows_strategy(), query in "[a-z]{0,3}") {
        let store = build_store(&rows);
        let service = RetrievalService::from_store(&store);

        let lower: BTreeSet<*const menurank::Item> = service
            .search_by_prefix(query.as_str())
            .into_iter()
            .map(|i| i as *const _)
            .collect();
        let upper: BTreeSet<*const menurank::Item> = service
            .search_by_prefix(query.to_uppercase().as_str())
            .into_iter()
            .map(|i| i as *const _)
            .collect();
        prop_assert_eq!(lower, upper);
    }
}
