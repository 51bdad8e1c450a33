//! Repeated queries over unchanged scores must agree.

use super::common::{names, sample_store, store_from_rows};
use menurank::RetrievalService;

#[test]
fn test_tie_break_by_name() {
    let store = sample_store();
    let items = store.all_items();
    items[0].set_score(5); // Shawarma
    items[1].set_score(5); // Piza

    for _ in 0..10 {
        assert_eq!(names(&store.compute_top_k(2)), ["Piza", "Shawarma"]);
    }
}

#[test]
fn test_identical_items_keep_a_stable_order() {
    let store = store_from_rows(&[
        ("Lunch", "Soup", 1),
        ("Lunch", "Soup", 1),
        ("Dinner", "Soup", 1),
        ("Dinner", "Bread", 1),
    ]);

    let first: Vec<*const menurank::Item> =
        store.compute_top_k(4).into_iter().map(|i| i as *const _).collect();
    for _ in 0..10 {
        let again: Vec<*const menurank::Item> =
            store.compute_top_k(4).into_iter().map(|i| i as *const _).collect();
        assert_eq!(first, again);
    }
}

#[test]
fn test_reindex_is_repeatable() {
    let store = sample_store();
    let mut service = RetrievalService::new();

    let first = service.reindex(&store);
    let second = service.reindex(&store);
    assert_eq!(first, second);
    assert_eq!(service.search_by_prefix("").len(), 3);
}

#[cfg(feature = "simulate")]
#[test]
fn test_simulated_leaderboard_is_reproducible() {
    use menurank::simulate_votes;

    let a = sample_store();
    let b = sample_store();
    simulate_votes(&a, 2024);
    simulate_votes(&b, 2024);

    assert_eq!(names(&a.compute_top_k(3)), names(&b.compute_top_k(3)));
}
