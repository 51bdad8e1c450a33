//! Absent input, empty stores and the ingestion boundary.

use super::common::sample_store;
use menurank::{ingest, IngestRecord, IngestReport, Item, ItemStore, RetrievalService};

#[test]
fn test_missing_partition_is_empty() {
    let store = sample_store();
    assert!(store.partition("Breakfast").is_empty());
}

#[test]
fn test_empty_store_answers_everything() {
    let store = ItemStore::new();
    let service = RetrievalService::from_store(&store);

    assert!(store.all_items().is_empty());
    assert!(store.partition("Lunch").is_empty());
    assert!(store.items_by_category("Vegan").is_empty());
    assert!(store.compute_top_k(5).is_empty());
    assert!(store.top_item().is_none());
    assert!(store.headline(None).is_none());
    assert!(service.search_by_prefix("").is_empty());
}

#[test]
fn test_reindex_skips_absent_name_and_null_slot() {
    let mut store = ItemStore::new();
    let report = ingest(
        &mut store,
        vec![
            IngestRecord::new("Lunch", Item::new("Shawarma", ["Halal"])),
            IngestRecord::new("Lunch", Item::unnamed(["Vegan"])),
            IngestRecord::new("Lunch", None),
            IngestRecord::new("Dinner", Item::new("Salad", ["Vegan"])),
        ],
    );
    assert_eq!(
        report,
        IngestReport {
            added: 3,
            skipped_slots: 1
        }
    );

    let service = RetrievalService::from_store(&store);
    assert_eq!(service.indexed_count(), 2);
    assert_eq!(service.search_by_prefix("").len(), 2);

    // The unnamed item is still stored and still filterable
    assert_eq!(store.items_by_category("vegan").len(), 2);
}

#[test]
fn test_partition_reads_are_copies() {
    let store = sample_store();
    let mut lunch = store.partition("lunch");
    lunch.reverse();
    lunch.pop();
    assert_eq!(store.partition("lunch").len(), 2);
    assert_eq!(store.partition("lunch")[0].name(), Some("Shawarma"));
}

#[test]
fn test_same_item_in_two_partitions() {
    let mut store = ItemStore::new();
    let soup = store.add_item("Lunch", Item::new("Soup", ["Vegan"]));
    store.link_item("Dinner", soup);

    store.up_vote(soup);
    assert_eq!(store.partition("lunch")[0].score(), 1);
    assert_eq!(store.partition("dinner")[0].score(), 1);
    // Both slots compete in the leaderboard
    assert_eq!(store.compute_top_k(5).len(), 2);

    // but the index holds it once
    let service = RetrievalService::from_store(&store);
    assert_eq!(service.search_by_prefix("so").len(), 1);
}
