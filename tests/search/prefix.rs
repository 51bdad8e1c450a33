//! Prefix retrieval through RetrievalService.

use super::common::{messy_store, sample_store, sorted_names};
use menurank::{Item, ItemStore, PrefixIndex, RetrievalService};

// ============================================================================
// SOUNDNESS AND COMPLETENESS
// ============================================================================

#[test]
fn test_prefix_queries_on_sample_menu() {
    let store = sample_store();
    let service = RetrievalService::from_store(&store);

    assert_eq!(sorted_names(&service.search_by_prefix("sha")), ["Shawarma"]);
    assert_eq!(sorted_names(&service.search_by_prefix("s")), ["Salad", "Shawarma"]);
    assert_eq!(
        sorted_names(&service.search_by_prefix("")),
        ["Piza", "Salad", "Shawarma"]
    );
    assert!(service.search_by_prefix(None).is_empty());
}

#[test]
fn test_every_prefix_finds_its_item() {
    let store = sample_store();
    let service = RetrievalService::from_store(&store);

    for name in ["shawarma", "piza", "salad"] {
        for end in 0..=name.len() {
            let hits = service.search_by_prefix(&name[..end]);
            assert!(
                hits.iter().any(|item| item.name_or_empty().to_lowercase() == name),
                "prefix {:?} should find {:?}",
                &name[..end],
                name
            );
        }
    }
}

#[test]
fn test_non_prefix_excludes_item() {
    let store = sample_store();
    let service = RetrievalService::from_store(&store);

    // Substrings that aren't prefixes
    assert!(service.search_by_prefix("warma").is_empty());
    assert!(service.search_by_prefix("alad").is_empty());
    // Overlong
    assert!(service.search_by_prefix("shawarmas").is_empty());
}

// ============================================================================
// CASE AND NORMALIZATION
// ============================================================================

#[test]
fn test_case_insensitive_queries() {
    let store = sample_store();
    let service = RetrievalService::from_store(&store);

    for (upper, lower) in [("SHA", "sha"), ("S", "s"), ("PiZa", "piza")] {
        assert_eq!(
            sorted_names(&service.search_by_prefix(upper)),
            sorted_names(&service.search_by_prefix(lower))
        );
    }
}

#[test]
fn test_name_index_keeps_dashes() {
    let store = messy_store();
    let service = RetrievalService::from_store(&store);

    // "Veggie Wrap" and "veggie-wrap" differ under name normalization
    assert_eq!(sorted_names(&service.search_by_prefix("veggie ")), ["Veggie Wrap"]);
    assert_eq!(sorted_names(&service.search_by_prefix("veggie-")), ["veggie-wrap"]);
    assert_eq!(service.search_by_prefix("veggie").len(), 2);
}

#[test]
fn test_unicode_names() {
    let mut store = ItemStore::new();
    store.add_item("Lunch", Item::new("Crème Brûlée", ["Vegetarian"]));
    store.add_item("Lunch", Item::new("ÇORBA", ["Halal"]));
    let service = RetrievalService::from_store(&store);

    assert_eq!(sorted_names(&service.search_by_prefix("crè")), ["Crème Brûlée"]);
    assert_eq!(sorted_names(&service.search_by_prefix("ÇOR")), ["ÇORBA"]);
    assert_eq!(sorted_names(&service.search_by_prefix("çor")), ["ÇORBA"]);
}

// ============================================================================
// REINDEX
// ============================================================================

#[test]
fn test_reindex_first_occurrence_wins_across_partitions() {
    let store = messy_store();
    let service = RetrievalService::from_store(&store);

    let soups = service.search_by_prefix("soup");
    assert_eq!(soups.len(), 1);
    // Lunch "Soup" was seen first; dinner "SOUP" with its Vegan tag is dropped
    assert_eq!(soups[0].name(), Some("Soup"));
    assert_eq!(soups[0].categories(), &["Halal"]);
}

#[test]
fn test_reindex_skips_unnamed_items() {
    let store = messy_store();
    let service = RetrievalService::from_store(&store);

    // Shawarma, Veggie Wrap, Soup, Salad, veggie-wrap
    assert_eq!(service.indexed_count(), 5);
    assert!(service
        .search_by_prefix("")
        .iter()
        .all(|item| item.name().is_some()));
}

#[test]
fn test_index_is_a_snapshot() {
    let mut store = sample_store();
    {
        let service = RetrievalService::from_store(&store);
        assert_eq!(service.search_by_prefix("").len(), 3);
    }
    store.add_item("Dinner", Item::new("Stew", ["Halal"]));

    let service = RetrievalService::from_store(&store);
    assert_eq!(sorted_names(&service.search_by_prefix("st")), ["Stew"]);
}

#[test]
fn test_clear_empties_service() {
    let store = sample_store();
    let mut service = RetrievalService::from_store(&store);
    service.clear();
    assert!(service.search_by_prefix("").is_empty());
    assert_eq!(service.indexed_count(), 0);
}

// ============================================================================
// RAW INDEX
// ============================================================================

#[test]
fn test_raw_index_keeps_duplicates() {
    let mut index = PrefixIndex::new();
    index.insert("soup", 1);
    index.insert("soup", 2);
    index.insert("", 0);

    let mut all = index.search("");
    all.sort();
    assert_eq!(all, [0, 1, 2]);

    let mut soups = index.search("soup");
    soups.sort();
    assert_eq!(soups, [1, 2]);
    assert!(index.search("soupy").is_empty());
}
