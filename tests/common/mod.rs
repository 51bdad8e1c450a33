//! Shared test utilities and fixtures.

#![allow(dead_code)]

use menurank::{ItemStore, MenuSnapshot};

// Re-export canonical test utilities from menurank::testing
pub use menurank::testing::{make_item, names, sample_store, sorted_names, store_from_rows};

// ============================================================================
// SNAPSHOT FIXTURES
// ============================================================================

/// A messy day: repeated dishes, an unnamed item, a null slot, raw labels.
pub const MESSY_MENU: &str = r#"{
  "partitions": [
    {
      "name": "Lunch",
      "items": [
        { "name": "Shawarma", "categories": ["Halal"], "labels": ["gluten free icon"] },
        { "name": "Veggie Wrap", "labels": ["Vegetarian option"] },
        { "name": null, "categories": ["Vegan"] },
        null,
        { "name": "Soup", "categories": ["Halal"], "score": 2 }
      ]
    },
    {
      "name": "dinner",
      "items": [
        { "name": "Salad", "categories": ["Vegetarian", "Vegan"] },
        { "name": "veggie-wrap", "categories": ["Vegetarian"], "score": 9 },
        { "name": "SOUP", "categories": ["Vegan"] }
      ]
    }
  ]
}"#;

/// Store built from [`MESSY_MENU`].
pub fn messy_store() -> ItemStore {
    let snapshot = MenuSnapshot::from_json(MESSY_MENU).expect("fixture parses");
    snapshot.into_store().0
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert `items` is ordered best-first: score desc, then name asc.
pub fn assert_ranked(items: &[&menurank::Item]) {
    for (i, pair) in items.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            a.score() > b.score()
                || (a.score() == b.score() && a.name_or_empty() <= b.name_or_empty()),
            "rank {} ({:?}, {}) should not precede rank {} ({:?}, {})",
            i + 1,
            a.name(),
            a.score(),
            i + 2,
            b.name(),
            b.score()
        );
    }
}
