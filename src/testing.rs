// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::store::ItemStore;
use crate::types::Item;

/// Create a scored test item.
pub fn make_item(name: &str, categories: &[&str], score: i64) -> Item {
    Item::new(name, categories.iter().copied()).with_score(score)
}

/// The three-dish menu used throughout the test suite.
///
/// | Partition | Item     | Categories          |
/// |-----------|----------|---------------------|
/// | LUNCH     | Shawarma | Halal, Gluten-Free  |
/// | LUNCH     | Piza     | Vegetarian          |
/// | DINNER    | Salad    | Vegetarian, Vegan   |
///
/// All scores start at 0. Partition keys are added as "Lunch" and "dinner" to
/// exercise case normalization.
pub fn sample_store() -> ItemStore {
    let mut store = ItemStore::new();
    store.add_item("Lunch", make_item("Shawarma", &["Halal", "Gluten-Free"], 0));
    store.add_item("Lunch", make_item("Piza", &["Vegetarian"], 0));
    store.add_item("dinner", make_item("Salad", &["Vegetarian", "Vegan"], 0));
    store
}

/// Build a store from `(partition, name, score)` rows with no categories.
pub fn store_from_rows(rows: &[(&str, &str, i64)]) -> ItemStore {
    let mut store = ItemStore::new();
    for &(partition, name, score) in rows {
        store.add_item(partition, make_item(name, &[], score));
    }
    store
}

/// Names of `items`, in order.
pub fn names(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.name_or_empty().to_string()).collect()
}

/// Names of `items`, sorted. For results whose order is unspecified.
pub fn sorted_names(items: &[&Item]) -> Vec<String> {
    let mut names = names(items);
    names.sort();
    names
}
