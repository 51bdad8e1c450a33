// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for prefix retrieval.
//!
//! Arbitrary names go in, arbitrary queries come out. Every hit must really
//! start with the query, and every indexed name must find itself. Multi-byte
//! characters whose lowercase form changes length are where this gets fun.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use menurank::{normalize_name, Item, ItemStore, RetrievalService};

#[derive(Debug, Arbitrary)]
struct Input {
    names: Vec<Option<String>>,
    queries: Vec<String>,
}

fuzz_target!(|input: Input| {
    let mut store = ItemStore::new();
    for (i, name) in input.names.into_iter().take(64).enumerate() {
        let item = match name {
            Some(name) => Item::new(name, ["Tag"]),
            None => Item::unnamed(["Tag"]),
        };
        store.add_item(if i % 2 == 0 { "Lunch" } else { "Dinner" }, item);
    }

    let service = RetrievalService::from_store(&store);

    // Soundness
    for query in input.queries.iter().take(16) {
        let wanted = normalize_name(query);
        for hit in service.search_by_prefix(query.as_str()) {
            assert!(
                normalize_name(hit.name_or_empty()).starts_with(&wanted),
                "{:?} returned for {:?}",
                hit.name(),
                query
            );
        }
    }

    // Completeness
    for item in store.all_items() {
        let Some(name) = item.name().filter(|n| !n.is_empty()) else {
            continue;
        };
        let key = normalize_name(name);
        assert!(
            service
                .search_by_prefix(name)
                .iter()
                .any(|hit| normalize_name(hit.name_or_empty()) == key),
            "{:?} cannot find itself",
            name
        );
    }
});
