// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix retrieval over a store snapshot.
//!
//! [`RetrievalService`] owns a [`PrefixIndex`] of borrowed items. The borrow is
//! the point: the index can't outlive the store it was built from, and a vote
//! cast on a search result is a vote on the stored item.
//!
//! # Indexing rule
//!
//! For every partition, for every item with a non-empty name, the key is the
//! lowercased name. The first item per key is indexed; later ones are skipped,
//! even when their tags differ. Unnamed items are skipped silently.

use crate::index::PrefixIndex;
use crate::scoring::RankingPolicy;
use crate::search::dedup::FirstSeen;
use crate::store::ItemStore;
use crate::types::Item;
use crate::utils::normalize_name;

/// Prefix lookup over the items of one [`ItemStore`].
///
/// ```
/// use menurank::{Item, ItemStore, RetrievalService};
///
/// let mut store = ItemStore::new();
/// store.add_item("Lunch", Item::new("Shawarma", ["Halal"]));
/// store.add_item("Dinner", Item::new("Salad", ["Vegan"]));
///
/// let service = RetrievalService::from_store(&store);
/// assert_eq!(service.search_by_prefix("SHA").len(), 1);
/// assert!(service.search_by_prefix(None).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct RetrievalService<'a> {
    index: PrefixIndex<&'a Item>,
}

impl<'a> RetrievalService<'a> {
    /// An empty service. Every search returns `[]` until [`reindex`](Self::reindex).
    pub fn new() -> Self {
        Self {
            index: PrefixIndex::new(),
        }
    }

    /// Build a service indexed from `store`.
    pub fn from_store<P: RankingPolicy>(store: &'a ItemStore<P>) -> Self {
        let mut service = Self::new();
        service.reindex(store);
        service
    }

    /// Discard the current index and rebuild it from `store`.
    ///
    /// Returns the number of items indexed.
    pub fn reindex<P: RankingPolicy>(&mut self, store: &'a ItemStore<P>) -> usize {
        self.index.clear();

        let mut seen = FirstSeen::new();
        let mut skipped = 0usize;
        for (_, items) in store.partitions() {
            for item in items {
                let Some(name) = item.name().filter(|name| !name.is_empty()) else {
                    skipped += 1;
                    continue;
                };
                let key = normalize_name(name);
                if seen.admit(key.clone()) {
                    self.index.insert(&key, item);
                }
            }
        }

        tracing::debug!(
            indexed = self.index.len(),
            unnamed = skipped,
            nodes = self.index.node_count(),
            "rebuilt prefix index"
        );
        self.index.len()
    }

    /// Items whose lowercased name starts with the lowercased `query`.
    ///
    /// `None` returns `[]`; `""` returns every indexed item. Order is
    /// unspecified.
    pub fn search_by_prefix<'q>(&self, query: impl Into<Option<&'q str>>) -> Vec<&'a Item> {
        match query.into() {
            Some(query) => self.index.search(&normalize_name(query)),
            None => Vec::new(),
        }
    }

    /// Number of indexed items.
    pub fn indexed_count(&self) -> usize {
        self.index.len()
    }

    /// Drop the index without rebuilding.
    pub fn clear(&mut self) {
        self.index.clear();
    }
}
