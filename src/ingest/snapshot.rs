// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Menu snapshots on disk.
//!
//! A snapshot is whatever the scraper (or a human) wrote down about today's menu:
//!
//! ```json
//! {
//!   "partitions": [
//!     {
//!       "name": "Lunch",
//!       "items": [
//!         { "name": "Shawarma", "categories": ["Halal"], "labels": ["gluten free icon"] },
//!         { "name": null, "categories": ["Vegan"] },
//!         null
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Names may be null or missing, item slots may be null. Neither is an error here;
//! the store and the indexer decide what to do with them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::labels::category_from_label;
use super::{ingest, IngestRecord, IngestReport};
use crate::error::SnapshotError;
use crate::scoring::{RankingPolicy, ScoreThenName};
use crate::store::ItemStore;
use crate::types::Item;

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct MenuSnapshot {
    #[serde(default)]
    pub partitions: Vec<PartitionRecord>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct PartitionRecord {
    pub name: String,
    #[serde(default)]
    pub items: Vec<Option<ItemRecord>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct ItemRecord {
    #[serde(default)]
    pub name: Option<String>,
    /// Tags already in canonical form.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Raw label text, mapped through `category_from_label`.
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub score: i64,
}

impl ItemRecord {
    /// Build the item, appending mapped label tags that aren't already present.
    pub fn into_item(self) -> Item {
        let mut item = match self.name {
            Some(name) => Item::new(name, self.categories),
            None => Item::unnamed(self.categories),
        };
        for tag in self.labels.iter().filter_map(|label| category_from_label(label)) {
            item.push_category(tag.to_string());
        }
        item.with_score(self.score)
    }
}

impl MenuSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json(&raw)?;
        tracing::debug!(
            path = %path.display(),
            partitions = snapshot.partitions.len(),
            "loaded menu snapshot"
        );
        Ok(snapshot)
    }

    /// Flatten into `(partition, item)` ingestion pairs, keeping null slots.
    pub fn records(self) -> Vec<IngestRecord> {
        self.partitions
            .into_iter()
            .flat_map(|partition| {
                let key = partition.name;
                partition.items.into_iter().map(move |slot| IngestRecord {
                    partition: key.clone(),
                    item: slot.map(ItemRecord::into_item),
                })
            })
            .collect()
    }

    /// Populate a fresh [`ScoreThenName`] store.
    pub fn into_store(self) -> (ItemStore, IngestReport) {
        self.into_store_with_policy(ScoreThenName)
    }

    pub fn into_store_with_policy<P: RankingPolicy>(self, policy: P) -> (ItemStore<P>, IngestReport) {
        let mut store = ItemStore::with_policy(policy);
        let report = ingest(&mut store, self.records());
        (store, report)
    }
}
