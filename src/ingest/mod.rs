// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ingestion: getting menus into a store.
//!
//! The ranking core doesn't parse anything. This module is the boundary where
//! outside data (a JSON snapshot, a scraper's output) becomes `(partition, item)`
//! pairs. The upstream source is unreliable, so the boundary is forgiving: null
//! item slots are counted and dropped, unnamed items are kept for the store to
//! hold and the indexer to skip.

pub mod labels;
pub mod snapshot;

pub use labels::category_from_label;
pub use snapshot::{ItemRecord, MenuSnapshot, PartitionRecord};

use crate::scoring::RankingPolicy;
use crate::store::ItemStore;
use crate::types::Item;

/// One ingestion pair. `item: None` is a null slot from upstream.
#[derive(Debug, Clone)]
pub struct IngestRecord {
    pub partition: String,
    pub item: Option<Item>,
}

impl IngestRecord {
    pub fn new(partition: impl Into<String>, item: impl Into<Option<Item>>) -> Self {
        Self {
            partition: partition.into(),
            item: item.into(),
        }
    }
}

/// What an ingestion pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Records stored.
    pub added: usize,
    /// Null slots dropped.
    pub skipped_slots: usize,
}

/// Add every present record to `store`, in order.
pub fn ingest<P, I>(store: &mut ItemStore<P>, records: I) -> IngestReport
where
    P: RankingPolicy,
    I: IntoIterator<Item = IngestRecord>,
{
    let mut report = IngestReport::default();
    for record in records {
        match record.item {
            Some(item) => {
                store.add_item(&record.partition, item);
                report.added += 1;
            }
            None => {
                tracing::debug!(partition = %record.partition, "skipping empty item slot");
                report.skipped_slots += 1;
            }
        }
    }
    report
}
