// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix lookup and score-based ranking for menu items.
//!
//! Two access patterns over one in-memory collection: "what starts with `sha`?"
//! answered by a character trie, and "what are the best five?" answered by a
//! ranking policy over live vote tallies.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────────┐
//! │  types.rs   │────▶│   store.rs   │────▶│  search/retrieval   │
//! │ (Item,      │     │ (ItemStore,  │     │ (RetrievalService)  │
//! │  ItemId)    │     │  top-K)      │     │                     │
//! └─────────────┘     └──────────────┘     └─────────────────────┘
//!        │                   │                        │
//!        ▼                   ▼                        ▼
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────────┐
//! │  scoring/   │     │ search/dedup │     │     index/trie      │
//! │ (Ranking-   │     │ (FirstSeen)  │     │    (PrefixIndex)    │
//! │  Policy)    │     │              │     │                     │
//! └─────────────┘     └──────────────┘     └─────────────────────┘
//! ```
//!
//! `ingest` turns JSON snapshots into store contents; `simulate` casts seeded
//! random votes for demos. Neither is needed to use the core.
//!
//! # Ownership
//!
//! The store owns every [`Item`]. Everything else borrows: query results are
//! `Vec<&Item>`, and the retrieval service's index holds `&'a Item` tied to the
//! store borrow. Scores live in a `Cell`, so a vote through any reference is
//! seen through all of them, and nothing here is `Sync`.
//!
//! # Usage
//!
//! ```
//! use menurank::{Item, ItemStore, RetrievalService};
//!
//! let mut store = ItemStore::new();
//! store.add_item("Lunch", Item::new("Shawarma", ["Halal", "Gluten-Free"]));
//! store.add_item("Lunch", Item::new("Piza", ["Vegetarian"]));
//! store.add_item("Dinner", Item::new("Salad", ["Vegetarian", "Vegan"]));
//!
//! let service = RetrievalService::from_store(&store);
//! let hits = service.search_by_prefix("s");
//! assert_eq!(hits.len(), 2);
//!
//! store.partition("dinner")[0].up_vote();
//! let top = store.compute_top_k(1);
//! assert_eq!(top[0].name(), Some("Salad"));
//! ```

// Module declarations
pub mod error;
mod index;
pub mod ingest;
pub mod scoring;
pub mod search;
#[cfg(feature = "simulate")]
pub mod simulate;
mod store;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use error::SnapshotError;
pub use index::PrefixIndex;
pub use ingest::{category_from_label, ingest, IngestRecord, IngestReport, MenuSnapshot};
pub use scoring::{best_ranked, sort_ranked, RankingPolicy, ScoreThenName};
pub use search::RetrievalService;
#[cfg(feature = "simulate")]
pub use simulate::simulate_votes;
pub use store::{ItemStore, DEFAULT_TOP_K};
pub use types::{Item, ItemId};
pub use utils::{normalize_name, normalize_partition, normalize_tag};
