// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The authoritative item collection.
//!
//! [`ItemStore`] owns every item and groups them into partitions (meal types).
//! Everything that reads items borrows them from here: query results, the prefix
//! index, the top-K cache. Nothing hands out the internal partition vectors;
//! every read returns a fresh `Vec<&Item>`, so callers can reorder or truncate
//! what they got without touching the store.
//!
//! # Layout
//!
//! ```text
//! items:      [Shawarma, Piza, Salad]           arena, owns the values
//!                 ▲        ▲      ▲
//! partitions: LUNCH  → [#0, #1]                 insertion-ordered
//!             DINNER → [#2]
//! top_k:      [#2, #0]                          last compute_top_k(2)
//! ```
//!
//! # Top-K cache contract
//!
//! `compute_top_k` does a full re-read of current scores every call and writes
//! the result to the cache. Votes do not touch the cache. After a vote the cache
//! is stale until the caller asks for a recompute; there is no auto-refresh.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::scoring::{best_ranked, sort_ranked, RankingPolicy, ScoreThenName};
use crate::search::dedup::dedup_first;
use crate::types::{Item, ItemId};
use crate::utils::{normalize_partition, normalize_tag};

/// Size of the headline top-K list.
pub const DEFAULT_TOP_K: usize = 5;

#[derive(Debug)]
struct Partition {
    key: String,
    members: Vec<ItemId>,
}

/// Items grouped by partition, with ranked and filtered views.
///
/// ```
/// use menurank::{Item, ItemStore};
///
/// let mut store = ItemStore::new();
/// store.add_item("Lunch", Item::new("Shawarma", ["Halal"]).with_score(4));
/// store.add_item("Lunch", Item::new("Piza", ["Vegetarian"]).with_score(3));
/// store.add_item("dinner", Item::new("Salad", ["Vegetarian"]).with_score(5));
///
/// let top: Vec<_> = store.compute_top_k(2).iter().map(|i| i.to_string()).collect();
/// assert_eq!(top, ["Salad", "Shawarma"]);
/// assert_eq!(store.partition("LUNCH").len(), 2);
/// ```
#[derive(Debug)]
pub struct ItemStore<P = ScoreThenName> {
    items: Vec<Item>,
    partitions: Vec<Partition>,
    lookup: HashMap<String, usize>,
    top_k: RefCell<Vec<ItemId>>,
    policy: P,
}

impl ItemStore<ScoreThenName> {
    /// Empty store ranked by [`ScoreThenName`].
    pub fn new() -> Self {
        Self::with_policy(ScoreThenName)
    }
}

impl Default for ItemStore<ScoreThenName> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: RankingPolicy> ItemStore<P> {
    /// Empty store ranked by `policy`.
    pub fn with_policy(policy: P) -> Self {
        Self {
            items: Vec::new(),
            partitions: Vec::new(),
            lookup: HashMap::new(),
            top_k: RefCell::new(Vec::new()),
            policy,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    // =========================================================================
    // INGESTION
    // =========================================================================

    /// Take ownership of `item` and append it to `partition`.
    ///
    /// The partition key is uppercased, so "Lunch" and "lunch" land together.
    /// No deduplication: adding an equal item twice stores two items.
    pub fn add_item(&mut self, partition: &str, item: Item) -> ItemId {
        let id = ItemId(self.items.len());
        self.items.push(item);
        self.partition_mut(partition).members.push(id);
        id
    }

    /// Append an item this store already owns to another (or the same) partition.
    ///
    /// The partitions then share one value: a vote is visible from both. Returns
    /// `false` and does nothing if `id` was not issued by this store.
    pub fn link_item(&mut self, partition: &str, id: ItemId) -> bool {
        if id.0 >= self.items.len() {
            return false;
        }
        self.partition_mut(partition).members.push(id);
        true
    }

    fn partition_mut(&mut self, key: &str) -> &mut Partition {
        let key = normalize_partition(key);
        let slot = match self.lookup.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.partitions.len();
                self.lookup.insert(key.clone(), slot);
                self.partitions.push(Partition {
                    key,
                    members: Vec::new(),
                });
                slot
            }
        };
        &mut self.partitions[slot]
    }

    // =========================================================================
    // READS
    // =========================================================================

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    /// Items in `key`'s partition, in insertion order. Unknown keys give `[]`.
    pub fn partition(&self, key: &str) -> Vec<&Item> {
        self.lookup
            .get(&normalize_partition(key))
            .map(|&slot| self.resolve(&self.partitions[slot].members))
            .unwrap_or_default()
    }

    /// Every partition as `(normalized key, items)`, in partition-insertion order.
    pub fn partitions(&self) -> impl Iterator<Item = (&str, Vec<&Item>)> + '_ {
        self.partitions
            .iter()
            .map(move |p| (p.key.as_str(), self.resolve(&p.members)))
    }

    /// Normalized partition keys in insertion order.
    pub fn partition_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.partitions.iter().map(|p| p.key.as_str())
    }

    /// All partitions concatenated: partition order, then item order.
    ///
    /// An item linked into two partitions appears twice.
    pub fn all_items(&self) -> Vec<&Item> {
        self.slot_ids().map(|id| &self.items[id.0]).collect()
    }

    /// Items carrying `category` under tag normalization.
    ///
    /// `" Vegetarian "`, `"VEGETARIAN"` and `"vegetarian"` all match a
    /// `"Vegetarian"` tag. `None` matches nothing.
    pub fn items_by_category<'q>(&self, category: impl Into<Option<&'q str>>) -> Vec<&Item> {
        let Some(category) = category.into() else {
            return Vec::new();
        };
        let wanted = normalize_tag(category);
        self.all_items()
            .into_iter()
            .filter(|item| item.categories().iter().any(|tag| normalize_tag(tag) == wanted))
            .collect()
    }

    /// Category listing with repeats collapsed, ranked best-first.
    ///
    /// Items are deduplicated by tag-normalized name (first occurrence wins),
    /// then sorted by the ranking policy.
    pub fn unique_items_by_category<'q>(
        &self,
        category: impl Into<Option<&'q str>>,
    ) -> Vec<&Item> {
        let mut unique = dedup_first(self.items_by_category(category), |item| {
            normalize_tag(item.name_or_empty())
        });
        sort_ranked(&mut unique, &self.policy);
        unique
    }

    /// Best item within `category`, independent of the top-K cache.
    pub fn top_item_in_category<'q>(&self, category: impl Into<Option<&'q str>>) -> Option<&Item> {
        best_ranked(self.items_by_category(category), &self.policy)
    }

    // =========================================================================
    // TOP-K
    // =========================================================================

    /// Rank every slot from current scores, keep the best `k`, cache and return them.
    ///
    /// Fewer than `k` come back when the store is smaller; `k = 0` clears the cache.
    pub fn compute_top_k(&self, k: usize) -> Vec<&Item> {
        let mut ids: Vec<ItemId> = self.slot_ids().collect();
        let total = ids.len();

        if k < ids.len() {
            // Partition around the k-th best, then only sort the head
            ids.select_nth_unstable_by(k, |a, b| self.rank(*a, *b));
            ids.truncate(k);
        }
        ids.sort_by(|a, b| self.rank(*a, *b));

        tracing::debug!(k, total, kept = ids.len(), "recomputed top-k");

        let top = self.resolve(&ids);
        *self.top_k.borrow_mut() = ids;
        top
    }

    /// The last `compute_top_k` result, verbatim. Does not recompute.
    pub fn top_k_cache(&self) -> Vec<&Item> {
        self.resolve(&self.top_k.borrow())
    }

    /// Head of the cached top-K, or `None` if nothing has been computed.
    pub fn top_item(&self) -> Option<&Item> {
        self.top_k.borrow().first().map(|id| &self.items[id.0])
    }

    /// The item a "top food" banner should show.
    ///
    /// With a category: the best item in it. Without: recompute the
    /// [`DEFAULT_TOP_K`] cache and take its head.
    pub fn headline<'q>(&self, category: impl Into<Option<&'q str>>) -> Option<&Item> {
        match category.into() {
            Some(category) => self.top_item_in_category(category),
            None => self.compute_top_k(DEFAULT_TOP_K).first().copied(),
        }
    }

    // =========================================================================
    // VOTES
    // =========================================================================

    /// Up-vote by handle; returns the new score.
    pub fn up_vote(&self, id: ItemId) -> Option<i64> {
        let item = self.item(id)?;
        item.up_vote();
        Some(item.score())
    }

    /// Down-vote by handle; returns the new score.
    pub fn down_vote(&self, id: ItemId) -> Option<i64> {
        let item = self.item(id)?;
        item.down_vote();
        Some(item.score())
    }

    // =========================================================================
    // SIZES
    // =========================================================================

    /// Number of partition slots (a linked item counts once per partition).
    pub fn len(&self) -> usize {
        self.partitions.iter().map(|p| p.members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct owned items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    fn slot_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.partitions
            .iter()
            .flat_map(|p| p.members.iter().copied())
    }

    fn resolve(&self, ids: &[ItemId]) -> Vec<&Item> {
        ids.iter().map(|id| &self.items[id.0]).collect()
    }

    #[inline]
    fn rank(&self, a: ItemId, b: ItemId) -> Ordering {
        self.policy.compare(&self.items[a.0], &self.items[b.0])
    }
}
