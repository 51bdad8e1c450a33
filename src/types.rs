// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The things being ranked.
//!
//! An [`Item`] is a menu offering: a display name, a bag of free-form category
//! tags, and a signed score that moves one vote at a time. Items are owned by an
//! [`ItemStore`](crate::ItemStore); everything else (the prefix index, query
//! results, the top-K cache) only ever borrows them.
//!
//! # Invariants
//!
//! - **Shared score**: the score lives in a `Cell`, so a vote cast through any
//!   `&Item` is visible through every other `&Item` to the same value. This is
//!   what makes an `Item` `!Sync`, and that is exactly the threading model: one
//!   writer, cooperative readers, same thread.
//!
//! - **Absent names are legal**: upstream menus are unreliable. An item without a
//!   name is stored like any other but never reaches the prefix index.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Handle to an item owned by an [`ItemStore`](crate::ItemStore).
///
/// Returned by `add_item`, accepted by `link_item` and the vote helpers. A handle
/// is only meaningful for the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ItemId(pub(crate) usize);

impl ItemId {
    /// Position of the item in its store's arena.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// ITEM
// =============================================================================

/// A single menu offering.
///
/// ```
/// use menurank::Item;
///
/// let wrap = Item::new("Veggie Wrap", ["Vegetarian"]);
/// wrap.up_vote();
/// wrap.up_vote();
/// wrap.down_vote();
/// assert_eq!(wrap.score(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    score: Cell<i64>,
}

impl Item {
    /// Create a named item with score 0.
    pub fn new<N, I, S>(name: N, categories: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            categories: categories.into_iter().map(Into::into).collect(),
            score: Cell::new(0),
        }
    }

    /// Create an item whose name the upstream source failed to provide.
    pub fn unnamed<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            categories: categories.into_iter().map(Into::into).collect(),
            score: Cell::new(0),
        }
    }

    /// Builder-style score assignment.
    pub fn with_score(self, score: i64) -> Self {
        self.score.set(score);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name for ordering and display; absent names read as `""`.
    #[inline]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Current score.
    #[inline]
    pub fn score(&self) -> i64 {
        self.score.get()
    }

    /// Overwrite the score. Used when loading pre-scored snapshots.
    pub fn set_score(&self, score: i64) {
        self.score.set(score);
    }

    /// One vote up. No ceiling.
    pub fn up_vote(&self) {
        self.score.set(self.score.get().saturating_add(1));
    }

    /// One vote down. No floor.
    pub fn down_vote(&self) {
        self.score.set(self.score.get().saturating_sub(1));
    }

    /// Append a tag unless an identical one is already present.
    pub(crate) fn push_category(&mut self, category: String) {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_or_empty())
    }
}
