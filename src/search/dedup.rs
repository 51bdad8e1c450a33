// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! First-occurrence-wins deduplication.
//!
//! Menus repeat themselves. The same dish shows up at lunch and dinner, sometimes
//! with different dietary tags. Two places collapse those repeats, and they use
//! different keys:
//!
//! - **Reindexing** keys on the lowercased name. "Veggie Wrap" and "veggie wrap"
//!   are one entry; "Veggie-Wrap" is another.
//! - **Unique category listings** key on the tag-normalized name. All three of
//!   the above are one entry.
//!
//! Both keep the first item they see and drop the rest, tags and all. That means
//! a dinner "Soup" tagged Vegan can vanish behind a lunch "Soup" tagged Halal.
//! Intentional: which one is "right" is ambiguous, so the earliest wins.
//!
//! [`FirstSeen`] is the single source of truth for this rule.

use crate::types::Item;
use std::collections::HashSet;

/// Tracks which keys have already been admitted.
#[derive(Debug, Default)]
pub struct FirstSeen {
    seen: HashSet<String>,
}

impl FirstSeen {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` the first time `key` is offered, `false` afterwards.
    pub fn admit(&mut self, key: String) -> bool {
        self.seen.insert(key)
    }

    /// Number of distinct keys admitted.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Keep the first item per `key`, preserving input order.
pub fn dedup_first<'a, I, F>(items: I, mut key: F) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
    F: FnMut(&Item) -> String,
{
    let mut seen = FirstSeen::new();
    items
        .into_iter()
        .filter(|item| seen.admit(key(*item)))
        .collect()
}
