// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Item ranking: how ranked results get sorted.
//!
//! The default rule is two keys deep:
//!
//! 1. **Score** - higher wins
//! 2. **Name** - byte-wise ascending, case-sensitive ("Piza" before "Shawarma",
//!    "Zucchini" before "apple")
//!
//! Two items with the same score and the same name are indistinct. Sorting uses
//! a stable sort, so indistinct items keep their input order and repeated calls
//! over unchanged inputs return the same sequence.

use crate::types::Item;
use std::cmp::Ordering;

/// A total preorder over items.
///
/// `Ordering::Less` means `a` ranks higher (comes first), `Ordering::Greater`
/// means `b` does. Any `Fn(&Item, &Item) -> Ordering` is a policy, so ad-hoc
/// rules don't need a named type:
///
/// ```
/// use menurank::{Item, ItemStore};
///
/// // Lowest score first, for a "needs attention" view.
/// let store = ItemStore::with_policy(|a: &Item, b: &Item| a.score().cmp(&b.score()));
/// # let _ = store;
/// ```
pub trait RankingPolicy {
    fn compare(&self, a: &Item, b: &Item) -> Ordering;
}

/// Higher score first, then lexicographically smaller name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreThenName;

impl RankingPolicy for ScoreThenName {
    #[inline]
    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        // Descending score, then ascending name
        match b.score().cmp(&a.score()) {
            Ordering::Equal => a.name_or_empty().cmp(b.name_or_empty()),
            ord => ord,
        }
    }
}

impl<F> RankingPolicy for F
where
    F: Fn(&Item, &Item) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        self(a, b)
    }
}

/// Sort best-first under `policy`. Stable.
pub fn sort_ranked<P: RankingPolicy + ?Sized>(items: &mut [&Item], policy: &P) {
    items.sort_by(|a, b| policy.compare(a, b));
}

/// The single best item, or `None` for an empty input.
///
/// Among indistinct items the first one encountered wins.
pub fn best_ranked<'a, P, I>(items: I, policy: &P) -> Option<&'a Item>
where
    P: RankingPolicy + ?Sized,
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .reduce(|best, next| match policy.compare(next, best) {
            Ordering::Less => next,
            _ => best,
        })
}
