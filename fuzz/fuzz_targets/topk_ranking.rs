// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for top-K ranking invariants.
//!
//! Extreme scores, empty names, k far past the store size, votes at i64::MAX.
//! The leaderboard must stay sorted and sized min(k, n) regardless.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use menurank::{Item, ItemStore};

#[derive(Debug, Arbitrary)]
struct Input {
    items: Vec<(String, i64)>,
    votes: Vec<(u8, bool)>,
    k: u16,
}

fuzz_target!(|input: Input| {
    let mut store = ItemStore::new();
    for (name, score) in input.items.into_iter().take(128) {
        store.add_item("Menu", Item::new(name, Vec::<String>::new()).with_score(score));
    }

    let all = store.all_items();
    if !all.is_empty() {
        for (slot, up) in input.votes.iter().take(256) {
            let item = all[*slot as usize % all.len()];
            if *up {
                item.up_vote();
            } else {
                item.down_vote();
            }
        }
    }

    let k = input.k as usize;
    let top = store.compute_top_k(k);
    assert_eq!(top.len(), k.min(all.len()));

    for pair in top.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            a.score() > b.score()
                || (a.score() == b.score() && a.name_or_empty() <= b.name_or_empty()),
            "{:?}({}) ranked above {:?}({})",
            a.name(),
            a.score(),
            b.name(),
            b.score()
        );
    }

    let cached = store.top_k_cache();
    assert_eq!(cached.len(), top.len());
});
