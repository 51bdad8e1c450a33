// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fake crowds for demos.
//!
//! A freshly scraped menu has every score at zero, which makes for a dull top-5.
//! `simulate_votes` walks every partition slot and casts between 0 and
//! [`MAX_SIMULATED_VOTES`]` - 1` coin-flip votes on it. Seeded, so the same
//! snapshot and seed always produce the same leaderboard.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::scoring::RankingPolicy;
use crate::store::ItemStore;

/// Exclusive upper bound on votes per slot.
pub const MAX_SIMULATED_VOTES: u32 = 100;

/// Seed used when the caller doesn't pick one.
pub const DEFAULT_SEED: u64 = 42;

/// Cast random votes on every slot. Returns the number of votes cast.
///
/// An item linked into two partitions is voted on once per slot.
pub fn simulate_votes<P: RankingPolicy>(store: &ItemStore<P>, seed: u64) -> u64 {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cast = 0u64;

    for item in store.all_items() {
        let votes = rng.gen_range(0..MAX_SIMULATED_VOTES);
        for _ in 0..votes {
            if rng.gen_bool(0.5) {
                item.up_vote();
            } else {
                item.down_vote();
            }
        }
        cast += u64::from(votes);
    }

    tracing::debug!(seed, cast, slots = store.len(), "simulated votes");
    cast
}
