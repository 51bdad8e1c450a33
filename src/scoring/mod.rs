// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how items get put in order.
//!
//! Scores are plain signed vote tallies, so there is no scoring math to speak of.
//! What matters is the order: higher score first, name as the tiebreaker. Every
//! ranked view in the crate (top-K, unique category listing, top-in-category)
//! goes through a [`RankingPolicy`], and the store takes the policy as a type
//! parameter so it can be swapped without touching store internals.

pub mod ranking;

pub use ranking::{best_ranked, sort_ranked, RankingPolicy, ScoreThenName};
