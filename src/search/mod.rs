// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! The store holds the items, the trie knows how to walk characters. This module
//! decides what goes into the trie (one entry per lowercased name, first seen
//! wins) and how queries are normalized on the way in.

pub mod dedup;
mod retrieval;

pub use retrieval::RetrievalService;
