// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structure that makes prefix lookup fast.
//!
//! One index type, a character trie. Lookups cost O(|prefix|) to find the
//! subtree plus O(matches) to collect it, independent of how many names are
//! indexed. The index is a snapshot: built once, queried many times, thrown
//! away and rebuilt when the source data changes.

mod trie;

pub use trie::PrefixIndex;
