// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character trie keyed by pre-normalized strings.
//!
//! Each edge is one `char` of the key; each node may carry any number of values
//! that terminate there. Duplicate keys are fine: all values are kept, in
//! insertion order, on the shared terminal node. Deciding what counts as a
//! duplicate is the caller's job, not the trie's.
//!
//! The trie does no normalization. Callers lowercase (or whatever their rule
//! is) before `insert` and before `search`.
//!
//! # Traversal
//!
//! Subtree collection and teardown are iterative with an explicit stack, so a
//! pathological 100k-character key can't blow the call stack. Sibling order follows the
//! child map's iteration order and is unspecified; callers that care about
//! order sort afterwards.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

struct TrieNode<T> {
    children: HashMap<char, TrieNode<T>>,
    values: Vec<T>,
}

// Manual impl: derive would demand `T: Default`.
impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            values: Vec::new(),
        }
    }
}

// Iterative teardown; the derived drop would recurse once per key character.
impl<T> Drop for TrieNode<T> {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode<T>> = self.children.drain().map(|(_, node)| node).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

/// Prefix tree mapping normalized keys to values.
///
/// ```
/// use menurank::PrefixIndex;
///
/// let mut index = PrefixIndex::new();
/// index.insert("shawarma", 1);
/// index.insert("salad", 2);
/// index.insert("piza", 3);
///
/// let mut hits = index.search("s");
/// hits.sort();
/// assert_eq!(hits, vec![1, 2]);
/// assert!(index.search("x").is_empty());
/// assert_eq!(index.search("").len(), 3);
/// ```
pub struct PrefixIndex<T> {
    root: TrieNode<T>,
    len: usize,
    nodes: usize,
}

impl<T> PrefixIndex<T> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            len: 0,
            nodes: 1,
        }
    }

    /// Store `value` under `key`. The empty key stores on the root.
    pub fn insert(&mut self, key: &str, value: T) {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = match node.children.entry(c) {
                Entry::Occupied(slot) => slot.into_mut(),
                Entry::Vacant(slot) => {
                    self.nodes += 1;
                    slot.insert(TrieNode::default())
                }
            };
        }
        node.values.push(value);
        self.len += 1;
    }

    /// Every value whose key starts with `prefix`.
    ///
    /// A prefix that leaves the tree returns an empty vector, never an error.
    /// The empty prefix returns everything.
    pub fn search(&self, prefix: &str) -> Vec<T>
    where
        T: Clone,
    {
        let Some(start) = self.descend(prefix) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            results.extend(node.values.iter().cloned());
            stack.extend(node.children.values());
        }
        results
    }

    /// Whether any indexed key starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.descend(prefix).is_some()
    }

    /// Drop the whole tree. Values held elsewhere are unaffected.
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
        self.len = 0;
        self.nodes = 1;
    }

    /// Number of stored values (not distinct keys).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of trie nodes including the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    fn descend(&self, prefix: &str) -> Option<&TrieNode<T>> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

impl<T> Default for PrefixIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for PrefixIndex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefixIndex")
            .field("len", &self.len)
            .field("nodes", &self.nodes)
            .finish()
    }
}
