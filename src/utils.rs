// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.
//!
//! Three normalization rules live here and they are deliberately not
//! interchangeable:
//!
//! | Function             | Used for                          | Rule                                     |
//! |----------------------|-----------------------------------|------------------------------------------|
//! | `normalize_name`     | prefix index keys, prefix queries | lowercase                                |
//! | `normalize_tag`      | category match, unique-name dedup | trim, drop whitespace and `-`, lowercase |
//! | `normalize_partition`| partition keys                    | uppercase                                |

/// Lowercase only. Whitespace and dashes survive, so "veggie wrap" and
/// "veggiewrap" are different index keys.
#[inline]
pub fn normalize_name(value: &str) -> String {
    value.to_lowercase()
}

/// Coarse key for category tags and name dedup.
///
/// - "Gluten-Free" → "glutenfree"
/// - " GLUTENFREE " → "glutenfree"
/// - "gluten free" → "glutenfree"
pub fn normalize_tag(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Partition keys collide case-insensitively: "Lunch", "lunch", "LUNCH".
#[inline]
pub fn normalize_partition(value: &str) -> String {
    value.to_uppercase()
}
