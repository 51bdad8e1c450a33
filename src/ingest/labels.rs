// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dietary label text → canonical category tag.
//!
//! Upstream menus mark dishes with icons whose alt text is free-form ("Vegetarian
//! icon", "made without gluten-containing ingredients"). This maps that text to
//! one of four tags. The core never sees this table; it matches whatever tags it
//! is given.

/// Canonical tags, in match priority order.
const LABEL_RULES: &[(&str, &str)] = &[
    ("vegetarian", "Vegetarian"),
    ("vegan", "Vegan"),
    ("gluten", "Gluten-Free"),
    ("halal", "Halal"),
];

/// Map label text to a canonical tag by case-insensitive substring.
///
/// First rule wins, so "vegetarian, vegan optional" is `Vegetarian`.
pub fn category_from_label(label: &str) -> Option<&'static str> {
    let label = label.to_lowercase();
    LABEL_RULES
        .iter()
        .find(|(needle, _)| label.contains(needle))
        .map(|&(_, tag)| tag)
}
