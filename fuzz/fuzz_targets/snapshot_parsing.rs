// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snapshot parsing.
//!
//! Garbage JSON must come back as an error, never a panic. Whatever parses
//! must ingest cleanly with every slot accounted for.

#![no_main]

use libfuzzer_sys::fuzz_target;
use menurank::MenuSnapshot;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(snapshot) = MenuSnapshot::from_json(json) else {
        return;
    };

    let slots: usize = snapshot.partitions.iter().map(|p| p.items.len()).sum();
    let (store, report) = snapshot.into_store();
    assert_eq!(report.added + report.skipped_slots, slots);
    assert_eq!(store.len(), report.added);
});
