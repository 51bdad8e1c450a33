// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors from the edges of the crate.
//!
//! The ranking core never fails: absent input is an empty result. The only
//! fallible surface is reading a menu snapshot off disk.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a [`MenuSnapshot`](crate::ingest::MenuSnapshot).
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}
