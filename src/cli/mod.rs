// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the menurank command-line interface.
//!
//! Four read-only subcommands over a JSON menu snapshot: `menu` to list what
//! was loaded, `search` for prefix lookup, `top` for the leaderboard, and
//! `category` for dietary filters. Scores in a fresh snapshot are usually all
//! zero, so `--simulate-votes` fakes a crowd first.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use menurank::simulate::DEFAULT_SEED;
use menurank::DEFAULT_TOP_K;

#[derive(Parser)]
#[command(
    name = "menurank",
    about = "Prefix search and vote-ranked leaderboards for menu snapshots",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Cast seeded random votes on every item before answering
    #[arg(long, global = true)]
    pub simulate_votes: bool,

    /// Seed for --simulate-votes
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Log at debug level (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List partitions and their items
    Menu {
        /// Path to menu snapshot JSON
        file: PathBuf,

        /// Only show this partition (case-insensitive)
        #[arg(short, long)]
        partition: Option<String>,
    },

    /// Find items whose name starts with a prefix
    Search {
        /// Path to menu snapshot JSON
        file: PathBuf,

        /// Name prefix (case-insensitive)
        query: String,
    },

    /// Show the highest-ranked items
    Top {
        /// Path to menu snapshot JSON
        file: PathBuf,

        /// Number of items to show
        #[arg(short, long, default_value_t = DEFAULT_TOP_K)]
        k: usize,

        /// Show only the best item carrying this tag
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List items carrying a dietary tag
    Category {
        /// Path to menu snapshot JSON
        file: PathBuf,

        /// Tag to match ("gluten free" matches "Gluten-Free")
        category: String,

        /// Collapse repeated dishes and rank best-first
        #[arg(short, long)]
        unique: bool,
    },
}

impl Commands {
    /// Snapshot path shared by every subcommand.
    pub fn file(&self) -> &PathBuf {
        match self {
            Commands::Menu { file, .. }
            | Commands::Search { file, .. }
            | Commands::Top { file, .. }
            | Commands::Category { file, .. } => file,
        }
    }
}
