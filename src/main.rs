// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing_subscriber::EnvFilter;

use menurank::{simulate_votes, ItemStore, MenuSnapshot, RetrievalService, SnapshotError};

mod cli;
use cli::display;
use cli::{Cli, Commands, GlobalArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    if let Err(e) = run(&cli.global, &cli.command) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so piped stdout stays clean.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "menurank=debug" } else { "menurank=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(global: &GlobalArgs, command: &Commands) -> Result<(), SnapshotError> {
    let store = load_store(global, command.file())?;

    match command {
        Commands::Menu { partition, .. } => run_menu(&store, partition.as_deref()),
        Commands::Search { query, .. } => run_search(&store, query),
        Commands::Top { k, category, .. } => run_top(&store, *k, category.as_deref()),
        Commands::Category {
            category, unique, ..
        } => run_category(&store, category, *unique),
    }
    Ok(())
}

fn load_store(global: &GlobalArgs, file: &std::path::Path) -> Result<ItemStore, SnapshotError> {
    let (store, report) = MenuSnapshot::load(file)?.into_store();
    tracing::info!(
        file = %file.display(),
        added = report.added,
        skipped_slots = report.skipped_slots,
        partitions = store.partition_count(),
        "loaded snapshot"
    );

    if global.simulate_votes {
        let cast = simulate_votes(&store, global.seed);
        tracing::info!(seed = global.seed, cast, "simulated votes");
    }
    Ok(store)
}

fn run_menu(store: &ItemStore, only: Option<&str>) {
    match only {
        Some(partition) => {
            let key = menurank::normalize_partition(partition);
            display::print_items(&key, &store.partition(partition));
        }
        None => {
            if store.partition_count() == 0 {
                display::print_items("MENU", &[]);
            }
            for (key, items) in store.partitions() {
                display::print_items(key, &items);
            }
        }
    }
}

fn run_search(store: &ItemStore, query: &str) {
    let service = RetrievalService::from_store(store);
    let mut hits = service.search_by_prefix(query);
    // Trie order is arbitrary; show the best matches first
    menurank::sort_ranked(&mut hits, store.policy());
    display::print_items(&format!("SEARCH \"{}\"", query), &hits);
}

fn run_top(store: &ItemStore, k: usize, category: Option<&str>) {
    match category {
        Some(category) => {
            let best: Vec<_> = store.top_item_in_category(category).into_iter().collect();
            display::print_items(&format!("TOP {}", category.trim()), &best);
        }
        None => display::print_items(&format!("TOP {}", k), &store.compute_top_k(k)),
    }
}

fn run_category(store: &ItemStore, category: &str, unique: bool) {
    let items = if unique {
        store.unique_items_by_category(category)
    } else {
        store.items_by_category(category)
    };
    let label = if unique {
        format!("{} (UNIQUE)", category.trim().to_uppercase())
    } else {
        category.trim().to_uppercase()
    };
    display::print_items(&label, &items);
}
