// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the scour command-line interface.
//!
//! The CLI runs the exact matcher and renderer the browser build runs, against
//! an index file on disk. Useful for checking what visitors will see before
//! deploying, and for poking at an index the generator produced.
//!
//! Unlike the widget, the CLI is strict: an unreadable or malformed index is
//! an error, not an empty result.

pub mod demo;
pub mod display;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::loader::load_index_file;
use crate::render::{render_markup, snippet};
use crate::search::{search, MAX_RESULTS};
use crate::types::IndexEntry;
use display::*;

#[derive(Parser)]
#[command(
    name = "scour",
    about = "Inspect and query static-site search indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a search_index.json file
    Inspect {
        /// Path to search_index.json
        file: PathBuf,

        /// Number of entries to list
        #[arg(short = 'n', long, default_value = "5")]
        show: usize,
    },

    /// Run a query and list the matches
    Search {
        /// Path to search_index.json
        file: PathBuf,

        /// Search query
        query: String,
    },

    /// Print the markup the widget would insert for a query
    Render {
        /// Path to search_index.json
        file: PathBuf,

        /// Search query
        query: String,
    },

    /// Write a demo page wired to the WASM widget
    Demo {
        /// Output directory
        #[arg(short, long, default_value = "scour-demo")]
        output: PathBuf,

        /// Index to ship with the demo (default: built-in sample)
        #[arg(long)]
        index: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Inspect { file, show } => inspect(&file, show),
        Commands::Search { file, query } => run_search(&file, &query),
        Commands::Render { file, query } => {
            println!("{}", render_query(&file, &query)?);
            Ok(())
        }
        Commands::Demo { output, index } => {
            let written = demo::write_demo(&output, index.as_deref())?;
            for path in written {
                println!("  wrote {}", path.display());
            }
            println!();
            println!("Build the widget with `cargo xtask wasm`, copy pkg/ into");
            println!("{} and serve the directory over HTTP.", output.display());
            Ok(())
        }
    }
}

/// Markup for `query` against the index at `file`.
pub fn render_query(file: &Path, query: &str) -> Result<String> {
    let entries = load_index_file(file)?;
    let matches = search(Some(&entries), query);
    Ok(render_markup(&matches))
}

/// How many entries have a non-empty value for each field.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FieldStats {
    pub total: usize,
    pub title: usize,
    pub body: usize,
    pub description: usize,
    pub categories: usize,
    pub tags: usize,
    pub url: usize,
    pub date: usize,
}

impl FieldStats {
    pub fn collect(entries: &[IndexEntry]) -> Self {
        let count = |f: &dyn Fn(&IndexEntry) -> bool| entries.iter().filter(|e| f(e)).count();
        Self {
            total: entries.len(),
            title: count(&|e: &IndexEntry| !e.title.is_empty()),
            body: count(&|e: &IndexEntry| !e.body.is_empty()),
            description: count(&|e: &IndexEntry| !e.description.is_empty()),
            categories: count(&|e: &IndexEntry| !e.categories.is_empty()),
            tags: count(&|e: &IndexEntry| !e.tags.is_empty()),
            url: count(&|e: &IndexEntry| !e.url.is_empty()),
            date: count(&|e: &IndexEntry| !e.date.is_empty()),
        }
    }
}

fn inspect(file: &Path, show: usize) -> Result<()> {
    let size = std::fs::metadata(file)?.len() as usize;
    let entries = load_index_file(file)?;
    let stats = FieldStats::collect(&entries);

    section_top("INDEX");
    row(&format!(" File     {}", file.display()));
    row(&format!(" Size     {}", format_size(size)));
    row(&format!(" Entries  {}", stats.total));

    section_mid("FIELDS");
    for (name, filled) in [
        ("title", stats.title),
        ("body", stats.body),
        ("description", stats.description),
        ("categories", stats.categories),
        ("tags", stats.tags),
        ("url", stats.url),
        ("date", stats.date),
    ] {
        row(&format!(
            " {} {}  {}/{}",
            pad_right(name, 12),
            coverage(filled, stats.total),
            filled,
            stats.total
        ));
    }

    if show > 0 && !entries.is_empty() {
        section_mid("ENTRIES");
        for (i, entry) in entries.iter().take(show).enumerate() {
            let date = if entry.date.is_empty() {
                String::new()
            } else {
                themed(GRAY, &[DIM], &format!("  {}", entry.date))
            };
            row(&format!(" {} {}{}", position(i + 1), clip(&entry.title, 50), date));
            row(&format!("     {}", themed(GRAY, &[], &clip(&entry.url, 70))));
        }
    }
    section_bot();
    Ok(())
}

fn run_search(file: &Path, query: &str) -> Result<()> {
    let entries = load_index_file(file)?;
    let matches = search(Some(&entries), query);

    section_top(&format!("SEARCH \"{}\"", clip(query, 40)));
    if matches.is_empty() {
        row(&themed(YELLOW, &[], " No results found"));
    } else {
        for (i, entry) in matches.iter().enumerate() {
            row(&format!(
                " {} {}",
                position(i + 1),
                themed(GREEN, &[BOLD], &clip(&entry.title, 70))
            ));
            row(&format!("     {}", themed(BLUE, &[], &clip(&entry.url, 70))));
            row(&format!("     {}", clip(&one_line(&snippet(entry)), 74)));
        }
    }
    section_mid("SUMMARY");
    let capped = if matches.len() == MAX_RESULTS {
        " (capped)"
    } else {
        ""
    };
    row(&format!(
        " {} of {} entries matched{}",
        matches.len(),
        entries.len(),
        capped
    ));
    section_bot();
    Ok(())
}
