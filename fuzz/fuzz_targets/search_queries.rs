// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary queries against arbitrary small indexes. The matcher must never
//! panic, never return more than ten entries, never reorder the index, and
//! every entry it returns must actually contain every query term.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scour::{matches_all, normalize, render_markup, search, split_terms, IndexEntry, MAX_RESULTS};

/// One generated page. Fields map straight onto `IndexEntry`.
#[derive(Debug, Arbitrary)]
struct EntryInput {
    title: String,
    body: String,
    description: String,
    categories: Vec<String>,
    tags: Vec<String>,
    url: String,
}

/// A query plus the index it runs against.
///
/// Entries beyond 32 are dropped to keep each run fast; that is still enough
/// to hit the ten-result cap.
#[derive(Debug, Arbitrary)]
struct SearchInput {
    query: String,
    entries: Vec<EntryInput>,
}

fuzz_target!(|input: SearchInput| {
    let index: Vec<IndexEntry> = input
        .entries
        .into_iter()
        .take(32)
        .map(|e| IndexEntry {
            title: e.title,
            body: e.body,
            description: e.description,
            categories: e.categories,
            tags: e.tags,
            url: e.url,
            date: String::new(),
        })
        .collect();
    let query: String = input.query.chars().take(200).collect();

    // INVARIANT: search never panics and is capped
    let results = search(Some(index.as_slice()), &query);
    assert!(results.len() <= MAX_RESULTS, "got {} results", results.len());

    // INVARIANT: every result matches every term
    let normalized = normalize(&query);
    let terms = split_terms(&normalized);
    for entry in &results {
        assert!(
            matches_all(&entry.haystack(), &terms),
            "false positive for {:?}",
            query
        );
    }

    // INVARIANT: results keep index order
    let positions: Vec<usize> = results
        .iter()
        .map(|hit| {
            index
                .iter()
                .position(|e| std::ptr::eq(e, *hit))
                .expect("result must come from the index")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "results out of order");

    // INVARIANT: no index means no results
    assert!(search(None, &query).is_empty());

    // Rendering whatever came back must not panic either
    let _ = render_markup(&results);
});
