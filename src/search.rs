// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query matching over a loaded index.
//!
//! There is no ranking here. Index order is the relevance signal: the generator
//! writes newest pages first, and the first ten entries containing every query
//! term win. Matching is contiguous substring containment, so "cat" finds
//! "category" and "concatenate" alike.
//!
//! # Algorithm
//!
//! 1. Normalize the query (lowercase + trim), bail out under two characters
//! 2. Split into whitespace-delimited terms
//! 3. Walk entries in order, building each haystack once
//! 4. Keep an entry iff every term is a substring of its haystack (AND)
//! 5. Stop scanning at [`MAX_RESULTS`]
//!
//! # Example
//!
//! ```
//! use scour::{search, IndexEntry};
//!
//! let index = vec![IndexEntry {
//!     title: "Rust Guide".into(),
//!     body: "ownership and borrowing".into(),
//!     url: "/rust".into(),
//!     ..Default::default()
//! }];
//!
//! assert_eq!(search(Some(&index), "own").len(), 1);
//! assert!(search(Some(&index), "xy").is_empty());
//! assert!(search(None, "own").is_empty());
//! ```

use crate::types::IndexEntry;
use crate::utils::{char_len, normalize, split_terms};

/// Shortest query, in characters, that triggers a search.
pub const MIN_QUERY_CHARS: usize = 2;

/// Most results a single query returns.
pub const MAX_RESULTS: usize = 10;

/// Find up to [`MAX_RESULTS`] entries containing every term of `query`.
///
/// `index` is `None` while the index has not been published yet; that is not
/// an error, it just means there is nothing to find.
pub fn search<'a>(index: Option<&'a [IndexEntry]>, query: &str) -> Vec<&'a IndexEntry> {
    let Some(entries) = index else {
        return Vec::new();
    };
    if query.is_empty() {
        return Vec::new();
    }

    let normalized = normalize(query);
    if char_len(&normalized) < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let terms = split_terms(&normalized);

    entries
        .iter()
        .filter(|entry| matches_all(&entry.haystack(), &terms))
        .take(MAX_RESULTS)
        .collect()
}

/// True iff every term occurs somewhere in `haystack`.
#[inline]
pub fn matches_all(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().all(|term| haystack.contains(term))
}
