// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.
//!
//! Lengths here are counted in characters, not bytes. A two-character
//! Japanese query is a real query even though it is six bytes of UTF-8.

/// Normalize a query for matching: lowercase, then trim.
///
/// Interior whitespace is left alone; [`split_terms`] deals with runs of it.
pub fn normalize(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

/// Split a normalized query into terms on runs of whitespace.
pub fn split_terms(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Length in Unicode scalar values.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// The first `max_chars` characters of `value`.
///
/// Never splits a character, so the result is always valid UTF-8.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &value[..byte_idx],
        None => value,
    }
}
