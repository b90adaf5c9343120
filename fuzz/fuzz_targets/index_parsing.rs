// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index parsing.
//!
//! The index comes from a server we don't control. Whatever bytes arrive,
//! parsing either fails cleanly or yields entries the matcher and renderer
//! can chew on without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scour::{parse_index, render_markup, search, IndexLoader, MAX_RESULTS};

fuzz_target!(|data: &[u8]| {
    let payload = String::from_utf8_lossy(data);

    // INVARIANT: parse_index never panics
    let Ok(entries) = parse_index(&payload) else {
        return;
    };

    for query in ["ab", "rust", "  a", "<>"] {
        let results = search(Some(entries.as_slice()), query);
        assert!(results.len() <= MAX_RESULTS);
        let _ = render_markup(&results);
    }

    // INVARIANT: the loader always ends up loaded, failures included
    let mut loader = IndexLoader::new();
    assert!(loader.begin());
    loader.finish(Ok(payload.into_owned()));
    assert!(loader.state().is_loaded());
});
