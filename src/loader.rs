// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy, single-shot index loading.
//!
//! The loader does not fetch anything itself. It decides *whether* a fetch
//! should happen ([`IndexLoader::begin`]) and publishes *what came back*
//! ([`IndexLoader::finish`]). The browser runtime does the actual request in
//! between. Keeping the transport outside means the lifecycle can be tested
//! without a browser.
//!
//! ```text
//!  Unloaded ──begin()──▶ Loading ──finish(Ok)──▶ Loaded(entries)
//!                                 └─finish(Err)─▶ Loaded([])
//! ```
//!
//! `begin()` only returns true from `Unloaded`, so a second focus while the
//! request is in flight does not start another one. Failures are terminal:
//! an empty index is still an index, and nothing retries.

use std::path::Path;

use crate::error::{Result, ScourError};
use crate::types::{IndexEntry, IndexState};

/// Where the site generator writes the index.
pub const DEFAULT_INDEX_URL: &str = "/search_index.json";

/// Parse an index payload.
///
/// The top level has to be an array. Elements that are not objects are skipped
/// rather than failing the whole payload; fields inside objects are forgiving
/// (see [`IndexEntry`]).
pub fn parse_index(payload: &str) -> Result<Vec<IndexEntry>> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    let serde_json::Value::Array(items) = value else {
        return Err(ScourError::Parse("expected a JSON array of entries".to_string()));
    };

    let mut entries = Vec::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            log::debug!("skipping non-object index entry at position {}", position);
            continue;
        }
        entries.push(serde_json::from_value(item)?);
    }
    Ok(entries)
}

/// Read and parse an index file from disk.
pub fn load_index_file(path: &Path) -> Result<Vec<IndexEntry>> {
    let payload = std::fs::read_to_string(path)?;
    parse_index(&payload)
}

/// Owns the index lifecycle for one widget.
#[derive(Debug, Default)]
pub struct IndexLoader {
    state: IndexState,
}

impl IndexLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the one and only fetch.
    ///
    /// Returns true exactly once per loader: the caller must then issue the
    /// request and hand its outcome to [`finish`](Self::finish).
    pub fn begin(&mut self) -> bool {
        if self.state == IndexState::Unloaded {
            self.state = IndexState::Loading;
            true
        } else {
            false
        }
    }

    /// Publish the outcome of the fetch.
    ///
    /// `outcome` is the response body or the transport error. Anything that
    /// fails to parse becomes an empty index. Calls after the index is loaded
    /// are ignored.
    pub fn finish(&mut self, outcome: Result<String>) {
        if self.state.is_loaded() {
            log::debug!("index already loaded; ignoring late fetch result");
            return;
        }

        let entries = match outcome.and_then(|body| parse_index(&body)) {
            Ok(entries) => {
                log::debug!("search index loaded: {} entries", entries.len());
                entries
            }
            Err(e) => {
                log::warn!("search index unavailable, continuing with empty index: {}", e);
                Vec::new()
            }
        };
        self.state = IndexState::Loaded(entries);
    }

    pub fn state(&self) -> &IndexState {
        &self.state
    }

    /// Loaded entries, or `None` while unloaded or loading.
    pub fn entries(&self) -> Option<&[IndexEntry]> {
        self.state.entries()
    }
}
