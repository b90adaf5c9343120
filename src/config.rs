// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget options passed from JavaScript.
//!
//! Everything defaults to what the stock site theme renders, so
//! `initSearchWidget()` with no arguments does the right thing. Matching limits
//! are deliberately not here; see [`crate::MIN_QUERY_CHARS`] and
//! [`crate::MAX_RESULTS`].

use serde::{Deserialize, Serialize};

use crate::loader::DEFAULT_INDEX_URL;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// URL of the JSON index (default: `/search_index.json`)
    pub index_url: String,
    /// Element id of the text input (default: `search-input`)
    pub input_id: String,
    /// Element id of the results container (default: `search-results`)
    pub results_id: String,
    /// Class toggled on the container while results are shown (default: `active`)
    pub active_class: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            input_id: "search-input".to_string(),
            results_id: "search-results".to_string(),
            active_class: "active".to_string(),
        }
    }
}
