// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! An index is a flat JSON array of [`IndexEntry`] values written by the site
//! generator. The widget owns the parsed entries through [`IndexState`], which
//! makes the "not loaded yet" case a real variant instead of a null.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **IndexEntry**: every field is present after deserialization. Missing or
//!   `null` fields become empty strings / empty vectors, so the matcher never
//!   has to care which generator version wrote the file.
//!
//! - **IndexState**: `Unloaded → Loading → Loaded`, forward only. A `Loaded`
//!   index is never replaced, even if it is empty because the fetch failed.

use serde::{Deserialize, Deserializer, Serialize};

/// One searchable page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    #[serde(default, deserialize_with = "string_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub body: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "strings_or_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "strings_or_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "string_or_default")]
    pub url: String,
    /// Publication date (`YYYY-MM-DD`). Displayed, never searched.
    #[serde(default, deserialize_with = "string_or_default")]
    pub date: String,
}

impl IndexEntry {
    /// Lowercased text the matcher tests terms against.
    ///
    /// Fields are joined with single spaces in a fixed order: title, body,
    /// description, categories, tags. Empty fields still contribute their
    /// separator, so a term can never straddle two fields by accident.
    pub fn haystack(&self) -> String {
        let mut text = String::with_capacity(
            self.title.len() + self.body.len() + self.description.len() + 64,
        );
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.body);
        text.push(' ');
        text.push_str(&self.description);
        text.push(' ');
        text.push_str(&self.categories.join(" "));
        text.push(' ');
        text.push_str(&self.tags.join(" "));
        text.to_lowercase()
    }
}

/// Lifecycle of the widget's single lazily-loaded index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IndexState {
    /// Nobody has focused the input yet.
    #[default]
    Unloaded,
    /// A fetch is in flight.
    Loading,
    /// Terminal. Empty when the fetch or parse failed.
    Loaded(Vec<IndexEntry>),
}

impl IndexState {
    /// Entries, if an index has been published.
    ///
    /// `Loaded(vec![])` returns `Some(&[])`, which is not the same thing as
    /// `None`: the first means "searched, nothing there", the second "not yet".
    pub fn entries(&self) -> Option<&[IndexEntry]> {
        match self {
            IndexState::Loaded(entries) => Some(entries),
            IndexState::Unloaded | IndexState::Loading => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, IndexState::Loaded(_))
    }
}

// Generators in the wild write `null` for absent descriptions, and the odd
// number in a tag list. Neither should sink the whole index.

fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

fn strings_or_default<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
