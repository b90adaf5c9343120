//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::render::ResultsView;
use crate::types::IndexEntry;

/// Create an entry with a title and body; the URL is derived from the title.
///
/// This is the canonical implementation used across all tests.
pub fn make_entry(title: &str, body: &str) -> IndexEntry {
    IndexEntry {
        title: title.to_string(),
        body: body.to_string(),
        url: format!("/{}", title.to_lowercase().replace(' ', "-")),
        ..Default::default()
    }
}

/// The single-entry fixture from the widget's end-to-end scenario.
pub fn rust_guide() -> IndexEntry {
    IndexEntry {
        title: "Rust Guide".to_string(),
        body: "ownership and borrowing".to_string(),
        description: String::new(),
        categories: vec!["lang".to_string()],
        tags: vec!["systems".to_string()],
        url: "/rust".to_string(),
        date: String::new(),
    }
}

/// Results container that records what the widget did to it.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub markup: String,
    pub active: bool,
    pub renders: usize,
}

impl ResultsView for RecordingView {
    fn set_markup(&mut self, markup: &str) {
        self.markup = markup.to_string();
        self.renders += 1;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
