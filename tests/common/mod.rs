//! Shared test utilities and fixtures.

#![allow(dead_code)]

use scour::{load_index_file, IndexEntry, SearchWidget};
use std::path::PathBuf;

pub use scour::testing::{make_entry, rust_guide, RecordingView};

/// Path to the fixture index, resolved from the crate root.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/search_index.json")
}

/// Raw fixture payload, as the browser would receive it.
pub fn fixture_payload() -> String {
    std::fs::read_to_string(fixture_path()).expect("Failed to read fixture index")
}

/// Parsed fixture entries.
pub fn load_fixture() -> Vec<IndexEntry> {
    load_index_file(&fixture_path()).expect("Fixture index should parse")
}

/// Widget that has been focused and has received the fixture index.
pub fn loaded_widget() -> SearchWidget<RecordingView> {
    let mut widget = SearchWidget::new(RecordingView::default());
    assert!(widget.on_focus(), "first focus should request the index");
    widget.on_index_response(Ok(fixture_payload()));
    widget
}

/// `count` entries that all contain `word` in their body.
pub fn corpus_with(word: &str, count: usize) -> Vec<IndexEntry> {
    (0..count)
        .map(|i| make_entry(&format!("Entry {}", i), &format!("some {} text", word)))
        .collect()
}

/// Titles of a match set, for readable assertions.
pub fn titles(matches: &[&IndexEntry]) -> Vec<String> {
    matches.iter().map(|e| e.title.clone()).collect()
}
