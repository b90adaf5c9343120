// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning matches into markup.
//!
//! Rendering is split in two. [`render_markup`] is a pure function from a match
//! set to an HTML string, which is what the tests and the CLI look at.
//! [`ResultRenderer`] pushes that string into a [`ResultsView`] and flips the
//! container's visibility. The browser implements `ResultsView` over a DOM
//! element; tests implement it over a struct.
//!
//! Every render replaces the container's markup wholesale. Ten results is not
//! worth diffing.

use crate::types::IndexEntry;
use crate::utils::truncate_chars;

/// Characters of body text shown when an entry has no description.
pub const EXCERPT_CHARS: usize = 120;

/// Appended to body excerpts.
pub const ELLIPSIS: &str = "...";

/// Markup shown for an empty match set.
pub const NO_RESULTS_MARKUP: &str =
    r#"<div class="search-result-item"><p>No results found</p></div>"#;

/// The results container, as far as the renderer is concerned.
pub trait ResultsView {
    /// Replace the container's entire inner markup.
    fn set_markup(&mut self, markup: &str);

    /// Show or hide the container.
    fn set_active(&mut self, active: bool);
}

/// Escape text for an HTML text node or a double- or single-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Snippet line for an entry: its description, or the head of its body.
///
/// The ellipsis is appended even when the body is shorter than the excerpt.
pub fn snippet(entry: &IndexEntry) -> String {
    if entry.description.is_empty() {
        format!("{}{}", truncate_chars(&entry.body, EXCERPT_CHARS), ELLIPSIS)
    } else {
        entry.description.clone()
    }
}

/// Markup for a match set.
pub fn render_markup(matches: &[&IndexEntry]) -> String {
    if matches.is_empty() {
        return NO_RESULTS_MARKUP.to_string();
    }

    let mut html = String::new();
    for entry in matches {
        html.push_str(r#"<div class="search-result-item"><a href=""#);
        html.push_str(&escape_html(&entry.url));
        html.push_str(r#"">"#);
        html.push_str(&escape_html(&entry.title));
        html.push_str("</a><p>");
        html.push_str(&escape_html(&snippet(entry)));
        html.push_str("</p></div>");
    }
    html
}

/// Owns the results container and its visible/hidden flag.
#[derive(Debug)]
pub struct ResultRenderer<V> {
    view: V,
    visible: bool,
}

impl<V: ResultsView> ResultRenderer<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            visible: false,
        }
    }

    /// Replace the container markup with `matches` and show it.
    pub fn render(&mut self, matches: &[&IndexEntry]) {
        self.view.set_markup(&render_markup(matches));
        self.visible = true;
        self.view.set_active(true);
    }

    /// Hide the container. The last markup stays in place.
    pub fn hide(&mut self) {
        self.visible = false;
        self.view.set_active(false);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
