// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search widget: loader, matcher and renderer behind four event handlers.
//!
//! This is a flat set of reactions, not a state machine. The only mutable
//! pieces are the index lifecycle (owned by [`IndexLoader`]) and the
//! visible flag (owned by [`ResultRenderer`]). Handlers that need the host to
//! do something it alone can do (issue a request, blur an element) say so in
//! their return value instead of reaching for the DOM.
//!
//! A query typed before the index arrives matches nothing and shows
//! "No results found". When the index lands later, nothing is recomputed; the
//! next keystroke sees it.

use crate::error::{Result, ScourError};
use crate::loader::IndexLoader;
use crate::render::{ResultRenderer, ResultsView};
use crate::search::{search, MIN_QUERY_CHARS};
use crate::utils::char_len;

/// Widget state shared by the event handlers.
#[derive(Debug)]
pub struct SearchWidget<V> {
    loader: IndexLoader,
    renderer: ResultRenderer<V>,
}

impl<V: ResultsView> SearchWidget<V> {
    pub fn new(view: V) -> Self {
        Self {
            loader: IndexLoader::new(),
            renderer: ResultRenderer::new(view),
        }
    }

    /// Input gained focus. Returns true when the host should fetch the index.
    pub fn on_focus(&mut self) -> bool {
        self.loader.begin()
    }

    /// The index fetch completed, one way or another.
    pub fn on_index_response(&mut self, outcome: Result<String>) {
        self.loader.finish(outcome);
    }

    /// Input value changed.
    pub fn on_input(&mut self, value: &str) {
        if char_len(value) < MIN_QUERY_CHARS {
            self.renderer.hide();
            return;
        }
        let matches = search(self.loader.entries(), value);
        self.renderer.render(&matches);
    }

    /// A click landed somewhere in the document.
    ///
    /// `inside_widget` is true when the target is the input, the results
    /// container, or a descendant of either.
    pub fn on_document_click(&mut self, inside_widget: bool) {
        if !inside_widget {
            self.renderer.hide();
        }
    }

    /// Key pressed in the input. Returns true when the host should blur it.
    pub fn on_keydown(&mut self, key: &str) -> bool {
        if key == "Escape" {
            self.renderer.hide();
            true
        } else {
            false
        }
    }

    pub fn loader(&self) -> &IndexLoader {
        &self.loader
    }

    pub fn is_visible(&self) -> bool {
        self.renderer.is_visible()
    }

    pub fn view(&self) -> &V {
        self.renderer.view()
    }
}

/// What `initSearchWidget` reports for an attach attempt.
///
/// A page without the search box (or without a document at all) is not an
/// error: the widget attaches nothing and the page gets `false`.
pub fn attach_outcome(attached: Result<()>) -> Result<bool> {
    match attached {
        Ok(()) => Ok(true),
        Err(ScourError::MissingElement(id)) => {
            log::debug!("search widget not attached: #{} not found", id);
            Ok(false)
        }
        Err(ScourError::NoDocument) => {
            log::debug!("search widget not attached: no document");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
