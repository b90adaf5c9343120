//! Client-side substring search for static sites.
//!
//! A site generator writes `search_index.json`; this crate is the other end.
//! Compiled to WebAssembly, it attaches to a search box, fetches the index the
//! first time the box is focused, and on every keystroke lists up to ten pages
//! containing every word typed.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  loader.rs  │────▶│  search.rs   │────▶│  render.rs  │
//! │ (IndexState,│     │  (search,    │     │ (markup,    │
//! │  parse)     │     │   ≤10 hits)  │     │  visibility)│
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     widget.rs                        │
//! │   (focus / input / outside click / Escape handlers)  │
//! └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!                ┌───────────────────────┐
//!                │    runtime/wasm.rs    │
//!                │ (DOM listeners, fetch)│
//!                └───────────────────────┘
//! ```
//!
//! Nothing above `runtime/` touches the browser, so the whole widget runs
//! under `cargo test` with a recording [`ResultsView`].
//!
//! # Usage
//!
//! ```
//! use scour::{render_markup, search, IndexLoader};
//!
//! let mut loader = IndexLoader::new();
//! assert!(loader.begin());
//! loader.finish(Ok(r#"[{"title": "Rust Guide", "body": "ownership", "url": "/rust"}]"#.into()));
//!
//! let matches = search(loader.entries(), "own");
//! assert!(render_markup(&matches).contains(r#"<a href="/rust">Rust Guide</a>"#));
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod runtime;
mod search;
pub mod testing;
mod types;
mod utils;
pub mod widget;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::WidgetConfig;
pub use error::{Result, ScourError};
pub use loader::{load_index_file, parse_index, IndexLoader, DEFAULT_INDEX_URL};
pub use render::{
    escape_html, render_markup, snippet, ResultRenderer, ResultsView, ELLIPSIS, EXCERPT_CHARS,
    NO_RESULTS_MARKUP,
};
pub use search::{matches_all, search, MAX_RESULTS, MIN_QUERY_CHARS};
pub use types::{IndexEntry, IndexState};
pub use utils::{normalize, split_terms};
pub use widget::{attach_outcome, SearchWidget};
