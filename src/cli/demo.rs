// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Demo page generation.
//!
//! Writes a self-contained directory that shows the widget working against a
//! real index: the page markup the stock theme uses, the stylesheet that
//! toggles visibility on the `active` class, and an index. The WASM bundle is
//! not included; `cargo xtask wasm` produces it under `pkg/`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::loader::load_index_file;
use crate::types::IndexEntry;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>scour demo</title>
  <link rel="stylesheet" href="search.css">
</head>
<body>
  <header class="site-header">
    <div class="search-container">
      <input type="search" id="search-input" placeholder="Search..." autocomplete="off">
      <div id="search-results" class="search-results"></div>
    </div>
  </header>
  <main>
    <p>Focus the box to load <code>search_index.json</code>, then type two or more characters.</p>
  </main>
  <script type="module">
    import init, { initSearchWidget } from './pkg/scour.js';
    await init();
    initSearchWidget({ indexUrl: 'search_index.json' });
  </script>
</body>
</html>
"#;

const SEARCH_CSS: &str = r#".search-container {
  position: relative;
  max-width: 32rem;
}

#search-input {
  width: 100%;
  padding: 0.5rem 0.75rem;
  font-size: 1rem;
}

.search-results {
  display: none;
  position: absolute;
  left: 0;
  right: 0;
  max-height: 24rem;
  overflow-y: auto;
  background: #fff;
  border: 1px solid #ddd;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
  z-index: 10;
}

.search-results.active {
  display: block;
}

.search-result-item {
  padding: 0.5rem 0.75rem;
  border-bottom: 1px solid #eee;
}

.search-result-item a {
  font-weight: 600;
  text-decoration: none;
}

.search-result-item p {
  margin: 0.25rem 0 0;
  color: #666;
  font-size: 0.875rem;
}
"#;

fn entry(
    title: &str,
    url: &str,
    body: &str,
    description: &str,
    categories: &[&str],
    tags: &[&str],
    date: &str,
) -> IndexEntry {
    IndexEntry {
        title: title.to_string(),
        body: body.to_string(),
        description: description.to_string(),
        categories: categories.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        url: url.to_string(),
        date: date.to_string(),
    }
}

/// Entries shipped with the demo when no index is given.
pub fn sample_index() -> Vec<IndexEntry> {
    vec![
        entry(
            "Rust Guide",
            "/posts/rust-guide/",
            "Ownership and borrowing are the two ideas everything else in Rust leans on. \
             This guide walks through moves, references and lifetimes with small examples.",
            "",
            &["lang"],
            &["rust", "systems"],
            "2024-03-01",
        ),
        entry(
            "Writing a Static Site Generator",
            "/posts/static-site-generator/",
            "Markdown in, HTML out. Front matter, templates, taxonomies and a search index \
             written at build time so the site needs no server.",
            "Notes from building a blog engine from scratch.",
            &["web"],
            &["markdown", "templates"],
            "2024-02-12",
        ),
        entry(
            "Category Theory for the Working Programmer",
            "/posts/category-theory/",
            "Functors, monoids and why composition is the whole point.",
            "",
            &["math"],
            &["fp"],
            "2023-11-30",
        ),
        entry(
            "About",
            "/about/",
            "I write about systems programming, the web and the occasional bit of math.",
            "Who writes this blog.",
            &[],
            &[],
            "",
        ),
    ]
}

/// Write the demo files into `output`, creating it if needed.
///
/// `index` replaces the sample entries; it is parsed first so a broken index
/// fails here rather than silently in the browser.
pub fn write_demo(output: &Path, index: Option<&Path>) -> Result<Vec<PathBuf>> {
    let entries = match index {
        Some(path) => load_index_file(path)?,
        None => sample_index(),
    };

    fs::create_dir_all(output)?;

    let files = [
        ("index.html", INDEX_HTML.to_string()),
        ("search.css", SEARCH_CSS.to_string()),
        ("search_index.json", serde_json::to_string_pretty(&entries)?),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, contents) in files {
        let path = output.join(name);
        fs::write(&path, contents)?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
