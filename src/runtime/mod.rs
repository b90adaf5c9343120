// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings for the browser.
//!
//! The widget logic is host-agnostic; this is where it meets the DOM. Only
//! compiled with the `wasm` feature, so native builds (CLI, tests, benches)
//! never pull in web-sys.

#[cfg(feature = "wasm")]
pub mod wasm;
