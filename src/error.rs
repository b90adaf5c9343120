// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for scour.
//!
//! The widget never shows these to a visitor. Load failures are logged and
//! collapse into an empty index; the CLI is the only place they reach a human.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScourError {
    #[error("Index request failed: {0}")]
    Transport(String),

    #[error("Index request returned HTTP {0}")]
    Status(u16),

    #[error("Invalid index payload: {0}")]
    Parse(String),

    #[error("Missing element #{0}")]
    MissingElement(String),

    #[error("No browser window or document")]
    NoDocument,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ScourError {
    fn from(e: serde_json::Error) -> Self {
        ScourError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScourError>;
