// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Fotoapp.

use thiserror::Error;

/// Top-level error type for all Fotoapp operations.
#[derive(Debug, Error)]
pub enum FotoError {
    // -- Acquisition errors --
    #[error("failed to fetch image: {0}")]
    Fetch(String),

    #[error("image decoding failed: {0}")]
    Decode(String),

    // -- Transform errors --
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("image encoding failed: {0}")]
    Encode(String),

    #[error("render target failed: {0}")]
    Render(String),

    // -- Configuration / persistence --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FotoError>;
