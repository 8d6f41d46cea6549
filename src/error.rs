// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for wattscan
//!
//! This module defines all error types used throughout the application.
//!
//! Heuristic misses are deliberately not represented here: a report with no
//! detectable CPU figure yields an absent signal value, not an error.

use thiserror::Error;

/// Main error type for wattscan operations
#[derive(Error, Debug)]
pub enum WattscanError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for wattscan operations
pub type Result<T> = std::result::Result<T, WattscanError>;
