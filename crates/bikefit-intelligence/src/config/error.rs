// ABOUTME: Configuration error types for ideal-range table parsing and validation
// ABOUTME: Defines error variants for malformed JSON, missing or duplicate disciplines, bad ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for ideal-range table validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range bounds out of order (e.g., `min >= max`)
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Required table entry is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse the table document
    #[error("Parse error: {0}")]
    Parse(String),

    /// Two discipline keys that are equal ignoring case and surrounding spaces
    #[error("Duplicate discipline: {0}")]
    DuplicateDiscipline(String),

    /// Negative or non-finite weight
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
