// ABOUTME: Shared helpers for bikefit-cli commands
// ABOUTME: JSON file loading with error context and report printing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bikefit::formatters::{format_output, OutputFormat, TextReport};
use bikefit_core::errors::{AppError, AppResult};
use bikefit_core::models::BodySide;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> AppResult<T> {
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::from(e)
            .with_details(serde_json::json!({ "path": path.display().to_string(), "input": what }))
    })?;
    let value = serde_json::from_str(&text).map_err(|e| {
        let message = format!("{what} file {}: {e}", path.display());
        AppError::from(e).with_details(serde_json::json!({ "message": message }))
    })?;
    debug!(path = %path.display(), input = what, "Loaded input file");
    Ok(value)
}

/// Parse a `--side` value
pub fn parse_side(side: &str) -> AppResult<BodySide> {
    match side.trim().to_lowercase().as_str() {
        "left" | "l" => Ok(BodySide::Left),
        "right" | "r" => Ok(BodySide::Right),
        other => Err(AppError::invalid_input(format!(
            "Unknown side: '{other}'. Valid options: left, right"
        ))),
    }
}

/// Print a report to stdout in the requested format
pub fn print_report<T: Serialize + TextReport>(report: &T, format: OutputFormat) -> AppResult<()> {
    let output = format_output(report, format)
        .map_err(|e| AppError::serialization(e.message.clone()).with_source(e))?;
    println!("{}", output.data);
    Ok(())
}
