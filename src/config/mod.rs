// ABOUTME: Environment-driven configuration for the bike-fit analysis pipeline and CLI
// ABOUTME: Reads BIKEFIT_* variables and loads the ideal-range table from disk or defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application configuration
//!
//! | variable                     | default   |
//! |------------------------------|-----------|
//! | `BIKEFIT_RANGES_PATH`        | built-in  |
//! | `BIKEFIT_DISCIPLINE`         | `road`    |
//! | `BIKEFIT_SMOOTHING_WINDOW`   | 0 (off)   |
//! | `BIKEFIT_PARALLEL_THRESHOLD` | 64        |
//! | `BIKEFIT_MIN_VALID_FRAMES`   | 1         |
//! | `BIKEFIT_OUTPUT_FORMAT`      | `json`    |
//!
//! Unparseable numbers fall back to the default.

use crate::formatters::OutputFormat;
use bikefit_core::constants::disciplines;
use bikefit_core::errors::{AppError, AppResult};
use bikefit_intelligence::IdealRangeTable;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

/// Default frame count at which extraction goes parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Default minimum number of measurable frames for an assessment
pub const DEFAULT_MIN_VALID_FRAMES: usize = 1;

/// Pipeline and output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Optional JSON ideal-range table replacing the built-in one
    pub ranges_path: Option<PathBuf>,
    /// Discipline used when the caller does not name one
    pub default_discipline: String,
    /// Moving-average window over per-frame angles; 0 or 1 disables it
    pub smoothing_window: usize,
    /// Frame count at which angle extraction runs on the rayon pool
    pub parallel_threshold: usize,
    /// Fewer measurable frames than this is refused as insufficient data
    pub min_valid_frames: usize,
    /// Report format
    pub output_format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ranges_path: None,
            default_discipline: disciplines::FALLBACK.to_owned(),
            smoothing_window: 0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            min_valid_frames: DEFAULT_MIN_VALID_FRAMES,
            output_format: OutputFormat::Json,
        }
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Load configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ranges_path: env::var("BIKEFIT_RANGES_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            default_discipline: env::var("BIKEFIT_DISCIPLINE")
                .ok()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.default_discipline),
            smoothing_window: env_usize("BIKEFIT_SMOOTHING_WINDOW", defaults.smoothing_window),
            parallel_threshold: env_usize(
                "BIKEFIT_PARALLEL_THRESHOLD",
                defaults.parallel_threshold,
            ),
            min_valid_frames: env_usize("BIKEFIT_MIN_VALID_FRAMES", defaults.min_valid_frames)
                .max(1),
            output_format: env::var("BIKEFIT_OUTPUT_FORMAT")
                .map_or(defaults.output_format, |s| OutputFormat::from_str_param(&s)),
        }
    }

    /// Ideal-range table from `ranges_path`, or the built-in table
    ///
    /// # Errors
    ///
    /// - `CONFIG_ERROR` when the path is a directory
    /// - `RESOURCE_NOT_FOUND` when the file does not exist
    /// - `STORAGE_ERROR` when the file cannot be read
    /// - `CONFIG_INVALID` when the file is not a usable table
    pub fn load_range_table(&self) -> AppResult<IdealRangeTable> {
        let Some(path) = &self.ranges_path else {
            debug!("Using built-in ideal-range table");
            return Ok(IdealRangeTable::builtin());
        };

        let details = serde_json::json!({ "path": path.display().to_string() });
        if path.is_dir() {
            return Err(AppError::config(format!(
                "BIKEFIT_RANGES_PATH {} is a directory, expected a JSON file",
                path.display()
            ))
            .with_details(details));
        }

        let json = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AppError::not_found(format!("ideal-range table {}", path.display()))
                    .with_details(details)
                    .with_source(e)
            } else {
                AppError::from(e).with_details(details)
            }
        })?;

        let table = IdealRangeTable::from_json_str(&json).map_err(|e| {
            AppError::config_invalid(format!(
                "ideal-range table {}: {e}",
                path.display()
            ))
            .with_source(e)
        })?;

        info!(
            path = %path.display(),
            disciplines = table.len(),
            "Loaded ideal-range table"
        );
        Ok(table)
    }
}
