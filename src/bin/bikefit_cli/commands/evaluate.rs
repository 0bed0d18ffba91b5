// ABOUTME: Evaluate command - scores an already-aggregated angle summary
// ABOUTME: Skips pose extraction and prints region scores with recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::{print_report, read_json};
use bikefit::analysis::FitAnalyzer;
use bikefit::config::AppConfig;
use bikefit::formatters::OutputFormat;
use bikefit_core::errors::AppResult;
use bikefit_core::models::CyclingAngles;
use std::path::Path;

/// Evaluate a `CyclingAngles` JSON file and print the result
pub fn run(
    config: &AppConfig,
    angles_path: &Path,
    discipline: Option<&str>,
    format: OutputFormat,
) -> AppResult<()> {
    let angles: CyclingAngles = read_json(angles_path, "angles")?;
    let discipline = discipline.unwrap_or(&config.default_discipline);

    let evaluation = FitAnalyzer::from_config(config)?.evaluate(&angles, discipline)?;
    print_report(&evaluation, format)
}
