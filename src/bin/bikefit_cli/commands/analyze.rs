// ABOUTME: Analyze command - full fit assessment from a pose capture file
// ABOUTME: Loads poses plus optional rider and bike files and prints the assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::{parse_side, print_report, read_json};
use bikefit::analysis::FitAnalyzer;
use bikefit::config::AppConfig;
use bikefit::formatters::OutputFormat;
use bikefit_core::errors::AppResult;
use bikefit_core::models::{BikeGeometry, PoseSequence, RiderMeasurements};
use std::path::PathBuf;
use tracing::info;

/// Inputs of the `analyze` command
pub struct AnalyzeArgs {
    /// Pose sequence file
    pub poses: PathBuf,
    /// Discipline override
    pub discipline: Option<String>,
    /// Rider measurements file
    pub rider: Option<PathBuf>,
    /// Bike geometry file
    pub bike: Option<PathBuf>,
    /// `left` or `right`
    pub side: String,
}

/// Run a fit assessment and print it
pub fn run(config: &AppConfig, args: &AnalyzeArgs, format: OutputFormat) -> AppResult<()> {
    let side = parse_side(&args.side)?;
    let sequence: PoseSequence = read_json(&args.poses, "poses")?;
    let rider: Option<RiderMeasurements> = args
        .rider
        .as_deref()
        .map(|path| read_json(path, "rider"))
        .transpose()?;
    let bike: Option<BikeGeometry> = args
        .bike
        .as_deref()
        .map(|path| read_json(path, "bike"))
        .transpose()?;

    // --discipline wins over the rider's riding style, which wins over the environment
    let discipline = args.discipline.clone().unwrap_or_else(|| {
        rider.as_ref().map_or_else(
            || config.default_discipline.clone(),
            |r| r.riding_style.as_key().to_owned(),
        )
    });

    info!(
        poses = %args.poses.display(),
        frames = sequence.frames.len(),
        discipline = %discipline,
        side = %side,
        "Analyzing pose capture"
    );

    let analyzer = FitAnalyzer::from_config(config)?.with_side(side);
    let mut assessment = analyzer.analyze(&sequence, &discipline)?;
    if let Some(rider) = &rider {
        assessment = assessment.with_rider(rider);
    }
    if let Some(bike) = &bike {
        assessment = assessment.with_bike(bike);
    }

    print_report(&assessment, format)
}
