// ABOUTME: Bikefit CLI - command-line front end for the bike-fit analysis engine
// ABOUTME: Analyzes pose captures, evaluates angle summaries, and lists ideal ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Analyze a pose capture for a road bike
//! bikefit-cli analyze --poses capture.json --discipline road
//!
//! # Include rider and bike measurements, print a text report
//! bikefit-cli --format text analyze --poses capture.json --rider rider.json --bike bike.json
//!
//! # Score an aggregated angle summary
//! bikefit-cli evaluate --angles angles.json --discipline tt
//!
//! # Show the ideal ranges in use
//! bikefit-cli ranges --discipline mtb
//! ```
//!
//! Reports go to stdout, logs to stderr. On failure the process exits with
//! a code derived from the error category.

mod commands;
mod helpers;

use bikefit::config::AppConfig;
use bikefit::formatters::OutputFormat;
use bikefit::logging::LoggingConfig;
use bikefit_core::errors::{AppResult, ErrorResponse};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "bikefit-cli",
    about = "Bike fit analysis from pose landmarks",
    long_about = "Scores a rider's position from side-view pose landmarks and recommends saddle, handlebar, cleat, and stem adjustments."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format: json or text (overrides BIKEFIT_OUTPUT_FORMAT)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze a pose capture (JSON `PoseSequence`)
    Analyze {
        /// Pose sequence JSON file
        #[arg(long)]
        poses: PathBuf,

        /// Riding discipline (road, tt, mtb, gravel, commute)
        #[arg(long)]
        discipline: Option<String>,

        /// Rider measurements JSON file
        #[arg(long)]
        rider: Option<PathBuf>,

        /// Bike geometry JSON file
        #[arg(long)]
        bike: Option<PathBuf>,

        /// Body side facing the camera (left or right)
        #[arg(long, default_value = "left")]
        side: String,
    },

    /// Evaluate an aggregated angle summary (JSON `CyclingAngles`)
    Evaluate {
        /// Angle summary JSON file
        #[arg(long)]
        angles: PathBuf,

        /// Riding discipline
        #[arg(long)]
        discipline: Option<String>,
    },

    /// Show the ideal-range table in use
    Ranges {
        /// Only this discipline
        #[arg(long)]
        discipline: Option<String>,
    },
}

fn run(cli: Cli, config: &AppConfig) -> AppResult<()> {
    let format = cli
        .format
        .as_deref()
        .map_or(config.output_format, OutputFormat::from_str_param);

    match cli.command {
        Command::Analyze {
            poses,
            discipline,
            rider,
            bike,
            side,
        } => commands::analyze::run(
            config,
            &commands::analyze::AnalyzeArgs {
                poses,
                discipline,
                rider,
                bike,
                side,
            },
            format,
        ),
        Command::Evaluate { angles, discipline } => {
            commands::evaluate::run(config, &angles, discipline.as_deref(), format)
        }
        Command::Ranges { discipline } => {
            commands::ranges::run(config, discipline.as_deref(), format)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    let config = AppConfig::from_env();

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            let exit = u8::try_from(e.code.exit_code()).unwrap_or(1);
            let response = ErrorResponse::from(e);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}", response.error.message),
            }
            ExitCode::from(exit)
        }
    }
}
