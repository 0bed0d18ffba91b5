// ABOUTME: Main library entry point for the bike-fit analysis application
// ABOUTME: Wires the fit engine to environment config, logging, and report formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bikefit
//!
//! Turns pose landmarks captured from a side-view cycling video into a
//! bike-fit assessment: pedal-stroke angle statistics, a 0-100 score per
//! body region, an overall score, and ranked adjustments.
//!
//! The numeric work lives in `bikefit-intelligence`; shared models and
//! errors live in `bikefit-core`. This crate adds:
//!
//! - **analysis**: the end-to-end pipeline returning a `FitAssessment`
//! - **config**: `BIKEFIT_*` environment settings and range-table loading
//! - **logging**: `tracing` subscriber setup
//! - **formatters**: JSON and plain-text reports
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bikefit::analysis::FitAnalyzer;
//! use bikefit::config::AppConfig;
//! use bikefit_core::errors::AppResult;
//! use bikefit_core::models::PoseSequence;
//!
//! fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env();
//!     let analyzer = FitAnalyzer::from_config(&config)?;
//!     let poses: PoseSequence = serde_json::from_str(&std::fs::read_to_string("poses.json")?)?;
//!     let assessment = analyzer.analyze(&poses, &config.default_discipline)?;
//!     println!("{}", assessment.score.overall);
//!     Ok(())
//! }
//! ```

/// End-to-end fit analysis pipeline
pub mod analysis;

/// Environment configuration
pub mod config;

/// Report output formats
pub mod formatters;

/// Logging setup
pub mod logging;

pub use analysis::{FitAnalyzer, FitAssessment};
pub use config::AppConfig;
pub use formatters::{format_output, OutputFormat};
