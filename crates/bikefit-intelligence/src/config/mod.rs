// ABOUTME: Configuration module for bikefit-intelligence crate
// ABOUTME: Re-exports the ideal-range table types and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Discipline-keyed ideal ranges
pub mod ideal_ranges;

pub use error::ConfigError;
pub use ideal_ranges::{DisciplineRanges, IdealRange, IdealRangeTable};
