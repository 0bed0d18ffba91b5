// ABOUTME: Biomechanical angle and fit-scoring engine for bike-fit analysis
// ABOUTME: Geometry primitives, per-frame extraction, aggregation, rule evaluation, ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bikefit Intelligence
//!
//! Pure, synchronous transformations from pose landmarks to a fit
//! assessment. Data flows one way through the modules:
//!
//! 1. [`geometry`]: vertex angle and segment-from-horizontal primitives
//! 2. [`angle_extractor`]: six cycling angles from one pose frame
//! 3. [`aggregation`]: pedal-stroke summary from many frames
//! 4. [`fit_rules`]: region scores, overall score, and recommendations
//! 5. [`ranking`]: most urgent recommendation first
//!
//! No module holds shared mutable state, so independent captures can be
//! analyzed concurrently without coordination.

/// Angle primitives on normalized 2-D points
pub mod geometry;

/// Per-frame cycling angle extraction
pub mod angle_extractor;

/// Pedal-stroke aggregation and optional smoothing
pub mod aggregation;

/// Ideal-range table configuration
pub mod config;

/// Data-driven fit rule evaluation
pub mod fit_rules;

/// Recommendation ordering by severity
pub mod ranking;

pub use aggregation::{aggregate_angles, smooth_angles};
pub use angle_extractor::{compute_frame_angles, compute_frame_angles_for_side, extract_all};
pub use config::{ConfigError, DisciplineRanges, IdealRange, IdealRangeTable};
pub use fit_rules::{evaluate_fit, FitEvaluation, FitRule, FIT_RULES};
pub use geometry::{segment_angle_from_horizontal, vertex_angle, Point2};
pub use ranking::rank_recommendations;
