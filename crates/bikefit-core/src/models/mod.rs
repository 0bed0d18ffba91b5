// ABOUTME: Core data models for pose capture, angle summaries, and fit results
// ABOUTME: Re-exports pose, angle, fit score, recommendation, rider, and bike types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every model here is a plain value: produced once by one pipeline stage and
//! never mutated by another. `CyclingAngles`, `FitScore`, and
//! `Recommendation` are the only types that cross from the engine to the
//! display layer.

/// Landmarks, pose frames, and pose sequences
pub mod pose;

/// Per-frame angle sets and the pedal-stroke summary
pub mod angles;

/// Fit score and category
pub mod fit;

/// Severity, fit components, and recommendations
pub mod recommendation;

/// Rider measurements and riding style
pub mod rider;

/// Bike geometry
pub mod bike;

pub use angles::{AngleKind, CyclingAngles, FrameAngles};
pub use bike::BikeGeometry;
pub use fit::{FitCategory, FitScore};
pub use pose::{BodySide, Joint, Landmark, PoseFrame, PoseSequence};
pub use recommendation::{FitComponent, Recommendation, Severity};
pub use rider::{Flexibility, RiderMeasurements, RidingStyle};
