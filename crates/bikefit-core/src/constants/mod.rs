// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pose thresholds, geometry guards, scoring factors, and validation ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Pose landmark quality thresholds
pub mod pose {
    /// Minimum landmark visibility for a frame to count as complete (exclusive)
    pub const MIN_LANDMARK_VISIBILITY: f64 = 0.5;

    /// Default capture frame rate when the source does not report one
    pub const DEFAULT_FPS: f64 = 30.0;
}

/// Numerical guards for the geometric primitives
pub mod geometry {
    /// Added to the vector-norm product so coincident points never divide by zero
    pub const NORM_EPSILON: f64 = 1e-8;

    /// Straight angle in degrees, used to derive knee flexion from extension
    pub const STRAIGHT_ANGLE_DEG: f64 = 180.0;
}

/// Region scoring and severity classification
pub mod scoring {
    /// Score of a value inside its ideal range
    pub const MAX_REGION_SCORE: f64 = 100.0;

    /// Points deducted per full range-width of deviation
    pub const DEVIATION_PENALTY_FACTOR: f64 = 40.0;

    /// Lower bound applied to the range width before dividing
    pub const MIN_RANGE_WIDTH: f64 = 1.0;

    /// Deviation ratio up to which a finding is minor
    pub const MINOR_RATIO_LIMIT: f64 = 0.5;

    /// Deviation ratio up to which a finding is moderate (critical beyond)
    pub const MODERATE_RATIO_LIMIT: f64 = 1.0;

    /// Overall score threshold for the excellent category
    pub const EXCELLENT_THRESHOLD: f64 = 90.0;

    /// Overall score threshold for the good category
    pub const GOOD_THRESHOLD: f64 = 75.0;

    /// Overall score threshold for the fair category
    pub const FAIR_THRESHOLD: f64 = 55.0;
}

/// Default per-angle weights used when a discipline entry omits one
pub mod weights {
    /// Knee extension (saddle height)
    pub const KNEE_EXTENSION: f64 = 30.0;
    /// Hip angle (saddle setback)
    pub const HIP_ANGLE: f64 = 20.0;
    /// Back angle (handlebar position)
    pub const BACK_ANGLE: f64 = 15.0;
    /// Ankle angle (cleat position)
    pub const ANKLE_ANGLE: f64 = 10.0;
    /// Elbow angle (stem length / reach)
    pub const ELBOW_ANGLE: f64 = 5.0;
}

/// Adjustment heuristics
pub mod adjustments {
    /// Millimetres of saddle travel per degree of knee extension deviation.
    /// Rough heuristic kept as-is until a biomechanical derivation exists.
    pub const SADDLE_MM_PER_DEGREE: f64 = 2.5;

    /// `LeMond` saddle height factor applied to the inseam
    pub const LEMOND_SADDLE_FACTOR: f64 = 0.883;
}

/// Discipline table keys
pub mod disciplines {
    /// Universal fallback discipline for unknown keys
    pub const FALLBACK: &str = "road";
    /// Road racing / endurance
    pub const ROAD: &str = "road";
    /// Time trial / triathlon
    pub const TIME_TRIAL: &str = "tt";
    /// Mountain bike
    pub const MOUNTAIN: &str = "mtb";
    /// Gravel / all-road
    pub const GRAVEL: &str = "gravel";
    /// Upright commuting
    pub const COMMUTE: &str = "commute";
}

/// Plausibility ranges for rider body measurements as `(min, max)`
pub mod rider_ranges {
    /// Height in cm
    pub const HEIGHT_CM: (f64, f64) = (100.0, 250.0);
    /// Weight in kg
    pub const WEIGHT_KG: (f64, f64) = (30.0, 200.0);
    /// Inseam in cm
    pub const INSEAM_CM: (f64, f64) = (50.0, 120.0);
    /// EU shoe size
    pub const FOOT_SIZE_EU: (f64, f64) = (30.0, 55.0);
    /// Arm length in cm
    pub const ARM_LENGTH_CM: (f64, f64) = (40.0, 90.0);
    /// Torso length in cm
    pub const TORSO_LENGTH_CM: (f64, f64) = (30.0, 80.0);
    /// Shoulder width in cm
    pub const SHOULDER_WIDTH_CM: (f64, f64) = (25.0, 60.0);
}

/// Plausibility ranges for bike geometry as `(min, max)`
pub mod bike_ranges {
    /// Seat tube length in cm
    pub const FRAME_SIZE_CM: (f64, f64) = (40.0, 70.0);
    /// Bottom bracket to saddle top in cm
    pub const SADDLE_HEIGHT_CM: (f64, f64) = (55.0, 90.0);
    /// Horizontal saddle offset behind the bottom bracket in cm
    pub const SADDLE_SETBACK_CM: (f64, f64) = (-5.0, 15.0);
    /// Saddle nose to handlebar centre in cm
    pub const HANDLEBAR_REACH_CM: (f64, f64) = (30.0, 70.0);
    /// Saddle to handlebar drop in cm (positive = bars below saddle)
    pub const HANDLEBAR_DROP_CM: (f64, f64) = (-5.0, 20.0);
    /// Crank arm length in mm
    pub const CRANK_LENGTH_MM: (f64, f64) = (140.0, 185.0);
    /// Stem length in mm
    pub const STEM_LENGTH_MM: (f64, f64) = (50.0, 150.0);
    /// Stem angle in degrees (negative = drop)
    pub const STEM_ANGLE_DEG: (f64, f64) = (-20.0, 20.0);
}
