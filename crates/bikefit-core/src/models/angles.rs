// ABOUTME: Joint angle records - the per-frame angle set and the pedal-stroke summary
// ABOUTME: FrameAngles holds one frame's six angles; CyclingAngles aggregates a capture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// The six angles measured on every complete frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleKind {
    /// Hip-knee-ankle angle at the knee (openness of the knee)
    KneeExtension,
    /// Shoulder-hip-knee angle at the hip (torso to thigh)
    HipAngle,
    /// Hip-to-shoulder segment against horizontal (torso tilt)
    BackAngle,
    /// Knee-ankle-toe angle at the ankle
    AnkleAngle,
    /// Shoulder-elbow-wrist angle at the elbow
    ElbowAngle,
    /// Hip-shoulder-elbow angle at the shoulder
    ShoulderAngle,
}

impl AngleKind {
    /// Every angle kind in extraction order
    pub const ALL: [Self; 6] = [
        Self::KneeExtension,
        Self::HipAngle,
        Self::BackAngle,
        Self::AnkleAngle,
        Self::ElbowAngle,
        Self::ShoulderAngle,
    ];

    /// Key used in ideal-range tables and serialized angle maps
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::KneeExtension => "knee_extension",
            Self::HipAngle => "hip_angle",
            Self::BackAngle => "back_angle",
            Self::AnkleAngle => "ankle_angle",
            Self::ElbowAngle => "elbow_angle",
            Self::ShoulderAngle => "shoulder_angle",
        }
    }
}

impl fmt::Display for AngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngleKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown angle '{s}'. Valid options: knee_extension, hip_angle, back_angle, ankle_angle, elbow_angle, shoulder_angle"
                ))
            })
    }
}

/// Angles of a single pose frame, in degrees
///
/// Produced fresh for every complete frame and consumed by the pedal-stroke
/// aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameAngles {
    /// Knee extension (0-180)
    pub knee_extension: f64,
    /// Hip angle (0-180)
    pub hip_angle: f64,
    /// Back angle from horizontal (0-90)
    pub back_angle: f64,
    /// Ankle angle (0-180)
    pub ankle_angle: f64,
    /// Elbow angle (0-180)
    pub elbow_angle: f64,
    /// Shoulder angle (0-180)
    pub shoulder_angle: f64,
}

impl FrameAngles {
    /// Value of one angle
    #[must_use]
    pub const fn get(&self, kind: AngleKind) -> f64 {
        match kind {
            AngleKind::KneeExtension => self.knee_extension,
            AngleKind::HipAngle => self.hip_angle,
            AngleKind::BackAngle => self.back_angle,
            AngleKind::AnkleAngle => self.ankle_angle,
            AngleKind::ElbowAngle => self.elbow_angle,
            AngleKind::ShoulderAngle => self.shoulder_angle,
        }
    }

    /// Mutable access to one angle
    pub fn get_mut(&mut self, kind: AngleKind) -> &mut f64 {
        match kind {
            AngleKind::KneeExtension => &mut self.knee_extension,
            AngleKind::HipAngle => &mut self.hip_angle,
            AngleKind::BackAngle => &mut self.back_angle,
            AngleKind::AnkleAngle => &mut self.ankle_angle,
            AngleKind::ElbowAngle => &mut self.elbow_angle,
            AngleKind::ShoulderAngle => &mut self.shoulder_angle,
        }
    }

    /// `(kind, value)` pairs in extraction order
    pub fn iter(&self) -> impl Iterator<Item = (AngleKind, f64)> + '_ {
        AngleKind::ALL.iter().map(move |kind| (*kind, self.get(*kind)))
    }
}

/// Key angles measured across the pedal stroke
///
/// `Default` is the all-zero sentinel returned when no frame could be
/// measured; callers must check [`CyclingAngles::is_empty_sentinel`] before
/// presenting a score derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CyclingAngles {
    /// Smallest knee angle through the stroke (bottom dead centre)
    pub knee_extension_min: f64,
    /// Largest knee angle through the stroke
    pub knee_extension_max: f64,
    /// Maximum knee bend, `180 - knee_extension_min`
    pub knee_flexion_max: f64,
    /// Most closed torso-thigh angle (top dead centre)
    pub hip_angle_min: f64,
    /// Most open torso-thigh angle
    pub hip_angle_max: f64,
    /// Mean torso angle from horizontal
    pub back_angle: f64,
    /// Minimum ankle angle through the stroke
    pub ankle_angle_min: f64,
    /// Maximum ankle angle through the stroke
    pub ankle_angle_max: f64,
    /// Mean upper arm to torso angle
    pub shoulder_angle: f64,
    /// Mean elbow bend
    pub elbow_angle: f64,
}

impl CyclingAngles {
    /// Midpoint of the ankle range of motion
    #[must_use]
    pub fn ankle_midpoint(&self) -> f64 {
        (self.ankle_angle_min + self.ankle_angle_max) / 2.0
    }

    /// Whether this is the zero-valued "insufficient data" sentinel
    #[must_use]
    pub fn is_empty_sentinel(&self) -> bool {
        *self == Self::default()
    }
}
