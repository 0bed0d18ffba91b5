// ABOUTME: Rider body measurements and riding style selection
// ABOUTME: Validates measurements against plausible ranges and estimates saddle height
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::adjustments::LEMOND_SADDLE_FACTOR;
use crate::constants::disciplines;
use crate::constants::rider_ranges;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Self-reported flexibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flexibility {
    /// Limited hamstring / lower-back flexibility
    Low,
    /// Average flexibility
    #[default]
    Medium,
    /// Above-average flexibility
    High,
}

/// Riding discipline, which selects the ideal angle ranges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RidingStyle {
    /// Road racing / endurance
    #[default]
    Road,
    /// Time trial / triathlon
    #[serde(alias = "time-trial", alias = "time_trial")]
    Tt,
    /// Mountain bike
    #[serde(alias = "mountain")]
    Mtb,
    /// Gravel / all-road
    Gravel,
    /// Upright commuting
    Commute,
}

impl RidingStyle {
    /// Every supported discipline
    pub const ALL: [Self; 5] = [
        Self::Road,
        Self::Tt,
        Self::Mtb,
        Self::Gravel,
        Self::Commute,
    ];

    /// Key of this discipline in the ideal-range table
    #[must_use]
    pub const fn as_key(&self) -> &'static str {
        match self {
            Self::Road => disciplines::ROAD,
            Self::Tt => disciplines::TIME_TRIAL,
            Self::Mtb => disciplines::MOUNTAIN,
            Self::Gravel => disciplines::GRAVEL,
            Self::Commute => disciplines::COMMUTE,
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Road => "Road",
            Self::Tt => "Time Trial",
            Self::Mtb => "Mountain",
            Self::Gravel => "Gravel",
            Self::Commute => "Commute",
        }
    }
}

impl fmt::Display for RidingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for RidingStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "road" => Ok(Self::Road),
            "tt" | "time-trial" | "time_trial" | "triathlon" => Ok(Self::Tt),
            "mtb" | "mountain" => Ok(Self::Mtb),
            "gravel" => Ok(Self::Gravel),
            "commute" => Ok(Self::Commute),
            other => Err(AppError::invalid_input(format!(
                "Unknown riding style: '{other}'. Valid options: road, tt, mtb, gravel, commute"
            ))),
        }
    }
}

/// Body measurements collected for a fit session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiderMeasurements {
    /// Standing height in cm
    pub height_cm: f64,
    /// Body weight in kg
    pub weight_kg: f64,
    /// Inseam in cm
    pub inseam_cm: f64,
    /// EU shoe size
    pub foot_size_eu: f64,
    /// Arm length in cm
    pub arm_length_cm: f64,
    /// Torso length in cm
    pub torso_length_cm: f64,
    /// Shoulder width in cm
    pub shoulder_width_cm: f64,
    /// Self-reported flexibility
    pub flexibility: Flexibility,
    /// Riding discipline
    pub riding_style: RidingStyle,
    /// Optional rider name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RiderMeasurements {
    /// Validation error messages; empty when every measurement is plausible
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let checks = [
            ("height_cm", self.height_cm, rider_ranges::HEIGHT_CM),
            ("weight_kg", self.weight_kg, rider_ranges::WEIGHT_KG),
            ("inseam_cm", self.inseam_cm, rider_ranges::INSEAM_CM),
            ("foot_size_eu", self.foot_size_eu, rider_ranges::FOOT_SIZE_EU),
            ("arm_length_cm", self.arm_length_cm, rider_ranges::ARM_LENGTH_CM),
            ("torso_length_cm", self.torso_length_cm, rider_ranges::TORSO_LENGTH_CM),
            (
                "shoulder_width_cm",
                self.shoulder_width_cm,
                rider_ranges::SHOULDER_WIDTH_CM,
            ),
        ];

        checks
            .iter()
            .filter(|(_, value, (lo, hi))| !(*lo..=*hi).contains(value))
            .map(|(field, value, (lo, hi))| {
                format!("{field}: {value} is outside the valid range [{lo}, {hi}]")
            })
            .collect()
    }

    /// Whether every measurement is plausible
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// `LeMond` saddle height estimate in cm (inseam x 0.883), one decimal
    #[must_use]
    pub fn estimated_saddle_height_cm(&self) -> f64 {
        (self.inseam_cm * LEMOND_SADDLE_FACTOR * 10.0).round_ties_even() / 10.0
    }

    /// Validate and return `self`, or every problem as one error
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` listing every implausible measurement
    pub fn validated(self) -> Result<Self, AppError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            debug!(problems = errors.len(), "Rejected rider measurements");
            Err(AppError::value_out_of_range(errors.join("; "))
                .with_details(serde_json::json!({ "errors": errors })))
        }
    }
}
