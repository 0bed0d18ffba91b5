// ABOUTME: Bike geometry measurements recorded for a fit session
// ABOUTME: Zero means "not measured"; only measured values are range-checked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::bike_ranges;
use serde::{Deserialize, Serialize};

/// Core bike geometry measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BikeGeometry {
    /// Seat tube length (centre-to-top) in cm
    pub frame_size_cm: f64,
    /// Bottom bracket centre to top of saddle in cm
    pub saddle_height_cm: f64,
    /// Horizontal saddle offset behind the bottom bracket in cm
    pub saddle_setback_cm: f64,
    /// Saddle nose to handlebar centre in cm
    pub handlebar_reach_cm: f64,
    /// Vertical drop from saddle to handlebar in cm (positive = drop)
    pub handlebar_drop_cm: f64,
    /// Crank arm length in mm
    pub crank_length_mm: f64,
    /// Stem length in mm
    pub stem_length_mm: f64,
    /// Stem angle in degrees (negative = drop)
    pub stem_angle_deg: f64,
}

impl Default for BikeGeometry {
    fn default() -> Self {
        Self {
            frame_size_cm: 0.0,
            saddle_height_cm: 0.0,
            saddle_setback_cm: 0.0,
            handlebar_reach_cm: 0.0,
            handlebar_drop_cm: 0.0,
            crank_length_mm: 172.5,
            stem_length_mm: 100.0,
            stem_angle_deg: -6.0,
        }
    }
}

impl BikeGeometry {
    /// Validation error messages for measured values outside plausible ranges
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let checks = [
            ("frame_size_cm", self.frame_size_cm, bike_ranges::FRAME_SIZE_CM),
            ("saddle_height_cm", self.saddle_height_cm, bike_ranges::SADDLE_HEIGHT_CM),
            ("saddle_setback_cm", self.saddle_setback_cm, bike_ranges::SADDLE_SETBACK_CM),
            ("handlebar_reach_cm", self.handlebar_reach_cm, bike_ranges::HANDLEBAR_REACH_CM),
            ("handlebar_drop_cm", self.handlebar_drop_cm, bike_ranges::HANDLEBAR_DROP_CM),
            ("crank_length_mm", self.crank_length_mm, bike_ranges::CRANK_LENGTH_MM),
            ("stem_length_mm", self.stem_length_mm, bike_ranges::STEM_LENGTH_MM),
            ("stem_angle_deg", self.stem_angle_deg, bike_ranges::STEM_ANGLE_DEG),
        ];

        checks
            .iter()
            .filter(|(_, value, (lo, hi))| value.abs() > 0.0 && !(*lo..=*hi).contains(value))
            .map(|(field, value, (lo, hi))| {
                format!("{field}: {value} outside valid range [{lo}, {hi}]")
            })
            .collect()
    }

    /// Whether every measured value is plausible
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
