// ABOUTME: Recommendation model - actionable bike-fit adjustments with severity
// ABOUTME: Severity ordering drives ranking; FitComponent names the adjustable part
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Urgency of a fit deviation
///
/// Ordered `Optimal < Minor < Moderate < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Within the ideal range
    Optimal,
    /// Up to half a range-width outside
    Minor,
    /// Up to one range-width outside
    Moderate,
    /// More than one range-width outside
    Critical,
}

impl Severity {
    /// Presentation rank, 0 = most urgent
    #[must_use]
    pub const fn urgency_rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::Moderate => 1,
            Self::Minor => 2,
            Self::Optimal => 3,
        }
    }

    /// Lowercase severity name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "optimal" => Ok(Self::Optimal),
            "minor" => Ok(Self::Minor),
            "moderate" => Ok(Self::Moderate),
            "critical" => Ok(Self::Critical),
            other => Err(AppError::invalid_input(format!(
                "Unknown severity: '{other}'. Valid options: optimal, minor, moderate, critical"
            ))),
        }
    }
}

/// Adjustable bike component a recommendation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitComponent {
    /// Saddle height, judged from knee extension
    SaddleHeight,
    /// Saddle fore-aft position, judged from hip angle
    SaddleSetback,
    /// Handlebar height and reach, judged from back angle
    HandlebarPosition,
    /// Cleat position, judged from ankle angle
    CleatPosition,
    /// Stem length, judged from elbow angle
    StemLength,
}

impl FitComponent {
    /// Snake-case identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SaddleHeight => "saddle_height",
            Self::SaddleSetback => "saddle_setback",
            Self::HandlebarPosition => "handlebar_position",
            Self::CleatPosition => "cleat_position",
            Self::StemLength => "stem_length",
        }
    }

    /// Title-case name for display
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::SaddleHeight => "Saddle Height",
            Self::SaddleSetback => "Saddle Setback",
            Self::HandlebarPosition => "Handlebar Position",
            Self::CleatPosition => "Cleat Position",
            Self::StemLength => "Stem Length",
        }
    }
}

impl fmt::Display for FitComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single bike-fit adjustment recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Component to adjust
    pub component: FitComponent,
    /// How urgent the adjustment is
    pub severity: Severity,
    /// Measured value, e.g. `"138.2°"`
    pub current_value: String,
    /// Ideal range, e.g. `"140–150°"`
    pub ideal_range: String,
    /// What to change, e.g. `"Raise saddle by approximately 5 mm"`
    pub adjustment: String,
    /// Why the measurement matters for comfort, power, or injury risk
    #[serde(alias = "explanation")]
    pub rationale: String,
}
