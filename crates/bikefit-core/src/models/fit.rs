// ABOUTME: Overall and per-region fit scores with a derived quality category
// ABOUTME: FitScore is immutable once built; the category is serialized alongside it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::scoring::{EXCELLENT_THRESHOLD, FAIR_THRESHOLD, GOOD_THRESHOLD};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Quality bucket for an overall fit score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitCategory {
    /// 90 and above
    Excellent,
    /// 75 to below 90
    Good,
    /// 55 to below 75
    Fair,
    /// Below 55
    Poor,
}

impl FitCategory {
    /// Classify an overall score
    #[must_use]
    pub fn from_score(overall: f64) -> Self {
        if overall >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if overall >= GOOD_THRESHOLD {
            Self::Good
        } else if overall >= FAIR_THRESHOLD {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Lowercase category name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for FitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall and per-region fit scores, each in `[0, 100]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct FitScore {
    /// Weighted overall score
    pub overall: f64,
    /// Saddle height region (knee extension)
    pub knee_score: f64,
    /// Saddle setback region (hip angle)
    pub hip_score: f64,
    /// Handlebar position region (back angle)
    pub back_score: f64,
    /// Cleat position region (ankle angle)
    pub ankle_score: f64,
    /// Stem length / reach region (elbow angle)
    pub reach_score: f64,
}

impl FitScore {
    /// Category derived from the overall score
    #[must_use]
    pub fn category(&self) -> FitCategory {
        FitCategory::from_score(self.overall)
    }
}

impl Serialize for FitScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("FitScore", 7)?;
        state.serialize_field("overall", &self.overall)?;
        state.serialize_field("knee_score", &self.knee_score)?;
        state.serialize_field("hip_score", &self.hip_score)?;
        state.serialize_field("back_score", &self.back_score)?;
        state.serialize_field("ankle_score", &self.ankle_score)?;
        state.serialize_field("reach_score", &self.reach_score)?;
        state.serialize_field("category", &self.category())?;
        state.end()
    }
}
