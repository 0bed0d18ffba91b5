// ABOUTME: Data-driven fit rule evaluation scoring five body regions against ideal ranges
// ABOUTME: Region scores, weighted overall score, severity classification, adjustment templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fit Rules
//!
//! Each body region is one [`FitRule`] row in [`FIT_RULES`]: which component
//! it adjusts, which angle it reads, how to pull the measured value out of
//! the pedal-stroke summary, and which advice text to give for a value
//! below, above, or inside the ideal range. Adding a region means adding a
//! row, not another branch.
//!
//! ## Scoring
//!
//! ```text
//! region = 100                                  if min <= value <= max
//!        = max(0, 100 - deviation / width * 40) otherwise
//! width  = max(max - min, 1)
//! overall = sum(region * weight) / sum(weight)
//! ```
//!
//! Region and overall scores are rounded to one decimal, ties to even.

use crate::config::{DisciplineRanges, IdealRange, IdealRangeTable};
use crate::ranking::rank_recommendations;
use bikefit_core::constants::adjustments::SADDLE_MM_PER_DEGREE;
use bikefit_core::constants::scoring::{
    DEVIATION_PENALTY_FACTOR, MAX_REGION_SCORE, MINOR_RATIO_LIMIT, MIN_RANGE_WIDTH,
    MODERATE_RATIO_LIMIT,
};
use bikefit_core::constants::weights;
use bikefit_core::models::{
    AngleKind, CyclingAngles, FitComponent, FitScore, Recommendation, Severity,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where a measured value sits relative to its ideal range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deviation {
    /// Inside the inclusive range
    Within,
    /// Below the minimum by this many degrees
    Below(f64),
    /// Above the maximum by this many degrees
    Above(f64),
}

impl Deviation {
    /// Classify `value` against `range`
    #[must_use]
    pub fn measure(value: f64, range: &IdealRange) -> Self {
        if range.contains(value) {
            Self::Within
        } else if value < range.min {
            Self::Below(range.min - value)
        } else {
            Self::Above(value - range.max)
        }
    }

    /// Distance to the violated bound, 0 when within
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        match self {
            Self::Within => 0.0,
            Self::Below(d) | Self::Above(d) => *d,
        }
    }
}

/// One scored body region
#[derive(Debug, Clone, Copy)]
pub struct FitRule {
    /// Component the recommendation targets
    pub component: FitComponent,
    /// Angle whose ideal range applies
    pub angle: AngleKind,
    /// Weight used when the table entry omits one
    pub default_weight: f64,
    /// Pulls the judged value out of the pedal-stroke summary
    pub measure: fn(&CyclingAngles) -> f64,
    /// Adjustment text for the deviation direction
    pub advice: fn(Deviation) -> String,
    /// Why this region matters
    pub rationale: &'static str,
}

impl FitRule {
    fn range<'a>(&self, ranges: &'a DisciplineRanges) -> &'a IdealRange {
        // every rule reads one of the five scored angles
        ranges.get(self.angle).unwrap_or(&ranges.knee_extension)
    }
}

/// The five scored regions, in evaluation order
pub static FIT_RULES: [FitRule; 5] = [
    FitRule {
        component: FitComponent::SaddleHeight,
        angle: AngleKind::KneeExtension,
        default_weight: weights::KNEE_EXTENSION,
        measure: knee_at_bottom,
        advice: saddle_height_advice,
        rationale: "Knee extension at the bottom of the pedal stroke determines saddle height. \
                    Too low causes knee stress; too high reduces power and risks rocking.",
    },
    FitRule {
        component: FitComponent::SaddleSetback,
        angle: AngleKind::HipAngle,
        default_weight: weights::HIP_ANGLE,
        measure: hip_at_top,
        advice: saddle_setback_advice,
        rationale: "Hip angle affects power output and breathing. \
                    A too-closed hip angle compresses the abdomen and limits breathing capacity.",
    },
    FitRule {
        component: FitComponent::HandlebarPosition,
        angle: AngleKind::BackAngle,
        default_weight: weights::BACK_ANGLE,
        measure: mean_back,
        advice: handlebar_advice,
        rationale: "Back angle affects aerodynamics and comfort. \
                    Too flat strains the neck and lower back; too upright increases drag.",
    },
    FitRule {
        component: FitComponent::CleatPosition,
        angle: AngleKind::AnkleAngle,
        default_weight: weights::ANKLE_ANGLE,
        measure: CyclingAngles::ankle_midpoint,
        advice: cleat_advice,
        rationale: "Ankle angle through the pedal stroke reveals cleat positioning and \
                    ankling technique. Excessive toe pointing wastes energy.",
    },
    FitRule {
        component: FitComponent::StemLength,
        angle: AngleKind::ElbowAngle,
        default_weight: weights::ELBOW_ANGLE,
        measure: mean_elbow,
        advice: stem_advice,
        rationale: "Elbow bend indicates reach. A slight bend absorbs road vibrations \
                    and prevents locking out, which causes numbness and fatigue.",
    },
];

fn knee_at_bottom(angles: &CyclingAngles) -> f64 {
    angles.knee_extension_min
}

fn hip_at_top(angles: &CyclingAngles) -> f64 {
    angles.hip_angle_min
}

fn mean_back(angles: &CyclingAngles) -> f64 {
    angles.back_angle
}

fn mean_elbow(angles: &CyclingAngles) -> f64 {
    angles.elbow_angle
}

fn saddle_height_advice(deviation: Deviation) -> String {
    match deviation {
        Deviation::Below(d) => format!(
            "Raise saddle by approximately {:.0} mm",
            (d * SADDLE_MM_PER_DEGREE).round()
        ),
        Deviation::Above(d) => format!(
            "Lower saddle by approximately {:.0} mm",
            (d * SADDLE_MM_PER_DEGREE).round()
        ),
        Deviation::Within => "Saddle height is well set".to_owned(),
    }
}

fn saddle_setback_advice(deviation: Deviation) -> String {
    match deviation {
        Deviation::Below(_) => "Move saddle back or raise handlebars to open hip angle",
        Deviation::Above(_) => "Move saddle forward or lower handlebars to close hip angle",
        Deviation::Within => "Hip angle is in a good range",
    }
    .to_owned()
}

fn handlebar_advice(deviation: Deviation) -> String {
    match deviation {
        Deviation::Below(_) => "Raise handlebars or use a shorter/steeper stem",
        Deviation::Above(_) => "Lower handlebars or use a longer/more negative stem",
        Deviation::Within => "Back angle is well positioned",
    }
    .to_owned()
}

fn cleat_advice(deviation: Deviation) -> String {
    match deviation {
        Deviation::Below(_) => "Reduce toe pointing; check cleat position and saddle height",
        Deviation::Above(_) => "Check cleat position; foot may be too far forward on pedal",
        Deviation::Within => "Ankle movement is within normal range",
    }
    .to_owned()
}

fn stem_advice(deviation: Deviation) -> String {
    match deviation {
        Deviation::Below(_) => "Stem may be too long; consider a shorter stem",
        Deviation::Above(_) => "Stem may be too short; consider a longer stem or more reach",
        Deviation::Within => "Reach and elbow bend are comfortable",
    }
    .to_owned()
}

/// Scores and ranked recommendations for one pedal-stroke summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitEvaluation {
    /// Region and overall scores
    pub score: FitScore,
    /// One recommendation per region, most urgent first
    pub recommendations: Vec<Recommendation>,
}

/// Score a value against an ideal range, 0 to 100 (unrounded)
#[must_use]
pub fn score_single(value: f64, range: &IdealRange) -> f64 {
    let deviation = Deviation::measure(value, range);
    if deviation == Deviation::Within {
        return MAX_REGION_SCORE;
    }
    let penalty = deviation.magnitude() / range.width().max(MIN_RANGE_WIDTH)
        * DEVIATION_PENALTY_FACTOR;
    (MAX_REGION_SCORE - penalty).max(0.0)
}

/// Map a deviation and range width to a severity
#[must_use]
pub fn severity_from_deviation(deviation: f64, range_width: f64) -> Severity {
    let ratio = deviation / range_width.max(MIN_RANGE_WIDTH);
    if ratio <= 0.0 {
        Severity::Optimal
    } else if ratio <= MINOR_RATIO_LIMIT {
        Severity::Minor
    } else if ratio <= MODERATE_RATIO_LIMIT {
        Severity::Moderate
    } else {
        Severity::Critical
    }
}

/// One decimal, exact ties to even
fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Evaluate a pedal-stroke summary for a discipline
///
/// Unknown disciplines use the road ranges. The caller is expected to have
/// rejected the all-zero "no data" summary already; evaluating it yields a
/// defined but meaningless score.
#[must_use]
pub fn evaluate_fit(
    angles: &CyclingAngles,
    discipline: &str,
    table: &IdealRangeTable,
) -> FitEvaluation {
    let ranges = table.resolve(discipline);

    let mut region_scores = [0.0_f64; 5];
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut recommendations = Vec::with_capacity(FIT_RULES.len());

    for (slot, rule) in region_scores.iter_mut().zip(FIT_RULES.iter()) {
        let range = rule.range(ranges);
        let value = (rule.measure)(angles);
        let deviation = Deviation::measure(value, range);
        let score = score_single(value, range);
        let weight = range.weight_or(rule.default_weight);

        *slot = score;
        weighted_sum = score.mul_add(weight, weighted_sum);
        total_weight += weight;

        recommendations.push(Recommendation {
            component: rule.component,
            severity: severity_from_deviation(deviation.magnitude(), range.width()),
            current_value: format!("{value:.1}°"),
            ideal_range: format!("{}–{}°", range.min, range.max),
            adjustment: (rule.advice)(deviation),
            rationale: rule.rationale.to_owned(),
        });
    }

    // all-zero weights: plain mean
    let overall = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        region_scores.iter().sum::<f64>() / region_scores.len() as f64
    };

    let [knee, hip, back, ankle, reach] = region_scores;
    let score = FitScore {
        overall: round1(overall),
        knee_score: round1(knee),
        hip_score: round1(hip),
        back_score: round1(back),
        ankle_score: round1(ankle),
        reach_score: round1(reach),
    };

    debug!(
        discipline,
        overall = score.overall,
        category = %score.category(),
        "Evaluated fit rules"
    );

    FitEvaluation {
        score,
        recommendations: rank_recommendations(recommendations),
    }
}
