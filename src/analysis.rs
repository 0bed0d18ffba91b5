// ABOUTME: Fit analysis pipeline turning a pose sequence into a scored, ranked assessment
// ABOUTME: Filters complete frames, extracts angles in parallel, aggregates, evaluates, and annotates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fit Analysis
//!
//! [`FitAnalyzer::analyze`] runs the whole engine for one capture and
//! returns an explicit [`FitAssessment`]; nothing is pushed to listeners.
//! An analyzer holds only read-only configuration, so one instance can
//! serve several captures concurrently.

use crate::config::AppConfig;
use bikefit_core::errors::{AppError, AppResult};
use bikefit_core::models::{
    BikeGeometry, BodySide, CyclingAngles, FitScore, PoseSequence, Recommendation,
    RiderMeasurements, Severity,
};
use bikefit_intelligence::{
    aggregate_angles, evaluate_fit, extract_all, smooth_angles, FitEvaluation, IdealRangeTable,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// Result of one fit analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitAssessment {
    /// Unique assessment id
    pub id: Uuid,
    /// When the assessment was produced
    pub generated_at: DateTime<Utc>,
    /// Discipline whose ranges were applied (after fallback)
    pub discipline: String,
    /// Body side the angles were measured on
    pub side: BodySide,
    /// Frames in the capture
    pub total_frames: usize,
    /// Frames that contributed angles
    pub valid_frames: usize,
    /// Source duration in seconds
    pub duration_sec: f64,
    /// Pedal-stroke summary
    pub angles: CyclingAngles,
    /// Region and overall scores
    pub score: FitScore,
    /// Recommendations, most urgent first
    pub recommendations: Vec<Recommendation>,
    /// Implausible rider or bike measurements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// `LeMond` saddle height estimate from the rider's inseam
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_saddle_height_cm: Option<f64>,
}

impl FitAssessment {
    /// Annotate with rider measurement warnings and the saddle height estimate
    #[must_use]
    pub fn with_rider(mut self, rider: &RiderMeasurements) -> Self {
        self.warnings
            .extend(rider.validate().into_iter().map(|e| format!("rider {e}")));
        if rider.inseam_cm > 0.0 {
            self.estimated_saddle_height_cm = Some(rider.estimated_saddle_height_cm());
        }
        self
    }

    /// Annotate with bike geometry warnings
    #[must_use]
    pub fn with_bike(mut self, bike: &BikeGeometry) -> Self {
        self.warnings
            .extend(bike.validate().into_iter().map(|e| format!("bike {e}")));
        self
    }

    /// Number of recommendations that call for a change
    #[must_use]
    pub fn actionable_count(&self) -> usize {
        self.recommendations
            .iter()
            .filter(|r| r.severity != Severity::Optimal)
            .count()
    }
}

/// Runs the angle extraction and fit evaluation pipeline
#[derive(Debug, Clone)]
pub struct FitAnalyzer {
    table: IdealRangeTable,
    side: BodySide,
    smoothing_window: usize,
    parallel_threshold: usize,
    min_valid_frames: usize,
}

impl Default for FitAnalyzer {
    fn default() -> Self {
        Self::new(IdealRangeTable::builtin())
    }
}

impl FitAnalyzer {
    /// Analyzer over `table` with default settings
    #[must_use]
    pub fn new(table: IdealRangeTable) -> Self {
        let defaults = AppConfig::default();
        Self {
            table,
            side: BodySide::Left,
            smoothing_window: defaults.smoothing_window,
            parallel_threshold: defaults.parallel_threshold,
            min_valid_frames: defaults.min_valid_frames,
        }
    }

    /// Analyzer configured from `config`, loading its range table
    ///
    /// # Errors
    ///
    /// Returns the table loading errors of [`AppConfig::load_range_table`]
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Ok(Self::new(config.load_range_table()?)
            .with_smoothing_window(config.smoothing_window)
            .with_parallel_threshold(config.parallel_threshold)
            .with_min_valid_frames(config.min_valid_frames))
    }

    /// Measure the given side of the body
    #[must_use]
    pub const fn with_side(mut self, side: BodySide) -> Self {
        self.side = side;
        self
    }

    /// Smooth per-frame angles with a centered moving average
    #[must_use]
    pub const fn with_smoothing_window(mut self, window: usize) -> Self {
        self.smoothing_window = window;
        self
    }

    /// Frame count at which extraction runs in parallel
    #[must_use]
    pub const fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Minimum measurable frames; values below 1 are treated as 1
    #[must_use]
    pub fn with_min_valid_frames(mut self, frames: usize) -> Self {
        self.min_valid_frames = frames.max(1);
        self
    }

    /// Ideal-range table in use
    #[must_use]
    pub const fn table(&self) -> &IdealRangeTable {
        &self.table
    }

    /// Table key actually applied for `discipline`
    #[must_use]
    pub fn effective_discipline(&self, discipline: &str) -> String {
        self.table.resolve_key(discipline).to_owned()
    }

    /// Analyze a pose capture
    ///
    /// # Errors
    ///
    /// Returns `INSUFFICIENT_DATA` when fewer than the minimum number of
    /// frames have every required landmark visible.
    pub fn analyze(&self, sequence: &PoseSequence, discipline: &str) -> AppResult<FitAssessment> {
        let complete = sequence.valid_frames_for(self.side);
        let per_frame = extract_all(&complete, self.side, self.parallel_threshold);

        if per_frame.len() < self.min_valid_frames {
            warn!(
                total_frames = sequence.frames.len(),
                valid_frames = per_frame.len(),
                required = self.min_valid_frames,
                "Not enough complete frames for a fit assessment"
            );
            return Err(AppError::insufficient_data(
                per_frame.len(),
                self.min_valid_frames,
            ));
        }

        let angles = if self.smoothing_window > 1 {
            aggregate_angles(&smooth_angles(&per_frame, self.smoothing_window))
        } else {
            aggregate_angles(&per_frame)
        };

        let FitEvaluation {
            score,
            recommendations,
        } = evaluate_fit(&angles, discipline, &self.table);

        let assessment = FitAssessment {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            discipline: self.effective_discipline(discipline),
            side: self.side,
            total_frames: sequence.frames.len(),
            valid_frames: per_frame.len(),
            duration_sec: sequence.duration_sec(),
            angles,
            score,
            recommendations,
            warnings: Vec::new(),
            estimated_saddle_height_cm: None,
        };

        info!(
            assessment_id = %assessment.id,
            discipline = %assessment.discipline,
            valid_frames = assessment.valid_frames,
            overall = assessment.score.overall,
            category = %assessment.score.category(),
            "Fit assessment complete"
        );

        Ok(assessment)
    }

    /// Evaluate an already-aggregated pedal-stroke summary
    ///
    /// # Errors
    ///
    /// Returns `INSUFFICIENT_DATA` for the all-zero "no frames" summary
    pub fn evaluate(&self, angles: &CyclingAngles, discipline: &str) -> AppResult<FitEvaluation> {
        if angles.is_empty_sentinel() {
            return Err(AppError::insufficient_data(0, self.min_valid_frames));
        }
        Ok(evaluate_fit(angles, discipline, &self.table))
    }
}
