// ABOUTME: Pedal-stroke aggregation reducing per-frame angles to one CyclingAngles summary
// ABOUTME: Min/max for stroke-phase angles, mean for postural angles, optional moving-average smoothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pedal-stroke aggregation
//!
//! Knee, hip, and ankle angles change through the stroke, so their extremes
//! are kept. Back, shoulder, and elbow angles are postural and are averaged.

use bikefit_core::constants::geometry::STRAIGHT_ANGLE_DEG;
use bikefit_core::models::{AngleKind, CyclingAngles, FrameAngles};
use tracing::debug;

/// Running state of the single-pass reduction
#[derive(Debug, Clone, Copy)]
struct StrokeAccumulator {
    count: usize,
    knee_min: f64,
    knee_max: f64,
    hip_min: f64,
    hip_max: f64,
    ankle_min: f64,
    ankle_max: f64,
    back_sum: f64,
    shoulder_sum: f64,
    elbow_sum: f64,
}

impl StrokeAccumulator {
    const fn new() -> Self {
        Self {
            count: 0,
            knee_min: f64::INFINITY,
            knee_max: f64::NEG_INFINITY,
            hip_min: f64::INFINITY,
            hip_max: f64::NEG_INFINITY,
            ankle_min: f64::INFINITY,
            ankle_max: f64::NEG_INFINITY,
            back_sum: 0.0,
            shoulder_sum: 0.0,
            elbow_sum: 0.0,
        }
    }

    fn push(mut self, frame: &FrameAngles) -> Self {
        self.count += 1;
        self.knee_min = self.knee_min.min(frame.knee_extension);
        self.knee_max = self.knee_max.max(frame.knee_extension);
        self.hip_min = self.hip_min.min(frame.hip_angle);
        self.hip_max = self.hip_max.max(frame.hip_angle);
        self.ankle_min = self.ankle_min.min(frame.ankle_angle);
        self.ankle_max = self.ankle_max.max(frame.ankle_angle);
        self.back_sum += frame.back_angle;
        self.shoulder_sum += frame.shoulder_angle;
        self.elbow_sum += frame.elbow_angle;
        self
    }

    fn finish(self) -> CyclingAngles {
        if self.count == 0 {
            return CyclingAngles::default();
        }
        let n = self.count as f64;
        CyclingAngles {
            knee_extension_min: self.knee_min,
            knee_extension_max: self.knee_max,
            knee_flexion_max: STRAIGHT_ANGLE_DEG - self.knee_min,
            hip_angle_min: self.hip_min,
            hip_angle_max: self.hip_max,
            back_angle: self.back_sum / n,
            ankle_angle_min: self.ankle_min,
            ankle_angle_max: self.ankle_max,
            shoulder_angle: self.shoulder_sum / n,
            elbow_angle: self.elbow_sum / n,
        }
    }
}

/// Reduce per-frame angles to the pedal-stroke summary
///
/// An empty slice yields the all-zero sentinel (see
/// [`CyclingAngles::is_empty_sentinel`]) rather than an error.
#[must_use]
pub fn aggregate_angles(frames: &[FrameAngles]) -> CyclingAngles {
    let summary = frames
        .iter()
        .fold(StrokeAccumulator::new(), StrokeAccumulator::push)
        .finish();

    debug!(
        frames = frames.len(),
        knee_extension_min = summary.knee_extension_min,
        hip_angle_min = summary.hip_angle_min,
        back_angle = summary.back_angle,
        "Aggregated pedal stroke"
    );

    summary
}

/// Centered moving average over `window` frames
///
/// The window is symmetric around each frame, so an even size behaves like
/// the next odd one. Near the ends it shrinks to the frames available.
/// A window of 0 or 1 returns the input unchanged.
#[must_use]
pub fn smooth_angles(frames: &[FrameAngles], window: usize) -> Vec<FrameAngles> {
    if window <= 1 || frames.len() <= 1 {
        return frames.to_vec();
    }

    let half = window / 2;
    let last = frames.len() - 1;

    (0..frames.len())
        .map(|i| {
            let neighbours = &frames[i.saturating_sub(half)..=(i + half).min(last)];
            let n = neighbours.len() as f64;
            let mut smoothed = FrameAngles::default();
            for kind in AngleKind::ALL {
                *smoothed.get_mut(kind) = neighbours.iter().map(|f| f.get(kind)).sum::<f64>() / n;
            }
            smoothed
        })
        .collect()
}
