// ABOUTME: Per-frame extraction of the six cycling angles from pose landmarks
// ABOUTME: Sequential or rayon data-parallel over many frames with an order-preserving join
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Per-frame angle extraction
//!
//! | angle          | vertex   | points                  |
//! |----------------|----------|-------------------------|
//! | knee_extension | knee     | hip, knee, ankle        |
//! | hip_angle      | hip      | shoulder, hip, knee     |
//! | back_angle     | -        | hip, shoulder           |
//! | ankle_angle    | ankle    | knee, ankle, foot tip   |
//! | elbow_angle    | elbow    | shoulder, elbow, wrist  |
//! | shoulder_angle | shoulder | hip, shoulder, elbow    |

use crate::geometry::{segment_angle_from_horizontal, vertex_angle, Point2};
use bikefit_core::models::{BodySide, FrameAngles, Joint, PoseFrame};
use rayon::prelude::*;
use tracing::debug;

/// Landmarks the extractor reads, resolved for one side of the body
struct SideLandmarks {
    hip: Point2,
    knee: Point2,
    ankle: Point2,
    shoulder: Point2,
    elbow: Point2,
    wrist: Point2,
    toe: Point2,
}

impl SideLandmarks {
    fn resolve(frame: &PoseFrame, side: BodySide) -> Option<Self> {
        let point = |joint: Joint| frame.joint(joint, side).map(Point2::from);
        Some(Self {
            hip: point(Joint::Hip)?,
            knee: point(Joint::Knee)?,
            ankle: point(Joint::Ankle)?,
            shoulder: point(Joint::Shoulder)?,
            elbow: point(Joint::Elbow)?,
            wrist: point(Joint::Wrist)?,
            toe: point(Joint::FootIndex)?,
        })
    }
}

/// Compute the six cycling angles from the rider's left side
///
/// Returns `None` when any of hip, knee, ankle, shoulder, elbow, wrist, or
/// foot tip is absent. That is the normal "incomplete" outcome, not an error.
#[must_use]
pub fn compute_frame_angles(frame: &PoseFrame) -> Option<FrameAngles> {
    compute_frame_angles_for_side(frame, BodySide::Left)
}

/// Compute the six cycling angles from the given side of the body
#[must_use]
pub fn compute_frame_angles_for_side(frame: &PoseFrame, side: BodySide) -> Option<FrameAngles> {
    let lm = SideLandmarks::resolve(frame, side)?;

    Some(FrameAngles {
        knee_extension: vertex_angle(lm.hip, lm.knee, lm.ankle),
        hip_angle: vertex_angle(lm.shoulder, lm.hip, lm.knee),
        back_angle: segment_angle_from_horizontal(lm.hip, lm.shoulder),
        ankle_angle: vertex_angle(lm.knee, lm.ankle, lm.toe),
        elbow_angle: vertex_angle(lm.shoulder, lm.elbow, lm.wrist),
        shoulder_angle: vertex_angle(lm.hip, lm.shoulder, lm.elbow),
    })
}

/// Extract angles from every frame, skipping incomplete ones
///
/// Once the frame count reaches `parallel_threshold` the work is spread
/// over the rayon pool. Either way the call returns only after every frame
/// is done, and results keep the input order.
#[must_use]
pub fn extract_all(
    frames: &[&PoseFrame],
    side: BodySide,
    parallel_threshold: usize,
) -> Vec<FrameAngles> {
    let parallel = frames.len() >= parallel_threshold;

    let angles: Vec<FrameAngles> = if parallel {
        frames
            .par_iter()
            .filter_map(|frame| compute_frame_angles_for_side(frame, side))
            .collect()
    } else {
        frames
            .iter()
            .filter_map(|frame| compute_frame_angles_for_side(frame, side))
            .collect()
    };

    debug!(
        frames = frames.len(),
        measured = angles.len(),
        parallel,
        side = %side,
        "Extracted per-frame angles"
    );

    angles
}
