// ABOUTME: Shared fixtures for bike-fit integration tests
// ABOUTME: Builds side-view pose frames with chosen joint angles and in-range angle summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::suboptimal_flops
)]
//! Shared test utilities for `bikefit`
//!
//! Frames are built from target angles so tests can assert on the
//! measurement pipeline without hand-computing coordinates.

use bikefit_core::models::{BodySide, CyclingAngles, Joint, Landmark, PoseFrame, PoseSequence};
use std::f64::consts::PI;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Joint angles a fixture frame is built to exhibit, in degrees
#[derive(Debug, Clone, Copy)]
pub struct Posture {
    pub knee: f64,
    pub hip: f64,
    pub back: f64,
    pub ankle: f64,
    pub elbow: f64,
    pub shoulder: f64,
}

impl Posture {
    /// Comfortable road position, inside every road range
    pub const ROAD: Self = Self {
        knee: 145.0,
        hip: 48.0,
        back: 40.0,
        ankle: 105.0,
        elbow: 158.0,
        shoulder: 80.0,
    };
}

fn step(from: (f64, f64), direction_deg: f64, length: f64) -> (f64, f64) {
    let rad = direction_deg.to_radians();
    (from.0 + length * rad.cos(), from.1 + length * rad.sin())
}

/// Landmark positions for one side, placed so the measured angles equal `posture`
///
/// Directions are screen angles (y grows downward); the rider faces +x.
pub fn posture_points(posture: &Posture) -> Vec<(Joint, (f64, f64))> {
    let hip = (0.35, 0.45);
    let torso_dir = -posture.back;
    let shoulder = step(hip, torso_dir, 0.3);

    let thigh_dir = torso_dir + posture.hip;
    let knee = step(hip, thigh_dir, 0.22);

    let shin_dir = thigh_dir + 180.0 - posture.knee;
    let ankle = step(knee, shin_dir, 0.22);

    let foot_dir = shin_dir + 180.0 + posture.ankle;
    let toe = step(ankle, foot_dir, 0.07);
    let heel = step(ankle, foot_dir + 180.0, 0.03);

    let arm_dir = torso_dir + 180.0 - posture.shoulder;
    let elbow = step(shoulder, arm_dir, 0.15);

    let forearm_dir = arm_dir + 180.0 + posture.elbow;
    let wrist = step(elbow, forearm_dir, 0.14);

    vec![
        (Joint::Hip, hip),
        (Joint::Knee, knee),
        (Joint::Ankle, ankle),
        (Joint::Shoulder, shoulder),
        (Joint::Elbow, elbow),
        (Joint::Wrist, wrist),
        (Joint::Heel, heel),
        (Joint::FootIndex, toe),
    ]
}

/// Frame with every required landmark on `side` at the given visibility
pub fn posture_frame(
    frame_number: u64,
    posture: &Posture,
    side: BodySide,
    visibility: f64,
) -> PoseFrame {
    let landmarks = posture_points(posture)
        .into_iter()
        .map(|(joint, (x, y))| Landmark::new(joint.landmark_name(side), x, y, 0.0, visibility));
    PoseFrame::from_landmarks(frame_number, frame_number as f64 * 1000.0 / 30.0, landmarks)
}

/// Fully visible left-side frame in the road posture
pub fn complete_frame(frame_number: u64) -> PoseFrame {
    posture_frame(frame_number, &Posture::ROAD, BodySide::Left, 0.95)
}

/// Posture at `frame` of a pedal stroke lasting `period` frames
///
/// Frame 0 is bottom dead centre, where knee and hip are at the base posture
/// values; both open by up to 30 and 22 degrees through the stroke. The
/// ankle swings between base and base + 10 degrees.
pub fn stroke_posture(base: &Posture, frame: usize, period: usize) -> Posture {
    let phase = (1.0 - (2.0 * PI * frame as f64 / period as f64).cos()) / 2.0;
    Posture {
        knee: base.knee + 30.0 * phase,
        hip: base.hip + 22.0 * phase,
        ankle: base.ankle + 10.0 * phase,
        ..*base
    }
}

/// Capture of `count` complete left-side frames pedaling in `base` posture
pub fn stroke_sequence(base: &Posture, count: usize) -> PoseSequence {
    let mut sequence = PoseSequence::new(30.0, count as u64, 1920, 1080);
    for i in 0..count {
        let posture = stroke_posture(base, i, 30);
        sequence.add_frame(posture_frame(i as u64, &posture, BodySide::Left, 0.95));
    }
    sequence
}

/// Pedal-stroke summary inside every road range
pub fn road_angles() -> CyclingAngles {
    CyclingAngles {
        knee_extension_min: 145.0,
        knee_extension_max: 175.0,
        knee_flexion_max: 35.0,
        hip_angle_min: 48.0,
        hip_angle_max: 70.0,
        back_angle: 40.0,
        ankle_angle_min: 100.0,
        ankle_angle_max: 110.0,
        shoulder_angle: 80.0,
        elbow_angle: 158.0,
    }
}

/// Assert two angles agree to within a thousandth of a degree
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
