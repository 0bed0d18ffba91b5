// ABOUTME: Integration tests for the end-to-end fit analysis pipeline
// ABOUTME: Pose capture in, scored assessment out, with rider and bike annotations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bikefit::analysis::{FitAnalyzer, FitAssessment};
use bikefit_core::errors::ErrorCode;
use bikefit_core::models::{
    BikeGeometry, BodySide, FitCategory, FitComponent, Joint, PoseSequence, RiderMeasurements,
    RidingStyle, Severity,
};
use bikefit_intelligence::IdealRangeTable;
use common::{
    assert_close, init_test_logging, posture_frame, road_angles, stroke_sequence, Posture,
};

#[test]
fn test_well_fitted_rider_scores_excellent() {
    init_test_logging();
    let sequence = stroke_sequence(&Posture::ROAD, 90);

    let assessment = FitAnalyzer::default().analyze(&sequence, "road").unwrap();

    assert_eq!(assessment.discipline, "road");
    assert_eq!(assessment.side, BodySide::Left);
    assert_eq!(assessment.total_frames, 90);
    assert_eq!(assessment.valid_frames, 90);
    assert_close(assessment.duration_sec, 3.0);
    assert_close(assessment.angles.knee_extension_min, 145.0);
    assert!((assessment.score.overall - 100.0).abs() < f64::EPSILON);
    assert_eq!(assessment.score.category(), FitCategory::Excellent);
    assert_eq!(assessment.recommendations.len(), 5);
    assert_eq!(assessment.actionable_count(), 0);
}

#[test]
fn test_low_saddle_is_flagged_first() {
    let low_saddle = Posture {
        knee: 125.0,
        ..Posture::ROAD
    };
    let sequence = stroke_sequence(&low_saddle, 60);

    let assessment = FitAnalyzer::default().analyze(&sequence, "road").unwrap();
    let first = &assessment.recommendations[0];

    assert_eq!(first.component, FitComponent::SaddleHeight);
    assert_eq!(first.severity, Severity::Critical);
    assert!(first.adjustment.starts_with("Raise saddle"));
    assert!(assessment.score.overall < 100.0);
    assert_eq!(assessment.actionable_count(), 1);
}

#[test]
fn test_parallel_and_sequential_pipelines_agree() {
    let sequence = stroke_sequence(&Posture::ROAD, 200);

    let sequential = FitAnalyzer::default()
        .with_parallel_threshold(usize::MAX)
        .analyze(&sequence, "road")
        .unwrap();
    let parallel = FitAnalyzer::default()
        .with_parallel_threshold(1)
        .analyze(&sequence, "road")
        .unwrap();

    assert_eq!(sequential.angles, parallel.angles);
    assert_eq!(sequential.score, parallel.score);
    assert_eq!(sequential.recommendations, parallel.recommendations);
    assert_ne!(sequential.id, parallel.id);
}

#[test]
fn test_incomplete_frames_are_excluded() {
    let mut sequence = stroke_sequence(&Posture::ROAD, 30);
    sequence.add_frame(posture_frame(30, &Posture::ROAD, BodySide::Left, 0.2));
    sequence.frames[5]
        .landmarks
        .remove(&Joint::Heel.landmark_name(BodySide::Left));

    let assessment = FitAnalyzer::default().analyze(&sequence, "road").unwrap();

    assert_eq!(assessment.total_frames, 31);
    assert_eq!(assessment.valid_frames, 29);
}

#[test]
fn test_no_usable_frames_is_insufficient_data() {
    let mut sequence = PoseSequence::new(30.0, 10, 1920, 1080);
    for i in 0..10 {
        sequence.add_frame(posture_frame(i, &Posture::ROAD, BodySide::Left, 0.3));
    }

    let err = FitAnalyzer::default().analyze(&sequence, "road").unwrap_err();

    assert_eq!(err.code, ErrorCode::InsufficientData);
    assert_eq!(err.details["valid_frames"], 0);
}

#[test]
fn test_minimum_valid_frames_is_enforced() {
    let sequence = stroke_sequence(&Posture::ROAD, 5);

    let err = FitAnalyzer::default()
        .with_min_valid_frames(10)
        .analyze(&sequence, "road")
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InsufficientData);
    assert_eq!(err.details["required_frames"], 10);

    assert!(FitAnalyzer::default()
        .with_min_valid_frames(5)
        .analyze(&sequence, "road")
        .is_ok());
}

#[test]
fn test_right_side_capture() {
    let mut sequence = PoseSequence::new(30.0, 20, 1280, 720);
    for i in 0..20 {
        sequence.add_frame(posture_frame(i, &Posture::ROAD, BodySide::Right, 0.9));
    }

    let left = FitAnalyzer::default().analyze(&sequence, "road");
    assert_eq!(left.unwrap_err().code, ErrorCode::InsufficientData);

    let right = FitAnalyzer::default()
        .with_side(BodySide::Right)
        .analyze(&sequence, "road")
        .unwrap();
    assert_eq!(right.side, BodySide::Right);
    assert_eq!(right.valid_frames, 20);
}

#[test]
fn test_smoothing_softens_a_single_bad_frame() {
    let mut sequence = stroke_sequence(&Posture::ROAD, 30);
    let glitch = Posture {
        knee: 110.0,
        ..Posture::ROAD
    };
    sequence.frames[10] = posture_frame(10, &glitch, BodySide::Left, 0.95);

    let raw = FitAnalyzer::default().analyze(&sequence, "road").unwrap();
    let smoothed = FitAnalyzer::default()
        .with_smoothing_window(5)
        .analyze(&sequence, "road")
        .unwrap();

    assert_close(raw.angles.knee_extension_min, 110.0);
    assert!(smoothed.angles.knee_extension_min > raw.angles.knee_extension_min);
    assert!(smoothed.score.knee_score > raw.score.knee_score);
}

#[test]
fn test_unknown_discipline_reports_fallback() {
    let sequence = stroke_sequence(&Posture::ROAD, 30);
    let assessment = FitAnalyzer::default().analyze(&sequence, "unicycle").unwrap();
    assert_eq!(assessment.discipline, "road");

    let mtb = FitAnalyzer::default().analyze(&sequence, "Mountain").unwrap();
    assert_eq!(mtb.discipline, "mtb");
}

#[test]
fn test_rider_annotations() {
    let sequence = stroke_sequence(&Posture::ROAD, 30);
    let rider = RiderMeasurements {
        height_cm: 180.0,
        weight_kg: 75.0,
        inseam_cm: 85.0,
        foot_size_eu: 43.0,
        arm_length_cm: 62.0,
        torso_length_cm: 52.0,
        shoulder_width_cm: 44.0,
        riding_style: RidingStyle::Road,
        ..RiderMeasurements::default()
    };

    let assessment = FitAnalyzer::default()
        .analyze(&sequence, rider.riding_style.as_key())
        .unwrap()
        .with_rider(&rider);

    assert!(assessment.warnings.is_empty());
    assert_close(assessment.estimated_saddle_height_cm.unwrap(), 75.1);
}

#[test]
fn test_implausible_measurements_become_warnings() {
    let sequence = stroke_sequence(&Posture::ROAD, 30);
    let rider = RiderMeasurements {
        height_cm: 300.0,
        ..RiderMeasurements::default()
    };
    let bike = BikeGeometry {
        crank_length_mm: 250.0,
        ..BikeGeometry::default()
    };

    let assessment = FitAnalyzer::default()
        .analyze(&sequence, "road")
        .unwrap()
        .with_rider(&rider)
        .with_bike(&bike);

    assert!(assessment
        .warnings
        .iter()
        .any(|w| w.starts_with("rider height_cm")));
    assert!(assessment
        .warnings
        .iter()
        .any(|w| w.starts_with("bike crank_length_mm")));
    assert!(assessment.estimated_saddle_height_cm.is_none());
    // score is unaffected by annotations
    assert!((assessment.score.overall - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_evaluate_skips_extraction() {
    let analyzer = FitAnalyzer::new(IdealRangeTable::builtin());
    let eval = analyzer.evaluate(&road_angles(), "gravel").unwrap();
    assert!(eval.score.overall > 0.0);
    assert_eq!(eval.recommendations.len(), 5);
}

#[test]
fn test_assessment_json_round_trip() {
    let sequence = stroke_sequence(&Posture::ROAD, 30);
    let assessment = FitAnalyzer::default().analyze(&sequence, "road").unwrap();

    let json = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["score"]["category"], "excellent");
    assert_eq!(json["side"], "left");
    assert!(json.get("warnings").is_none());

    let back: FitAssessment = serde_json::from_value(json).unwrap();
    assert_eq!(back.id, assessment.id);
    assert_eq!(back.generated_at, assessment.generated_at);
    assert_eq!(back.score, assessment.score);
    assert_eq!(back.recommendations, assessment.recommendations);
}

#[test]
fn test_analyzer_is_shareable_across_threads() {
    let analyzer = std::sync::Arc::new(FitAnalyzer::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let analyzer = std::sync::Arc::clone(&analyzer);
            std::thread::spawn(move || {
                let sequence = stroke_sequence(&Posture::ROAD, 20 + i * 10);
                analyzer.analyze(&sequence, "road").unwrap().valid_frames
            })
        })
        .collect();

    let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![20, 30, 40, 50]);
}
