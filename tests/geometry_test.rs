// ABOUTME: Integration tests for the angle primitives
// ABOUTME: Covers vertex angle symmetry, degenerate inputs, and segment folding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bikefit_core::models::Landmark;
use bikefit_intelligence::{segment_angle_from_horizontal, vertex_angle, Point2};

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn test_right_angle() {
    assert!(close(vertex_angle(p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0)), 90.0));
}

#[test]
fn test_straight_line_is_180() {
    let angle = vertex_angle(p(0.0, 0.0), p(0.5, 0.5), p(1.0, 1.0));
    assert!((angle - 180.0).abs() < 0.05, "{angle}");
}

#[test]
fn test_folded_back_is_zero() {
    assert!(vertex_angle(p(1.0, 0.0), p(0.0, 0.0), p(2.0, 0.0)) < 0.05);
}

#[test]
fn test_vertex_angle_is_symmetric() {
    let samples = [
        (p(0.1, 0.2), p(0.4, 0.5), p(0.9, 0.3)),
        (p(0.5, 0.5), p(0.3, 0.7), p(0.6, 0.9)),
        (p(0.0, 1.0), p(0.2, 0.2), p(1.0, 0.0)),
    ];
    for (a, b, c) in samples {
        assert!(close(vertex_angle(a, b, c), vertex_angle(c, b, a)));
    }
}

#[test]
fn test_vertex_angle_always_in_bounds() {
    let coords = [0.0, 0.13, 0.5, 0.77, 1.0];
    for &x1 in &coords {
        for &y3 in &coords {
            let angle = vertex_angle(p(x1, 0.3), p(0.5, 0.5), p(0.2, y3));
            assert!((0.0..=180.0).contains(&angle), "{angle}");
        }
    }
}

#[test]
fn test_coincident_points_are_not_an_error() {
    let angle = vertex_angle(p(0.5, 0.5), p(0.5, 0.5), p(0.5, 0.5));
    assert!(angle.is_finite());
    assert!(close(angle, 90.0));
}

#[test]
fn test_segment_angle_cardinal_directions() {
    assert!(close(segment_angle_from_horizontal(p(0.0, 0.0), p(1.0, 0.0)), 0.0));
    assert!(close(segment_angle_from_horizontal(p(0.0, 0.0), p(0.0, 1.0)), 90.0));
    assert!(close(segment_angle_from_horizontal(p(0.0, 0.0), p(0.0, -1.0)), 90.0));
    assert!(close(segment_angle_from_horizontal(p(0.0, 0.0), p(1.0, -1.0)), 45.0));
}

#[test]
fn test_segment_angle_ignores_direction() {
    let forward = segment_angle_from_horizontal(p(0.3, 0.6), p(0.6, 0.4));
    let reverse = segment_angle_from_horizontal(p(0.6, 0.4), p(0.3, 0.6));
    assert!(close(forward, reverse));
    assert!((0.0..=90.0).contains(&forward));
}

#[test]
fn test_point_from_landmark_drops_depth() {
    let landmark = Landmark::new("left_hip", 0.25, 0.75, -0.4, 0.9);
    let point = Point2::from(&landmark);
    assert!(close(point.x, 0.25));
    assert!(close(point.y, 0.75));
}
