// ABOUTME: Geometric angle primitives on normalized 2-D landmark coordinates
// ABOUTME: Vertex angle via dot-product/arccos and segment tilt from horizontal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Angle primitives. Depth (`z`) is never used.

use bikefit_core::constants::geometry::NORM_EPSILON;
use bikefit_core::models::Landmark;

/// A point in normalized image coordinates (`x` right, `y` down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point2 {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<&Landmark> for Point2 {
    fn from(lm: &Landmark) -> Self {
        Self::new(lm.x, lm.y)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Angle at `p2` between the rays toward `p1` and `p3`, in degrees `[0, 180]`
///
/// The cosine is clamped to `[-1, 1]` before `acos`. Coincident points are
/// not an error: the epsilon in the denominator makes a zero-length ray
/// produce a cosine of 0, so the result is 90 degrees.
#[must_use]
pub fn vertex_angle(p1: Point2, p2: Point2, p3: Point2) -> f64 {
    let (v1x, v1y) = (p1.x - p2.x, p1.y - p2.y);
    let (v2x, v2y) = (p3.x - p2.x, p3.y - p2.y);

    let dot = v1x.mul_add(v2x, v1y * v2y);
    let norms = v1x.hypot(v1y) * v2x.hypot(v2y);
    let cos_angle = (dot / (norms + NORM_EPSILON)).clamp(-1.0, 1.0);

    cos_angle.acos().to_degrees()
}

/// Unsigned tilt of the segment `p1 -> p2` from horizontal, in degrees `[0, 90]`
#[must_use]
pub fn segment_angle_from_horizontal(p1: Point2, p2: Point2) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let angle = dy.atan2(dx).to_degrees().abs();
    // atan2 spans (-180, 180]; fold so a segment and its reverse agree
    if angle > 90.0 {
        180.0 - angle
    } else {
        angle
    }
}
