// ABOUTME: Recommendation ordering for presentation, most urgent severity first
// ABOUTME: Stable sort so equal severities keep the evaluator's region order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bikefit_core::models::Recommendation;

/// Sort recommendations critical, moderate, minor, optimal
///
/// The sort is stable: recommendations of equal severity stay in the order
/// they were produced (knee, hip, back, ankle, elbow).
#[must_use]
pub fn rank_recommendations(mut recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    recommendations.sort_by_key(|rec| rec.severity.urgency_rank());
    recommendations
}
