// ABOUTME: Core types and constants for bike-fit biomechanics analysis
// ABOUTME: Foundation crate with error handling, pose and fit models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Bikefit Core
//!
//! Foundation crate providing shared types and constants for the bike-fit
//! workspace. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Biomechanical thresholds and scoring constants organized by domain
//! - **models**: Pose landmarks, angle summaries, fit scores, recommendations, rider and bike

/// Unified error handling system with standard error codes
pub mod errors;

/// Scoring, geometry, and validation constants organized by domain
pub mod constants;

/// Core data models (pose frames, angles, scores, recommendations, rider, bike)
pub mod models;
