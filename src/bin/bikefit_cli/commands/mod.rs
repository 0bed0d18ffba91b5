// ABOUTME: Re-exports command modules for bikefit-cli
// ABOUTME: Provides the analyze, evaluate, and ranges commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod evaluate;
pub mod ranges;
