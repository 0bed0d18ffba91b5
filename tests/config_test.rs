// ABOUTME: Integration tests for environment configuration and ideal-range table loading
// ABOUTME: Env-var parsing with serial isolation and table files written to temp dirs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bikefit::analysis::FitAnalyzer;
use bikefit::config::AppConfig;
use bikefit::formatters::OutputFormat;
use bikefit_core::errors::ErrorCode;
use bikefit_intelligence::{ConfigError, DisciplineRanges, IdealRangeTable};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const VARS: [&str; 6] = [
    "BIKEFIT_RANGES_PATH",
    "BIKEFIT_DISCIPLINE",
    "BIKEFIT_SMOOTHING_WINDOW",
    "BIKEFIT_PARALLEL_THRESHOLD",
    "BIKEFIT_MIN_VALID_FRAMES",
    "BIKEFIT_OUTPUT_FORMAT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

const CUSTOM_TABLE: &str = r#"{
    "road": {
        "knee_extension": { "min": 138, "max": 148, "weight": 40 },
        "hip_angle": { "min": 40, "max": 55, "weight": 20 },
        "back_angle": { "min": 35, "max": 45, "weight": 15 },
        "ankle_angle": { "min": 90, "max": 120, "weight": 10 },
        "elbow_angle": { "min": 150, "max": 165, "weight": 5 }
    },
    "Track": {
        "knee_extension": { "min": 142, "max": 152 },
        "hip_angle": { "min": 35, "max": 48 },
        "back_angle": { "min": 20, "max": 32 },
        "ankle_angle": { "min": 90, "max": 120 },
        "elbow_angle": { "min": 140, "max": 160 }
    }
}"#;

fn write_table(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("ranges.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.output_format, OutputFormat::Json);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("BIKEFIT_DISCIPLINE", " TT ");
    env::set_var("BIKEFIT_SMOOTHING_WINDOW", "5");
    env::set_var("BIKEFIT_PARALLEL_THRESHOLD", "16");
    env::set_var("BIKEFIT_MIN_VALID_FRAMES", "12");
    env::set_var("BIKEFIT_OUTPUT_FORMAT", "text");

    let config = AppConfig::from_env();
    clear_env();

    assert_eq!(config.default_discipline, "tt");
    assert_eq!(config.smoothing_window, 5);
    assert_eq!(config.parallel_threshold, 16);
    assert_eq!(config.min_valid_frames, 12);
    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
#[serial]
fn test_unparseable_numbers_fall_back() {
    clear_env();
    env::set_var("BIKEFIT_PARALLEL_THRESHOLD", "lots");
    env::set_var("BIKEFIT_MIN_VALID_FRAMES", "0");
    env::set_var("BIKEFIT_RANGES_PATH", "   ");

    let config = AppConfig::from_env();
    clear_env();

    assert_eq!(config.parallel_threshold, 64);
    assert_eq!(config.min_valid_frames, 1);
    assert!(config.ranges_path.is_none());
}

#[test]
fn test_table_loaded_from_file() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        ranges_path: Some(write_table(&dir, CUSTOM_TABLE)),
        ..AppConfig::default()
    };

    let table = config.load_range_table().unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.disciplines().collect::<Vec<_>>(), vec!["road", "track"]);
    assert!(table.resolve("track").knee_extension.weight.is_none());
    assert!((table.resolve("road").knee_extension.min - 138.0).abs() < f64::EPSILON);
    // keys absent from a custom table fall back to its own road entry
    assert_eq!(table.resolve("tt"), table.resolve("road"));
}

#[test]
fn test_analyzer_from_config_uses_file_table() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        ranges_path: Some(write_table(&dir, CUSTOM_TABLE)),
        smoothing_window: 3,
        ..AppConfig::default()
    };

    let analyzer = FitAnalyzer::from_config(&config).unwrap();
    assert_eq!(analyzer.table().len(), 2);
    assert_eq!(analyzer.effective_discipline("TRACK"), "track");
}

#[test]
fn test_missing_table_file() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        ranges_path: Some(dir.path().join("absent.json")),
        ..AppConfig::default()
    };

    let err = config.load_range_table().unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(err.message.starts_with("ideal-range table"));
    assert!(err.message.ends_with("not found"));
    assert!(err.details["path"].as_str().unwrap().ends_with("absent.json"));
}

#[test]
fn test_table_path_pointing_at_directory() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        ranges_path: Some(dir.path().to_path_buf()),
        ..AppConfig::default()
    };

    let err = config.load_range_table().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);
    assert_eq!(err.code.exit_code(), 5);
    assert!(err.message.contains("is a directory"));
    assert!(FitAnalyzer::from_config(&config).is_err());
}

#[test]
fn test_invalid_table_file() {
    let dir = TempDir::new().unwrap();
    let cases: [&str; 4] = [
        "{ not json",
        r#"{ "tt": { "knee_extension": { "min": 1, "max": 2 } } }"#,
        &CUSTOM_TABLE.replace(r#""min": 138, "max": 148"#, r#""min": 150, "max": 148"#),
        &CUSTOM_TABLE.replace(r#""weight": 40"#, r#""weight": -1"#),
    ];

    for contents in cases {
        let config = AppConfig {
            ranges_path: Some(write_table(&dir, contents)),
            ..AppConfig::default()
        };
        let err = config.load_range_table().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "{contents}");
    }
}

#[test]
fn test_table_validation_errors() {
    assert!(matches!(
        IdealRangeTable::from_json_str("{}"),
        Err(ConfigError::MissingField("road"))
    ));
    assert!(matches!(
        IdealRangeTable::from_json_str("[1, 2]"),
        Err(ConfigError::Parse(_))
    ));

    let bad = CUSTOM_TABLE.replace(r#""min": 20, "max": 32"#, r#""min": 32, "max": 32"#);
    match IdealRangeTable::from_json_str(&bad) {
        Err(ConfigError::InvalidRange(message)) => {
            assert!(message.starts_with("track.back_angle"), "{message}");
        }
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn test_builtin_table_round_trips_through_json() {
    let builtin = IdealRangeTable::builtin();
    let json = serde_json::to_string(&builtin).unwrap();
    let parsed = IdealRangeTable::from_json_str(&json).unwrap();
    assert_eq!(parsed, builtin);
    assert_eq!(parsed.resolve("commute"), &DisciplineRanges::commute());
}
