// ABOUTME: Discipline-keyed ideal angle ranges and weights used by the fit rule evaluator
// ABOUTME: Built-in defaults for road/tt/mtb/gravel/commute, JSON loading, road fallback, validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ideal-Range Table
//!
//! The table maps a lowercase discipline key to the ideal interval of each
//! scored angle. The JSON document has the shape
//!
//! ```json
//! { "road": { "knee_extension": { "min": 140, "max": 150, "weight": 30 }, ... } }
//! ```
//!
//! `weight` is optional on every entry; the evaluator substitutes the
//! region's default weight when it is absent. A `"road"` entry is required
//! because every unknown discipline resolves to it.

use super::error::ConfigError;
use bikefit_core::constants::disciplines;
use bikefit_core::models::{AngleKind, RidingStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Ideal interval for one angle, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
    /// Contribution to the overall score; `None` means "use the default"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl IdealRange {
    /// Range with an explicit weight
    #[must_use]
    pub const fn new(min: f64, max: f64, weight: f64) -> Self {
        Self {
            min,
            max,
            weight: Some(weight),
        }
    }

    /// Range without a weight
    #[must_use]
    pub const fn unweighted(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            weight: None,
        }
    }

    /// `max - min`
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the interval
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Whether `value` lies inside the inclusive interval
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Configured weight, or `default` when the entry omits it
    #[must_use]
    pub fn weight_or(&self, default: f64) -> f64 {
        self.weight.unwrap_or(default)
    }
}

/// Ideal ranges of the five scored angles for one discipline
///
/// Keys other than the five scored angles (e.g. `shoulder_angle`) are
/// accepted in JSON and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisciplineRanges {
    /// Knee extension at the bottom of the stroke
    pub knee_extension: IdealRange,
    /// Most closed hip angle
    pub hip_angle: IdealRange,
    /// Torso angle from horizontal
    pub back_angle: IdealRange,
    /// Ankle angle midpoint
    pub ankle_angle: IdealRange,
    /// Mean elbow angle
    pub elbow_angle: IdealRange,
}

static ROAD_RANGES: DisciplineRanges = DisciplineRanges::road();

impl DisciplineRanges {
    /// Range for a scored angle; `None` for angles that are not scored
    #[must_use]
    pub const fn get(&self, kind: AngleKind) -> Option<&IdealRange> {
        match kind {
            AngleKind::KneeExtension => Some(&self.knee_extension),
            AngleKind::HipAngle => Some(&self.hip_angle),
            AngleKind::BackAngle => Some(&self.back_angle),
            AngleKind::AnkleAngle => Some(&self.ankle_angle),
            AngleKind::ElbowAngle => Some(&self.elbow_angle),
            AngleKind::ShoulderAngle => None,
        }
    }

    /// Entries as `(angle key, range)` pairs
    fn entries(&self) -> [(&'static str, &IdealRange); 5] {
        [
            (AngleKind::KneeExtension.as_str(), &self.knee_extension),
            (AngleKind::HipAngle.as_str(), &self.hip_angle),
            (AngleKind::BackAngle.as_str(), &self.back_angle),
            (AngleKind::AnkleAngle.as_str(), &self.ankle_angle),
            (AngleKind::ElbowAngle.as_str(), &self.elbow_angle),
        ]
    }

    /// Road: moderate drop, efficient power position
    #[must_use]
    pub const fn road() -> Self {
        Self {
            knee_extension: IdealRange::new(140.0, 150.0, 30.0),
            hip_angle: IdealRange::new(40.0, 55.0, 20.0),
            back_angle: IdealRange::new(35.0, 45.0, 15.0),
            ankle_angle: IdealRange::new(90.0, 120.0, 10.0),
            elbow_angle: IdealRange::new(150.0, 165.0, 5.0),
        }
    }

    /// Time trial: flat back, closed hip, elbows bent on the extensions
    #[must_use]
    pub const fn time_trial() -> Self {
        Self {
            knee_extension: IdealRange::new(140.0, 150.0, 30.0),
            hip_angle: IdealRange::new(35.0, 50.0, 20.0),
            back_angle: IdealRange::new(10.0, 25.0, 15.0),
            ankle_angle: IdealRange::new(90.0, 120.0, 10.0),
            elbow_angle: IdealRange::new(90.0, 110.0, 5.0),
        }
    }

    /// Mountain: more upright, slightly lower saddle for handling
    #[must_use]
    pub const fn mountain() -> Self {
        Self {
            knee_extension: IdealRange::new(135.0, 148.0, 30.0),
            hip_angle: IdealRange::new(45.0, 60.0, 20.0),
            back_angle: IdealRange::new(40.0, 55.0, 15.0),
            ankle_angle: IdealRange::new(90.0, 120.0, 10.0),
            elbow_angle: IdealRange::new(145.0, 165.0, 5.0),
        }
    }

    /// Gravel: between road and mountain
    #[must_use]
    pub const fn gravel() -> Self {
        Self {
            knee_extension: IdealRange::new(140.0, 150.0, 30.0),
            hip_angle: IdealRange::new(42.0, 58.0, 20.0),
            back_angle: IdealRange::new(38.0, 50.0, 15.0),
            ankle_angle: IdealRange::new(90.0, 120.0, 10.0),
            elbow_angle: IdealRange::new(148.0, 165.0, 5.0),
        }
    }

    /// Commute: upright and relaxed
    #[must_use]
    pub const fn commute() -> Self {
        Self {
            knee_extension: IdealRange::new(135.0, 150.0, 30.0),
            hip_angle: IdealRange::new(55.0, 75.0, 20.0),
            back_angle: IdealRange::new(55.0, 75.0, 15.0),
            ankle_angle: IdealRange::new(90.0, 120.0, 10.0),
            elbow_angle: IdealRange::new(150.0, 170.0, 5.0),
        }
    }
}

/// Discipline key -> ideal ranges
///
/// Read-only to the engine. Build it once (built-in defaults or a validated
/// JSON document) and share it by reference. Deserializing goes through the
/// same key normalization and validation as [`IdealRangeTable::from_json_str`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, DisciplineRanges>",
    into = "BTreeMap<String, DisciplineRanges>"
)]
pub struct IdealRangeTable {
    disciplines: BTreeMap<String, DisciplineRanges>,
}

impl Default for IdealRangeTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<BTreeMap<String, DisciplineRanges>> for IdealRangeTable {
    type Error = ConfigError;

    fn try_from(raw: BTreeMap<String, DisciplineRanges>) -> Result<Self, Self::Error> {
        let mut disciplines = BTreeMap::new();
        for (key, ranges) in raw {
            let normalized = key.trim().to_lowercase();
            if disciplines.contains_key(&normalized) {
                return Err(ConfigError::DuplicateDiscipline(normalized));
            }
            disciplines.insert(normalized, ranges);
        }

        let table = Self { disciplines };
        table.validate()?;
        Ok(table)
    }
}

impl From<IdealRangeTable> for BTreeMap<String, DisciplineRanges> {
    fn from(table: IdealRangeTable) -> Self {
        table.disciplines
    }
}

impl IdealRangeTable {
    /// Table with the built-in road, tt, mtb, gravel, and commute entries
    #[must_use]
    pub fn builtin() -> Self {
        let disciplines = [
            (disciplines::ROAD, DisciplineRanges::road()),
            (disciplines::TIME_TRIAL, DisciplineRanges::time_trial()),
            (disciplines::MOUNTAIN, DisciplineRanges::mountain()),
            (disciplines::GRAVEL, DisciplineRanges::gravel()),
            (disciplines::COMMUTE, DisciplineRanges::commute()),
        ]
        .into_iter()
        .map(|(key, ranges)| (key.to_owned(), ranges))
        .collect();

        Self { disciplines }
    }

    /// Table with no entries; fill it with [`IdealRangeTable::insert`]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            disciplines: BTreeMap::new(),
        }
    }

    /// Parse and validate a JSON table, lowercasing discipline keys
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON or a discipline entry
    /// missing one of the five scored angles, `DuplicateDiscipline` when two
    /// keys differ only in case, and the [`validate`] errors for well-formed
    /// but unusable tables.
    ///
    /// [`validate`]: IdealRangeTable::validate
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: BTreeMap<String, DisciplineRanges> = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Add or replace a discipline entry
    pub fn insert(&mut self, discipline: &str, ranges: DisciplineRanges) {
        self.disciplines
            .insert(discipline.trim().to_lowercase(), ranges);
    }

    /// Exact lookup without fallback
    #[must_use]
    pub fn get(&self, discipline: &str) -> Option<&DisciplineRanges> {
        self.disciplines.get(discipline)
    }

    /// Table key applied for `discipline`
    ///
    /// Lookup is case-insensitive and accepts the riding-style aliases
    /// (`time_trial`, `mountain`, ...). Unknown keys map to `road`.
    #[must_use]
    pub fn resolve_key<'a>(&'a self, discipline: &str) -> &'a str {
        let key = discipline.trim().to_lowercase();
        if let Some((found, _)) = self.disciplines.get_key_value(&key) {
            return found;
        }
        if let Ok(style) = key.parse::<RidingStyle>() {
            if let Some((found, _)) = self.disciplines.get_key_value(style.as_key()) {
                return found;
            }
        }

        debug!(
            discipline = %key,
            fallback = disciplines::FALLBACK,
            "Unknown discipline, using fallback ranges"
        );
        disciplines::FALLBACK
    }

    /// Ranges for `discipline`, falling back to road for unknown keys
    ///
    /// Keys resolve as in [`IdealRangeTable::resolve_key`]. A table without
    /// a road entry falls back to the built-in road ranges so evaluation
    /// never fails.
    #[must_use]
    pub fn resolve(&self, discipline: &str) -> &DisciplineRanges {
        self.disciplines
            .get(self.resolve_key(discipline))
            .unwrap_or(&ROAD_RANGES)
    }

    /// Discipline keys in sorted order
    pub fn disciplines(&self) -> impl Iterator<Item = &str> {
        self.disciplines.keys().map(String::as_str)
    }

    /// Number of disciplines
    #[must_use]
    pub fn len(&self) -> usize {
        self.disciplines.len()
    }

    /// Whether the table has no disciplines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disciplines.is_empty()
    }

    /// Check the table is usable by the evaluator
    ///
    /// # Errors
    ///
    /// - `MissingField` when there is no road entry
    /// - `InvalidRange` when a bound is non-finite or `min >= max`
    /// - `InvalidWeights` when a weight is negative or non-finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.disciplines.contains_key(disciplines::FALLBACK) {
            return Err(ConfigError::MissingField("road"));
        }

        for (discipline, ranges) in &self.disciplines {
            for (angle, range) in ranges.entries() {
                if !range.min.is_finite() || !range.max.is_finite() || range.min >= range.max {
                    return Err(ConfigError::InvalidRange(format!(
                        "{discipline}.{angle}: min {} must be below max {}",
                        range.min, range.max
                    )));
                }
                if let Some(weight) = range.weight {
                    if !weight.is_finite() || weight < 0.0 {
                        return Err(ConfigError::InvalidWeights(format!(
                            "{discipline}.{angle}: weight {weight} must be a non-negative number"
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const ROAD_ONLY: &str = r#"{
        "Road": {
            "knee_extension": {"min": 140, "max": 150, "weight": 30},
            "hip_angle": {"min": 40, "max": 55},
            "back_angle": {"min": 35, "max": 45, "weight": 15},
            "ankle_angle": {"min": 90, "max": 120, "weight": 10},
            "elbow_angle": {"min": 150, "max": 165, "weight": 5},
            "shoulder_angle": {"min": 80, "max": 95, "weight": 0}
        }
    }"#;

    #[test]
    fn test_builtin_is_valid() {
        let table = IdealRangeTable::builtin();
        assert!(table.validate().is_ok());
        assert_eq!(
            table.disciplines().collect::<Vec<_>>(),
            vec!["commute", "gravel", "mtb", "road", "tt"]
        );
    }

    #[test]
    fn test_unknown_discipline_falls_back_to_road() {
        let table = IdealRangeTable::builtin();
        assert_eq!(table.resolve("track"), table.resolve("road"));
        assert_eq!(table.resolve(" TT "), &DisciplineRanges::time_trial());
        assert_eq!(table.resolve("mountain"), &DisciplineRanges::mountain());
        assert_eq!(table.resolve_key("Time-Trial"), "tt");
        assert_eq!(table.resolve_key("track"), "road");
    }

    #[test]
    fn test_json_keys_are_lowercased_and_weight_optional() {
        let table = IdealRangeTable::from_json_str(ROAD_ONLY).unwrap();
        let road = table.get("road").unwrap();
        assert_eq!(road.hip_angle.weight, None);
        assert!((road.hip_angle.weight_or(20.0) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_road_rejected() {
        let json = ROAD_ONLY.replace("Road", "gravel");
        let err = IdealRangeTable::from_json_str(&json).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("road")));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let json = ROAD_ONLY.replace(r#""min": 140, "max": 150"#, r#""min": 150, "max": 140"#);
        let err = IdealRangeTable::from_json_str(&json).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange(_)));
        assert!(err.to_string().contains("road.knee_extension"));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let json = ROAD_ONLY.replace(r#""weight": 5"#, r#""weight": -5"#);
        let err = IdealRangeTable::from_json_str(&json).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWeights(_)));
    }

    #[test]
    fn test_missing_angle_is_parse_error() {
        let json = r#"{"road": {"knee_extension": {"min": 140, "max": 150}}}"#;
        let err = IdealRangeTable::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_keys_differing_only_in_case_rejected() {
        let json = ROAD_ONLY.replacen(
            "\"Road\"",
            r#""road": {
                "knee_extension": {"min": 130, "max": 140},
                "hip_angle": {"min": 40, "max": 55},
                "back_angle": {"min": 35, "max": 45},
                "ankle_angle": {"min": 90, "max": 120},
                "elbow_angle": {"min": 150, "max": 165}
            },
            "Road""#,
            1,
        );
        let err = IdealRangeTable::from_json_str(&json).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateDiscipline(ref key) if key == "road"));
    }

    #[test]
    fn test_deserialize_normalizes_and_validates() {
        let table: IdealRangeTable = serde_json::from_str(ROAD_ONLY).unwrap();
        assert!(table.get("road").is_some());
        assert!(table.get("Road").is_none());

        let no_road = ROAD_ONLY.replace("Road", "gravel");
        assert!(serde_json::from_str::<IdealRangeTable>(&no_road).is_err());

        let inverted = ROAD_ONLY.replace(r#""min": 140, "max": 150"#, r#""min": 150, "max": 140"#);
        let err = serde_json::from_str::<IdealRangeTable>(&inverted).unwrap_err();
        assert!(err.to_string().contains("road.knee_extension"));
    }

    #[test]
    fn test_table_without_road_still_resolves() {
        let mut table = IdealRangeTable::empty();
        table.insert("gravel", DisciplineRanges::gravel());
        assert_eq!(table.resolve("road"), &DisciplineRanges::road());
    }
}
