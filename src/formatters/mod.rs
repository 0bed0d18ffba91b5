// ABOUTME: Output format abstraction for fit reports and the presentation mappings they use
// ABOUTME: Supports JSON (default) and plain text; owns severity/category colors and icons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! The engine exposes only categorical values (`Severity`, `FitCategory`).
//! Colors and icons are a display concern and live here.
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, stable machine-readable output
//! - **Text**: Human-readable report for a terminal
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bikefit::formatters::{format_output, OutputFormat};
//!
//! let output = format_output(&assessment, OutputFormat::Text)?;
//! println!("{}", output.data);
//! ```

use crate::analysis::FitAssessment;
use bikefit_core::models::{FitCategory, FitScore, Recommendation, Severity};
use bikefit_intelligence::{DisciplineRanges, FitEvaluation, IdealRangeTable};
use serde::Serialize;
use std::fmt::{self, Write as _};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default)
    #[default]
    Json,
    /// Plain-text report
    Text,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Self::Text,
            _ => Self::Json,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hex color for a severity
#[must_use]
pub const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Optimal => "#22c55e",
        Severity::Minor => "#84cc16",
        Severity::Moderate => "#eab308",
        Severity::Critical => "#ef4444",
    }
}

/// Icon for a severity
#[must_use]
pub const fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Optimal => "✅",
        Severity::Minor => "🟡",
        Severity::Moderate => "🟠",
        Severity::Critical => "🔴",
    }
}

/// Hex color for a score category
#[must_use]
pub const fn category_color(category: FitCategory) -> &'static str {
    match category {
        FitCategory::Excellent => "#22c55e",
        FitCategory::Good => "#84cc16",
        FitCategory::Fair => "#eab308",
        FitCategory::Poor => "#ef4444",
    }
}

/// Types that have a plain-text rendering
pub trait TextReport {
    /// Render as a human-readable multi-line report
    fn render_text(&self) -> String;
}

fn write_score(out: &mut String, score: &FitScore) {
    let category = score.category();
    let _ = writeln!(
        out,
        "Overall fit score: {:.1} ({}, {})",
        score.overall,
        category,
        category_color(category)
    );
    for (label, value) in [
        ("Knee", score.knee_score),
        ("Hip", score.hip_score),
        ("Back", score.back_score),
        ("Ankle", score.ankle_score),
        ("Reach", score.reach_score),
    ] {
        let _ = writeln!(out, "  {label:<6} {value:>5.1}");
    }
}

fn write_recommendations(out: &mut String, recommendations: &[Recommendation]) {
    let _ = writeln!(out, "\nRecommendations:");
    for rec in recommendations {
        let _ = writeln!(
            out,
            "{} [{}] {}: {} (ideal {})",
            severity_icon(rec.severity),
            rec.severity,
            rec.component.display_name(),
            rec.current_value,
            rec.ideal_range
        );
        let _ = writeln!(out, "    {}", rec.adjustment);
        let _ = writeln!(out, "    {}", rec.rationale);
    }
}

fn write_ranges(out: &mut String, discipline: &str, ranges: &DisciplineRanges) {
    let _ = writeln!(out, "{discipline}");
    for (angle, range) in [
        ("knee_extension", &ranges.knee_extension),
        ("hip_angle", &ranges.hip_angle),
        ("back_angle", &ranges.back_angle),
        ("ankle_angle", &ranges.ankle_angle),
        ("elbow_angle", &ranges.elbow_angle),
    ] {
        let weight = range
            .weight
            .map_or_else(|| "default".to_owned(), |w| format!("{w}"));
        let _ = writeln!(
            out,
            "  {angle:<15} {}–{}°  weight {weight}",
            range.min, range.max
        );
    }
}

impl TextReport for FitEvaluation {
    fn render_text(&self) -> String {
        let mut out = String::new();
        write_score(&mut out, &self.score);
        write_recommendations(&mut out, &self.recommendations);
        out
    }
}

impl TextReport for FitAssessment {
    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Bike fit assessment {}", self.id);
        let _ = writeln!(
            out,
            "Discipline: {}  Frames: {} valid / {} total  Generated: {}\n",
            self.discipline,
            self.valid_frames,
            self.total_frames,
            self.generated_at.to_rfc3339()
        );
        write_score(&mut out, &self.score);

        let a = &self.angles;
        let _ = writeln!(out, "\nAngles:");
        let _ = writeln!(
            out,
            "  knee extension {:.1}–{:.1}°  (max flexion {:.1}°)",
            a.knee_extension_min, a.knee_extension_max, a.knee_flexion_max
        );
        let _ = writeln!(out, "  hip            {:.1}–{:.1}°", a.hip_angle_min, a.hip_angle_max);
        let _ = writeln!(out, "  ankle          {:.1}–{:.1}°", a.ankle_angle_min, a.ankle_angle_max);
        let _ = writeln!(out, "  back           {:.1}°", a.back_angle);
        let _ = writeln!(out, "  shoulder       {:.1}°", a.shoulder_angle);
        let _ = writeln!(out, "  elbow          {:.1}°", a.elbow_angle);

        if let Some(saddle) = self.estimated_saddle_height_cm {
            let _ = writeln!(out, "\nEstimated saddle height (LeMond): {saddle:.1} cm");
        }
        if !self.warnings.is_empty() {
            let _ = writeln!(out, "\nMeasurement warnings:");
            for warning in &self.warnings {
                let _ = writeln!(out, "  - {warning}");
            }
        }

        write_recommendations(&mut out, &self.recommendations);
        out
    }
}

impl TextReport for IdealRangeTable {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for discipline in self.disciplines() {
            write_ranges(&mut out, discipline, self.resolve(discipline));
        }
        out
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

/// Format a report in the requested output format
///
/// JSON output is pretty-printed.
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output<T: Serialize + TextReport>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Text => data.render_text(),
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Render any report as plain text
#[must_use]
pub fn render_text<T: TextReport>(data: &T) -> String {
    data.render_text()
}
