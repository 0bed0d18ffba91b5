// ABOUTME: Ranges command - prints the ideal-range table in use
// ABOUTME: Shows every discipline or the one a given key resolves to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::print_report;
use bikefit::config::AppConfig;
use bikefit::formatters::OutputFormat;
use bikefit_core::errors::AppResult;
use bikefit_intelligence::IdealRangeTable;

/// Print the configured ranges, optionally narrowed to one discipline
pub fn run(config: &AppConfig, discipline: Option<&str>, format: OutputFormat) -> AppResult<()> {
    let table = config.load_range_table()?;

    let Some(requested) = discipline else {
        return print_report(&table, format);
    };

    let mut single = IdealRangeTable::empty();
    single.insert(table.resolve_key(requested), *table.resolve(requested));
    print_report(&single, format)
}
