//! Trip duration report.

use std::io::Write;

use arrow::array::Array;
use arrow::compute;

use crate::data::{schema, TripTable};
use crate::error::{Error, Result};

use super::run_report;

const REPORT: &str = "Trip duration";

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    pub mean: f64,
}

impl DurationStats {
    /// Sum of all durations; 0 for an empty table.
    pub fn total(table: &TripTable) -> Result<f64> {
        let durations = table.floats(schema::TRIP_DURATION)?;
        Ok(compute::sum(durations).unwrap_or(0.0))
    }

    pub fn compute(table: &TripTable) -> Result<Self> {
        let durations = table.floats(schema::TRIP_DURATION)?;
        let total = compute::sum(durations).unwrap_or(0.0);

        let count = durations.len() - durations.null_count();
        if count == 0 {
            return Err(Error::EmptyResultSet { report: REPORT });
        }

        Ok(Self {
            total,
            mean: total / count as f64,
        })
    }
}

/// Print total and mean trip duration.
///
/// On an empty table the total (0) is still printed before the mean fails.
pub fn report_duration_stats<W: Write>(table: &TripTable, out: &mut W) -> Result<DurationStats> {
    run_report(out, "Calculating Trip Duration...", |out| {
        let total = DurationStats::total(table)?;
        writeln!(out, "\nTotal travel Time: {total}")?;

        let stats = DurationStats::compute(table)?;
        writeln!(out, "Mean Travel Time: {}", stats.mean)?;
        Ok(stats)
    })
}
