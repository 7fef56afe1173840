//! Time-of-travel report.

use std::io::Write;

use arrow::array::Array;
use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::data::TripTable;
use crate::error::{Error, Result};

use super::{run_report, FrequencyTable};

const REPORT: &str = "Time of travel";

/// Most frequent calendar values of the trip start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    /// Calendar month, 1-12
    pub month: u32,
    /// Calendar day of the month, 1-31 (not the weekday)
    pub day_of_month: u32,
    /// Hour of day, 0-23
    pub hour: u32,
}

impl TimeStats {
    /// Compute the modal month, day of month and hour of `table`.
    pub fn compute(table: &TripTable) -> Result<Self> {
        let start_times = table.start_times()?;
        let timestamps: Vec<NaiveDateTime> = (0..start_times.len())
            .filter(|&i| start_times.is_valid(i))
            .filter_map(|i| start_times.value_as_datetime(i))
            .collect();

        let mode_of = |part: fn(&NaiveDateTime) -> u32| {
            FrequencyTable::from_values(timestamps.iter().map(part))
                .mode()
                .map(|(value, _)| *value)
                .ok_or(Error::EmptyResultSet { report: REPORT })
        };

        Ok(Self {
            month: mode_of(|ts| ts.month())?,
            day_of_month: mode_of(|ts| ts.day())?,
            hour: mode_of(|ts| ts.hour())?,
        })
    }
}

/// Print the most frequent times of travel.
pub fn report_time_stats<W: Write>(table: &TripTable, out: &mut W) -> Result<TimeStats> {
    run_report(out, "Calculating The Most Frequent Times of Travel...", |out| {
        let stats = TimeStats::compute(table)?;
        writeln!(out, "Most Popular Month: {}", stats.month)?;
        writeln!(out, "Most Popular Day: {}", stats.day_of_month)?;
        writeln!(out, "Most Popular Start Hour: {}", stats.hour)?;
        Ok(stats)
    })
}
