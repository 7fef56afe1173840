//! Station and route popularity report.

use std::io::Write;

use crate::data::{schema, TripTable};
use crate::error::{Error, Result};

use super::{run_report, FrequencyTable};

const REPORT: &str = "Stations and trip";

/// Most popular stations and start/end combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// `"<start station> - <end station>"`
    pub route: String,
    /// Number of trips on `route`, the highest of any route
    pub route_count: usize,
}

impl StationStats {
    pub fn compute(table: &TripTable) -> Result<Self> {
        let starts = table.strings(schema::START_STATION)?;
        let ends = table.strings(schema::END_STATION)?;

        let start_station = modal_value(starts.iter().flatten())?;
        let end_station = modal_value(ends.iter().flatten())?;

        // Routes exist only inside this report
        let routes: FrequencyTable<String> = starts
            .iter()
            .zip(ends.iter())
            .filter_map(|(from, to)| Some(route_name(from?, to?)))
            .collect();

        // Mode and maximum come from the same table, so they always agree
        let (route, route_count) = routes
            .mode()
            .map(|(route, count)| (route.clone(), count))
            .ok_or(Error::EmptyResultSet { report: REPORT })?;

        Ok(Self {
            start_station,
            end_station,
            route,
            route_count,
        })
    }
}

fn route_name(from: &str, to: &str) -> String {
    format!("{from} - {to}")
}

fn modal_value<'a>(values: impl Iterator<Item = &'a str>) -> Result<String> {
    FrequencyTable::from_values(values)
        .mode()
        .map(|(value, _)| (*value).to_string())
        .ok_or(Error::EmptyResultSet { report: REPORT })
}

/// Print the most popular stations and trip.
pub fn report_station_stats<W: Write>(table: &TripTable, out: &mut W) -> Result<StationStats> {
    run_report(out, "Calculating The Most Popular Stations and Trip...", |out| {
        let stats = StationStats::compute(table)?;
        writeln!(out, "Most Popular Start Station: {}", stats.start_station)?;
        writeln!(out, "Most Popular End Station: {}", stats.end_station)?;
        writeln!(
            out,
            "The Most Popular Route: {} ({})",
            stats.route, stats.route_count
        )?;
        Ok(stats)
    })
}
