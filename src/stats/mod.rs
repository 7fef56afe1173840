//! Descriptive statistics over a trip table.
//!
//! Four independent reports share only the filtered [`TripTable`]:
//!
//! - [`report_time_stats`] - most frequent month, day of month and start hour
//! - [`report_station_stats`] - most popular start/end station and route
//! - [`report_duration_stats`] - total and mean trip duration
//! - [`report_user_stats`] - user type, gender and birth year breakdowns
//!
//! Each report writes its heading, results, elapsed time and a separator line
//! to the given writer and returns the computed values.
//!
//! [`TripTable`]: crate::data::TripTable

mod duration;
mod frequency;
mod station;
mod time;
mod user;

pub use duration::{report_duration_stats, DurationStats};
pub use frequency::FrequencyTable;
pub use station::{report_station_stats, StationStats};
pub use time::{report_time_stats, TimeStats};
pub use user::{report_user_stats, BirthYears, UserStats, MISSING_LABEL};

use std::io::Write;
use std::time::Instant;

use crate::error::Result;

/// Line printed after every report and after the filter prompts.
pub const SEPARATOR: &str = "----------------------------------------";

/// Run one report body between its heading and its timing footer.
///
/// The footer is only written when the body succeeds.
fn run_report<W, T, F>(out: &mut W, heading: &str, body: F) -> Result<T>
where
    W: Write,
    F: FnOnce(&mut W) -> Result<T>,
{
    writeln!(out, "\n{heading}\n")?;
    let start = Instant::now();

    let result = body(out)?;

    let elapsed = start.elapsed();
    tracing::debug!("{} finished in {:?}", heading.trim_end_matches('.'), elapsed);
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(result)
}
