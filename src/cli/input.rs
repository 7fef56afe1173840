//! Input Collector: ask for city, month and day until valid answers arrive.

use std::io::Write;
use std::str::FromStr;

use tracing::debug;

use crate::data::{City, DayFilter, MonthFilter, TripFilter};
use crate::error::{Error, Result};
use crate::stats::SEPARATOR;

use super::Prompt;

pub const CITY_PROMPT: &str = "\nEnter a city (chicago, new york city or washington): ";
pub const MONTH_PROMPT: &str =
    "Pick a month (all, january, february, march, april, may, june): ";
pub const DAY_PROMPT: &str =
    "Pick a day (all, monday, tuesday, wednesday, thursday, friday, saturday, sunday): ";

/// Ask for city, month and day, re-prompting on invalid answers.
///
/// Only end of input ends the questioning early.
pub fn collect_filters<P: Prompt, W: Write>(prompt: &mut P, out: &mut W) -> Result<TripFilter> {
    let city: City = ask_until_valid(
        prompt,
        out,
        CITY_PROMPT,
        "\nInvalid response. Pick a valid city from the given options",
    )?;
    writeln!(out, "\nSelected data file for {city}")?;

    let month: MonthFilter = ask_until_valid(
        prompt,
        out,
        MONTH_PROMPT,
        "\nInvalid Response. Please pick from the given options",
    )?;
    writeln!(out, "\nSelected {month}")?;

    let day: DayFilter = ask_until_valid(
        prompt,
        out,
        DAY_PROMPT,
        "\nInvalid Response. Please pick from the given options",
    )?;
    writeln!(out, "\nSelected {day}")?;

    writeln!(out, "{SEPARATOR}")?;

    Ok(TripFilter::new(city, month, day))
}

fn ask_until_valid<T, P, W>(prompt: &mut P, out: &mut W, question: &str, complaint: &str) -> Result<T>
where
    T: FromStr<Err = Error>,
    P: Prompt,
    W: Write,
{
    loop {
        let answer = prompt.read_line(question)?;
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(Error::InvalidInput { field, value }) => {
                debug!("Rejected {} answer '{}'", field, value);
                writeln!(out, "{complaint}")?;
            }
            Err(e) => return Err(e),
        }
    }
}
