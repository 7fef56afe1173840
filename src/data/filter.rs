//! Month and day-of-week filter values chosen at the prompts.

use std::str::FromStr;

use crate::error::Error;

use super::City;

/// Months covered by the trip data, in calendar order.
pub const SUPPORTED_MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Weekday names accepted at the day prompt, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Keyword that disables a filter.
pub const ALL: &str = "all";

/// Month filter: either every month or one supported month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// Calendar month number, 1 (January) through 6 (June)
    Month(u32),
}

impl MonthFilter {
    /// Calendar month number, or `None` for `all`.
    pub fn number(&self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Month(n) => Some(*n),
        }
    }
}

impl std::fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthFilter::All => write!(f, "{ALL}"),
            MonthFilter::Month(n) => {
                let name = usize::try_from(*n)
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|idx| SUPPORTED_MONTHS.get(idx))
                    .copied()
                    .unwrap_or("?");
                write!(f, "{name}")
            }
        }
    }
}

impl FromStr for MonthFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == ALL {
            return Ok(MonthFilter::All);
        }

        // Ordinal position in the supported list gives the month number
        SUPPORTED_MONTHS
            .iter()
            .position(|m| *m == normalized)
            .and_then(|idx| u32::try_from(idx + 1).ok())
            .map(MonthFilter::Month)
            .ok_or(Error::InvalidInput {
                field: "month",
                value: normalized,
            })
    }
}

/// Day-of-week filter: either every day or one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    /// Index into [`WEEKDAYS`]
    Day(usize),
}

impl DayFilter {
    /// Title-cased weekday name as stored in the `day_of_week` column.
    pub fn title_name(&self) -> Option<String> {
        match self {
            DayFilter::All => None,
            DayFilter::Day(idx) => WEEKDAYS.get(*idx).map(|name| title_case(name)),
        }
    }
}

impl std::fmt::Display for DayFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayFilter::All => write!(f, "{ALL}"),
            DayFilter::Day(idx) => write!(f, "{}", WEEKDAYS.get(*idx).copied().unwrap_or("?")),
        }
    }
}

impl FromStr for DayFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == ALL {
            return Ok(DayFilter::All);
        }

        WEEKDAYS
            .iter()
            .position(|d| *d == normalized)
            .map(DayFilter::Day)
            .ok_or(Error::InvalidInput {
                field: "day",
                value: normalized,
            })
    }
}

/// The full selection made by the Input Collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripFilter {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl TripFilter {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Whether the day filter will actually be applied.
    ///
    /// The day filter only takes effect together with a month filter.
    pub fn applies_day(&self) -> bool {
        self.month != MonthFilter::All && self.day != DayFilter::All
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
