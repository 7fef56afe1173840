//! User demographics report.

use std::io::Write;

use arrow::array::StringArray;
use arrow::compute;

use crate::data::{schema, TripTable};
use crate::error::Result;

use super::{run_report, FrequencyTable};

/// Label used for null cells in a frequency breakdown.
pub const MISSING_LABEL: &str = "(missing)";

/// Birth year summary, when the table has the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthYears {
    /// The table has no birth year column
    NotAvailable,
    /// The column exists but holds no values
    NoValues,
    Summary {
        earliest: i64,
        most_recent: i64,
        most_common: i64,
    },
}

/// Breakdown of who made the trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// `(user type, trips)` by descending count
    pub user_types: Vec<(String, usize)>,
    /// `(gender, trips)` by descending count; `None` when the column is absent
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: BirthYears,
}

impl UserStats {
    /// Column presence is checked on the table itself, not assumed per city.
    pub fn compute(table: &TripTable) -> Result<Self> {
        let user_types = breakdown(table.strings(schema::USER_TYPE)?);

        let genders = if table.has_column(schema::GENDER) {
            Some(breakdown(table.strings(schema::GENDER)?))
        } else {
            None
        };

        let birth_years = if table.has_column(schema::BIRTH_YEAR) {
            let years = table.floats(schema::BIRTH_YEAR)?;
            let modal = FrequencyTable::from_values(years.iter().flatten().map(whole_year));
            match (compute::min(years), compute::max(years), modal.mode()) {
                (Some(min), Some(max), Some((most_common, _))) => BirthYears::Summary {
                    earliest: whole_year(min),
                    most_recent: whole_year(max),
                    most_common: *most_common,
                },
                _ => BirthYears::NoValues,
            }
        } else {
            BirthYears::NotAvailable
        };

        Ok(Self {
            user_types,
            genders,
            birth_years,
        })
    }
}

/// Value counts of a text column, nulls counted under [`MISSING_LABEL`].
fn breakdown(col: &StringArray) -> Vec<(String, usize)> {
    let counts: FrequencyTable<&str> = col
        .iter()
        .map(|value| value.unwrap_or(MISSING_LABEL))
        .collect();

    counts
        .by_count()
        .into_iter()
        .map(|(value, count)| ((*value).to_string(), count))
        .collect()
}

// Birth years are stored as floats but are always whole numbers
fn whole_year(value: f64) -> i64 {
    value.round() as i64
}

fn write_breakdown<W: Write>(out: &mut W, title: &str, rows: &[(String, usize)]) -> Result<()> {
    writeln!(out, "{title}")?;
    let width = rows.iter().map(|(value, _)| value.len()).max().unwrap_or(0);
    for (value, count) in rows {
        writeln!(out, "  {value:<width$}  {count}")?;
    }
    Ok(())
}

fn write_not_available<W: Write>(out: &mut W, column: &str) -> Result<()> {
    writeln!(out, "\nThis dataset does not have the column called '{column}'")?;
    Ok(())
}

/// Print user type, gender and birth year statistics.
pub fn report_user_stats<W: Write>(table: &TripTable, out: &mut W) -> Result<UserStats> {
    run_report(out, "Calculating User Stats...", |out| {
        let stats = UserStats::compute(table)?;

        write_breakdown(out, schema::USER_TYPE, &stats.user_types)?;

        match &stats.genders {
            Some(genders) => {
                writeln!(out)?;
                write_breakdown(out, schema::GENDER, genders)?;
            }
            None => write_not_available(out, schema::GENDER)?,
        }

        match stats.birth_years {
            BirthYears::Summary {
                earliest,
                most_recent,
                most_common,
            } => {
                writeln!(out, "\nEarliest birth year: '{earliest}'.")?;
                writeln!(out, "Most recent birth year: '{most_recent}'.")?;
                writeln!(out, "Most common birth year: '{most_common}'.")?;
            }
            BirthYears::NoValues => {
                writeln!(out, "\nNo birth year values for the selected trips")?;
            }
            BirthYears::NotAvailable => write_not_available(out, schema::BIRTH_YEAR)?,
        }

        Ok(stats)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use arrow::array::Float64Array;
    use arrow::datatypes::{DataType, Field};

    use crate::stats::test_util::{output, trip, trips_table, with_column, Trip};

    const T: &str = "2017-03-06 08:00:00";

    fn typed<'a>(user_type: Option<&'a str>) -> Trip<'a> {
        Trip {
            user_type,
            ..trip(T, "A", "B", 60.0)
        }
    }

    fn chicago_shaped() -> TripTable {
        let table = trips_table(&[
            typed(Some("Subscriber")),
            typed(Some("Customer")),
            typed(Some("Subscriber")),
            typed(None),
            typed(Some("Subscriber")),
        ]);
        let table = with_column(
            &table,
            Field::new(schema::GENDER, DataType::Utf8, true),
            Arc::new(StringArray::from(vec![
                Some("Male"),
                None,
                Some("Female"),
                None,
                Some("Male"),
            ])),
        );
        with_column(
            &table,
            Field::new(schema::BIRTH_YEAR, DataType::Float64, true),
            Arc::new(Float64Array::from(vec![
                Some(1985.0),
                None,
                Some(1990.0),
                Some(1949.0),
                Some(1985.0),
            ])),
        )
    }

    #[test]
    fn test_counts_sum_to_row_count() {
        let table = chicago_shaped();
        let stats = UserStats::compute(&table).unwrap();

        let user_total: usize = stats.user_types.iter().map(|(_, c)| c).sum();
        assert_eq!(user_total, table.num_rows());

        let genders = stats.genders.unwrap();
        let gender_total: usize = genders.iter().map(|(_, c)| c).sum();
        assert_eq!(gender_total, table.num_rows());
    }

    #[test]
    fn test_breakdown_order() {
        let stats = UserStats::compute(&chicago_shaped()).unwrap();
        assert_eq!(
            stats.user_types,
            vec![
                ("Subscriber".to_string(), 3),
                (MISSING_LABEL.to_string(), 1),
                ("Customer".to_string(), 1),
            ]
        );
        assert_eq!(
            stats.genders.unwrap(),
            vec![
                (MISSING_LABEL.to_string(), 2),
                ("Male".to_string(), 2),
                ("Female".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_birth_years() {
        let stats = UserStats::compute(&chicago_shaped()).unwrap();
        assert_eq!(
            stats.birth_years,
            BirthYears::Summary {
                earliest: 1949,
                most_recent: 1990,
                most_common: 1985,
            }
        );
    }

    #[test]
    fn test_optional_columns_absent() {
        let table = trips_table(&[typed(Some("Subscriber")), typed(Some("Customer"))]);
        let stats = UserStats::compute(&table).unwrap();
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, BirthYears::NotAvailable);

        let mut buf = Vec::new();
        report_user_stats(&table, &mut buf).unwrap();
        let text = output(buf);
        assert!(text.contains("This dataset does not have the column called 'Gender'"));
        assert!(text.contains("This dataset does not have the column called 'Birth Year'"));
        assert!(text.contains("Subscriber"));
    }

    #[test]
    fn test_empty_table_is_not_an_error() {
        let table = with_column(
            &trips_table(&[]),
            Field::new(schema::BIRTH_YEAR, DataType::Float64, true),
            Arc::new(Float64Array::from(Vec::<f64>::new())),
        );
        let stats = UserStats::compute(&table).unwrap();
        assert!(stats.user_types.is_empty());
        assert_eq!(stats.birth_years, BirthYears::NoValues);
    }

    #[test]
    fn test_report_output() {
        let mut buf = Vec::new();
        report_user_stats(&chicago_shaped(), &mut buf).unwrap();
        let text = output(buf);

        assert!(text.contains("Calculating User Stats..."));
        assert!(text.contains("  Subscriber  3\n"));
        assert!(text.contains("Earliest birth year: '1949'."));
        assert!(text.contains("Most recent birth year: '1990'."));
        assert!(text.contains("Most common birth year: '1985'."));
        assert!(!text.contains("does not have the column"));
    }
}
