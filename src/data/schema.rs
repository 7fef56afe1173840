//! Arrow schema for trip files.

use arrow::datatypes::{DataType, Field, Schema, TimeUnit};

pub const START_TIME: &str = "Start Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Derived calendar month (1-12) of the start time.
pub const MONTH: &str = "month";
/// Derived full weekday name of the start time.
pub const DAY_OF_WEEK: &str = "day_of_week";

/// Columns every city file must provide.
pub const REQUIRED_COLUMNS: [&str; 5] =
    [START_TIME, START_STATION, END_STATION, TRIP_DURATION, USER_TYPE];

/// Arrow type used when reading a source column.
pub fn column_type(name: &str) -> DataType {
    match name {
        START_TIME => DataType::Timestamp(TimeUnit::Microsecond, None),
        TRIP_DURATION | BIRTH_YEAR => DataType::Float64,
        _ => DataType::Utf8,
    }
}

/// Build the read schema for a trip file from its header names.
pub fn build_trip_schema<S: AsRef<str>>(header: &[S]) -> Schema {
    let fields: Vec<Field> = header
        .iter()
        .map(|name| Field::new(name.as_ref(), column_type(name.as_ref()), true))
        .collect();
    Schema::new(fields)
}

/// Fields appended by the loader.
pub fn derived_fields() -> [Field; 2] {
    [
        Field::new(MONTH, DataType::UInt32, true),
        Field::new(DAY_OF_WEEK, DataType::Utf8, true),
    ]
}

/// Names of required columns absent from `schema`.
pub fn missing_required(schema: &Schema) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .into_iter()
        .filter(|name| schema.index_of(name).is_err())
        .collect()
}
