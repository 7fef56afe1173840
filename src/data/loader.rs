//! Dataset Loader: read a city's trip file, derive calendar columns, filter.

use std::io::{BufRead, Cursor};
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, BooleanArray, RecordBatch, StringArray, UInt32Array};
use arrow::compute::{concat_batches, filter_record_batch};
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::Schema;
use chrono::Datelike;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::io::open_dataset;

use super::schema::{self, build_trip_schema, derived_fields, missing_required};
use super::{CityRegistry, TripFilter, TripTable};

/// Rows per Arrow batch while reading CSV.
const CSV_BATCH_SIZE: usize = 8192;

/// Load the trip table for `filter.city` and apply the month/day filters.
///
/// The day filter is nested inside the month filter: with `month = all` no day
/// filtering happens, whatever day was requested.
pub fn load(registry: &CityRegistry, filter: &TripFilter) -> Result<TripTable> {
    let path = registry.dataset_path(filter.city);
    let batch = read_trip_file(&path)?;
    let mut batch = with_derived_columns(&batch)?;
    debug!("Loaded {} trips from {}", batch.num_rows(), path.display());

    if let Some(month) = filter.month.number() {
        batch = filter_month(&batch, month)?;

        if let Some(day) = filter.day.title_name() {
            batch = filter_day(&batch, &day)?;
        }
    } else if let Some(day) = filter.day.title_name() {
        warn!("Day filter '{}' ignored: it only applies together with a month filter", day);
    }

    debug!("{} trips after filtering ({}, {})", batch.num_rows(), filter.month, filter.day);
    Ok(TripTable::new(batch))
}

/// Read a whole trip file into a single batch.
pub fn read_trip_file(path: &Path) -> Result<RecordBatch> {
    let mut reader = open_dataset(path).map_err(|e| Error::dataset(path.display(), e))?;

    let mut header_line = String::new();
    let read = reader
        .read_line(&mut header_line)
        .map_err(|e| Error::dataset(path.display(), e))?;
    if read == 0 {
        return Err(Error::dataset(path.display(), "file is empty"));
    }

    let header = parse_header(&header_line).map_err(|e| Error::dataset(path.display(), e))?;
    let schema = Arc::new(build_trip_schema(&header));

    if let Some(column) = missing_required(&schema).first() {
        return Err(Error::Schema {
            column: (*column).to_string(),
            reason: format!("required column missing from {}", path.display()),
        });
    }

    let csv = ReaderBuilder::new(schema.clone())
        .with_header(false)
        .with_batch_size(CSV_BATCH_SIZE)
        .build_buffered(reader)
        .map_err(|e| Error::dataset(path.display(), e))?;

    let batches = csv
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::dataset(path.display(), e))?;

    Ok(concat_batches(&schema, &batches)?)
}

/// Split a CSV header line into column names.
fn parse_header(line: &str) -> std::result::Result<Vec<String>, arrow::error::ArrowError> {
    let (schema, _) = Format::default()
        .with_header(true)
        .infer_schema(Cursor::new(line.as_bytes()), Some(0))?;

    Ok(schema.fields().iter().map(|f| f.name().clone()).collect())
}

/// Append the derived `month` and `day_of_week` columns computed from the start time.
pub fn with_derived_columns(batch: &RecordBatch) -> Result<RecordBatch> {
    let table = TripTable::new(batch.clone());
    let start_times = table.start_times()?;

    let mut months = Vec::with_capacity(batch.num_rows());
    let mut weekdays = Vec::with_capacity(batch.num_rows());
    for i in 0..start_times.len() {
        match start_times.value_as_datetime(i).filter(|_| start_times.is_valid(i)) {
            Some(ts) => {
                months.push(Some(ts.month()));
                weekdays.push(Some(ts.format("%A").to_string()));
            }
            None => {
                months.push(None);
                weekdays.push(None);
            }
        }
    }

    let mut fields: Vec<_> = batch.schema().fields().iter().cloned().collect();
    fields.extend(derived_fields().into_iter().map(Arc::new));
    let schema = Arc::new(Schema::new(fields));

    let mut columns: Vec<ArrayRef> = batch.columns().to_vec();
    columns.push(Arc::new(UInt32Array::from(months)));
    columns.push(Arc::new(StringArray::from(weekdays)));

    Ok(RecordBatch::try_new(schema, columns)?)
}

fn filter_month(batch: &RecordBatch, month: u32) -> Result<RecordBatch> {
    let table = TripTable::new(batch.clone());
    let col = month_column(&table)?;
    let mask: BooleanArray = col.iter().map(|m| Some(m == Some(month))).collect();
    Ok(filter_record_batch(batch, &mask)?)
}

fn filter_day(batch: &RecordBatch, day: &str) -> Result<RecordBatch> {
    let table = TripTable::new(batch.clone());
    let col = table.strings(schema::DAY_OF_WEEK)?;
    let mask: BooleanArray = col.iter().map(|d| Some(d == Some(day))).collect();
    Ok(filter_record_batch(batch, &mask)?)
}

fn month_column(table: &TripTable) -> Result<&UInt32Array> {
    table
        .batch()
        .column_by_name(schema::MONTH)
        .and_then(|col| col.as_any().downcast_ref::<UInt32Array>())
        .ok_or_else(|| Error::Schema {
            column: schema::MONTH.to_string(),
            reason: "derived month column missing".to_string(),
        })
}
