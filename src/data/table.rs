//! The in-memory trip table.

use arrow::array::{Array, Float64Array, RecordBatch, StringArray, TimestampMicrosecondArray};

use crate::error::{Error, Result};

use super::schema;

/// Trip records for one city after loading and filtering.
///
/// Wraps a single Arrow `RecordBatch`. Reports only read from it.
#[derive(Debug, Clone)]
pub struct TripTable {
    batch: RecordBatch,
}

impl TripTable {
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    /// Whether the table carries a column with this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.batch.schema().index_of(name).is_ok()
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Rows `[offset, offset + len)`, clamped to the table.
    pub fn slice(&self, offset: usize, len: usize) -> RecordBatch {
        let offset = offset.min(self.num_rows());
        let len = len.min(self.num_rows() - offset);
        self.batch.slice(offset, len)
    }

    fn column<'a, T: Array + 'static>(&'a self, name: &str, expected: &str) -> Result<&'a T> {
        let col = self
            .batch
            .column_by_name(name)
            .ok_or_else(|| Error::Schema {
                column: name.to_string(),
                reason: "column not present".to_string(),
            })?;

        col.as_any().downcast_ref::<T>().ok_or_else(|| Error::Schema {
            column: name.to_string(),
            reason: format!("expected {expected}, found {}", col.data_type()),
        })
    }

    /// A text column.
    pub fn strings(&self, name: &str) -> Result<&StringArray> {
        self.column(name, "Utf8")
    }

    /// A floating point column.
    pub fn floats(&self, name: &str) -> Result<&Float64Array> {
        self.column(name, "Float64")
    }

    /// The parsed start time column.
    pub fn start_times(&self) -> Result<&TimestampMicrosecondArray> {
        self.column(schema::START_TIME, "Timestamp(Microsecond)")
    }
}

impl From<RecordBatch> for TripTable {
    fn from(batch: RecordBatch) -> Self {
        Self::new(batch)
    }
}
