//! Table rendering for raw trip rows.

use std::io::Write;

use arrow::array::{Array, RecordBatch, TimestampMicrosecondArray};
use arrow::datatypes::{DataType, TimeUnit};
use comfy_table::{Cell, Table};

/// Placeholder shown for null cells, matching how the source data reads.
const NULL_CELL: &str = "NaN";

/// Format a single cell value.
///
/// Timestamps are shown as `YYYY-MM-DD HH:MM:SS`, the way they appear in the
/// trip files; everything else uses Arrow's display formatting.
fn format_value(col: &dyn Array, row_idx: usize) -> String {
    if col.is_null(row_idx) {
        return NULL_CELL.to_string();
    }

    if let DataType::Timestamp(TimeUnit::Microsecond, None) = col.data_type() {
        if let Some(ts) = col
            .as_any()
            .downcast_ref::<TimestampMicrosecondArray>()
            .and_then(|arr| arr.value_as_datetime(row_idx))
        {
            return ts.format("%Y-%m-%d %H:%M:%S").to_string();
        }
    }

    arrow::util::display::array_value_to_string(col, row_idx).unwrap_or_else(|_| "?".to_string())
}

/// Write the rows of `batch` as a table, labelling each row with its index
/// in the full trip table (`first_row` is the index of the batch's first row).
pub fn write_rows<W: Write>(batch: &RecordBatch, first_row: usize, writer: &mut W) -> std::io::Result<()> {
    let mut table = Table::new();

    // Add header row
    let mut headers = vec![Cell::new("")];
    headers.extend(batch.schema().fields().iter().map(|f| Cell::new(f.name())));
    table.set_header(headers);

    // Add data rows
    for row_idx in 0..batch.num_rows() {
        let mut row = Vec::with_capacity(batch.num_columns() + 1);
        row.push(Cell::new(first_row + row_idx));
        for col in batch.columns() {
            row.push(Cell::new(format_value(col.as_ref(), row_idx)));
        }
        table.add_row(row);
    }

    writeln!(writer, "{table}")
}
