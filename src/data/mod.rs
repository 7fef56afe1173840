//! Trip data: city registry, filters, schema and loading.
//!
//! ```text
//!   CityRegistry ──► <city>.csv[.gz]
//!                          │
//!                          ▼
//!                    ┌──────────┐
//!                    │  loader  │  CSV → RecordBatch, derive month/day_of_week
//!                    └──────────┘
//!                          │  month filter (then day filter)
//!                          ▼
//!                      TripTable
//! ```

mod filter;
mod loader;
mod registry;
pub mod schema;
mod table;

pub use filter::{DayFilter, MonthFilter, TripFilter, ALL, SUPPORTED_MONTHS, WEEKDAYS};
pub use loader::{load, read_trip_file, with_derived_columns};
pub use registry::{City, CityRegistry};
pub use table::TripTable;
