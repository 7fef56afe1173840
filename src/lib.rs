//! bikeshare - Explore US bikeshare trip data from the command line.
//!
//! Trip records for Chicago, New York City and Washington are loaded into an
//! Arrow `RecordBatch`, filtered by month and weekday, summarized by four
//! reports and paged through five rows at a time.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare::cli::{LinePrompt, Session};
//! use bikeshare::data::CityRegistry;
//!
//! fn main() -> anyhow::Result<()> {
//!     let registry = CityRegistry::new("./data");
//!     let mut session = Session::new(registry, LinePrompt::new()?, std::io::stdout());
//!     session.run()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +------------------------------------------------------------------+
//! |  cli/    - args, prompts, input collector, raw browser, session  |
//! +------------------------------------------------------------------+
//! |  stats/  - time, station, duration and user reports              |
//! +------------------------------------------------------------------+
//! |  data/   - city registry, filters, schema, loader, TripTable     |
//! +------------------------------------------------------------------+
//! |  io/     - dataset file opening, gzip detection                  |
//! +------------------------------------------------------------------+
//! ```

pub mod cli;
pub mod data;
pub mod error;
pub mod io;
pub mod stats;

pub use error::{Error, Result};
