//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::data::CityRegistry;

/// Explore US bikeshare trip data interactively.
#[derive(Parser, Debug)]
#[command(name = "bikeshare")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(short = 'd', long = "data-dir", value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Persist prompt history to this file
    #[arg(long = "history", value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Build the city registry for this run.
    pub fn registry(&self) -> CityRegistry {
        CityRegistry::new(&self.data_dir)
    }

    /// Default log filter for the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
