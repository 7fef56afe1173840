//! Session Loop: collect filters, load, report, browse, offer restart.

use std::io::Write;

use tracing::{info, warn};

use crate::data::{load, CityRegistry, TripTable};
use crate::error::{Error, Result};
use crate::stats::{
    report_duration_stats, report_station_stats, report_time_stats, report_user_stats, SEPARATOR,
};

use super::browser::browse_raw;
use super::input::collect_filters;
use super::prompt::is_yes;
use super::Prompt;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user declined to restart
    Finished,
    /// Input ended at a prompt
    InputClosed,
}

/// How one pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// Every report ran (some may have reported an empty result set)
    Completed,
    /// A load or report error cut the pass short
    Aborted,
}

/// One interactive session over the three cities.
pub struct Session<P, W> {
    registry: CityRegistry,
    prompt: P,
    out: W,
    passes: usize,
}

impl<P: Prompt, W: Write> Session<P, W> {
    pub fn new(registry: CityRegistry, prompt: P, out: W) -> Self {
        Self {
            registry,
            prompt,
            out,
            passes: 0,
        }
    }

    /// Number of passes started so far.
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn into_parts(self) -> (P, W) {
        (self.prompt, self.out)
    }

    /// Run passes until the user declines to restart or input ends.
    ///
    /// Only I/O and line editor failures are returned as errors.
    pub fn run(&mut self) -> Result<SessionEnd> {
        writeln!(self.out, "{GREETING}")?;

        loop {
            match self.run_pass().and_then(|_| self.ask_restart()) {
                Ok(true) => continue,
                Ok(false) => {
                    info!("Session finished after {} pass(es)", self.passes);
                    return Ok(SessionEnd::Finished);
                }
                Err(Error::InputClosed) => {
                    writeln!(self.out, "\nGoodbye!")?;
                    info!("Input closed after {} pass(es)", self.passes);
                    return Ok(SessionEnd::InputClosed);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One pass: filters, load, the four reports, raw rows.
    ///
    /// Pass-level errors are printed here and do not propagate.
    pub fn run_pass(&mut self) -> Result<PassOutcome> {
        self.passes += 1;
        let filter = collect_filters(&mut self.prompt, &mut self.out)?;
        info!(
            "Pass {}: city={}, month={}, day={}",
            self.passes, filter.city, filter.month, filter.day
        );

        let table = match load(&self.registry, &filter) {
            Ok(table) => table,
            Err(e) if e.is_pass_level() => return self.abort(e),
            Err(e) => return Err(e),
        };

        if let Err(e) = self.run_reports(&table) {
            return if e.is_pass_level() { self.abort(e) } else { Err(e) };
        }

        browse_raw(&table, &mut self.prompt, &mut self.out)?;
        Ok(PassOutcome::Completed)
    }

    fn run_reports(&mut self, table: &TripTable) -> Result<()> {
        let out = &mut self.out;
        contain_empty(report_time_stats(table, out).map(drop), out)?;
        contain_empty(report_station_stats(table, out).map(drop), out)?;
        contain_empty(report_duration_stats(table, out).map(drop), out)?;
        contain_empty(report_user_stats(table, out).map(drop), out)?;
        Ok(())
    }

    fn abort(&mut self, e: Error) -> Result<PassOutcome> {
        warn!("Pass {} aborted: {}", self.passes, e);
        writeln!(self.out, "\nError: {e}")?;
        writeln!(self.out, "{SEPARATOR}")?;
        Ok(PassOutcome::Aborted)
    }

    fn ask_restart(&mut self) -> Result<bool> {
        let answer = self.prompt.read_line(RESTART_PROMPT)?;
        Ok(is_yes(&answer))
    }
}

/// Print an empty result set as a per-report message and carry on.
fn contain_empty<W: Write>(result: Result<()>, out: &mut W) -> Result<()> {
    match result {
        Err(Error::EmptyResultSet { report }) => {
            writeln!(out, "{report}: no trips match the selected filters")?;
            writeln!(out, "{SEPARATOR}")?;
            Ok(())
        }
        other => other,
    }
}
