//! Raw Row Browser: page through the trip table five rows at a time.
//!
//! ```text
//!            yes/y: show [cursor, cursor+5)
//!   ┌──────────────────┐ ───────────────────────► ┌─────────────────────┐
//!   │ AwaitFirstPrompt │                          │ AwaitContinuePrompt │
//!   └──────────────────┘ ◄─────────────────────── └─────────────────────┘
//!     │  ▲   │            yes/y: cursor += 5,          │
//!     │  └───┘            show [cursor, cursor+5)      │ anything else, or
//!     │  invalid                                       │ cursor+5 >= rows:
//!     │ no/n                                           │ show [cursor, rows-1), end
//!     ▼                                                ▼
//!   Done ◄─────────────────────────────────────────────┘
//! ```

use std::io::Write;
use std::time::Instant;

use crate::data::TripTable;
use crate::error::Result;
use crate::stats::SEPARATOR;

use super::output::write_rows;
use super::prompt::{is_yes, normalize};
use super::Prompt;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

pub const RAW_PROMPT: &str = "\nWould you like to see individual raw data? Enter 'yes' or 'no'\n";
pub const NEXT_PROMPT: &str = "\nWould you like to see the next 5 rows?\n";

/// Browser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseState {
    AwaitFirstPrompt,
    AwaitContinuePrompt,
    Done,
}

/// A window of rows shown to the user, `[start, end)`.
pub type Window = (usize, usize);

/// Paginates a trip table on demand.
pub struct RawRowBrowser<'a> {
    table: &'a TripTable,
    cursor: usize,
    state: BrowseState,
    shown: Vec<Window>,
}

impl<'a> RawRowBrowser<'a> {
    pub fn new(table: &'a TripTable) -> Self {
        Self {
            table,
            cursor: 0,
            state: BrowseState::AwaitFirstPrompt,
            shown: Vec::new(),
        }
    }

    pub fn state(&self) -> BrowseState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Windows displayed so far, in order.
    pub fn shown(&self) -> &[Window] {
        &self.shown
    }

    /// Run the browser until the user stops or the data runs out.
    pub fn run<P: Prompt, W: Write>(&mut self, prompt: &mut P, out: &mut W) -> Result<()> {
        let start = Instant::now();

        while self.state != BrowseState::Done {
            let question = match self.state {
                BrowseState::AwaitFirstPrompt => RAW_PROMPT,
                BrowseState::AwaitContinuePrompt => NEXT_PROMPT,
                BrowseState::Done => break,
            };
            let answer = prompt.read_line(question)?;
            let previous = self.state;
            self.step(&answer, out)?;

            // Timing footer after each pass through the primary prompt
            if previous == BrowseState::AwaitContinuePrompt
                && self.state == BrowseState::AwaitFirstPrompt
            {
                writeln!(out, "\nThis took {} seconds.", start.elapsed().as_secs_f64())?;
                writeln!(out, "{SEPARATOR}")?;
            }
        }

        Ok(())
    }

    /// Apply one answer to the current state.
    pub fn step<W: Write>(&mut self, answer: &str, out: &mut W) -> Result<BrowseState> {
        self.state = match self.state {
            BrowseState::AwaitFirstPrompt => match normalize(answer).as_str() {
                "yes" | "y" => {
                    writeln!(out, "\nGetting raw data...\n")?;
                    self.show(self.cursor, self.cursor + PAGE_SIZE, out)?;
                    BrowseState::AwaitContinuePrompt
                }
                "no" | "n" => {
                    writeln!(out, "You have chosen not to see the individual data")?;
                    BrowseState::Done
                }
                _ => {
                    writeln!(out, "Invalid response. Please type in 'yes' or 'no'")?;
                    BrowseState::AwaitFirstPrompt
                }
            },
            BrowseState::AwaitContinuePrompt if is_yes(answer) => {
                self.cursor += PAGE_SIZE;
                let rows = self.table.num_rows();
                if self.cursor + PAGE_SIZE >= rows {
                    // The final page stops one short of the last row
                    self.show(self.cursor, rows.saturating_sub(1), out)?;
                    writeln!(out, "You've reached the end of the data")?;
                    BrowseState::Done
                } else {
                    self.show(self.cursor, self.cursor + PAGE_SIZE, out)?;
                    BrowseState::AwaitFirstPrompt
                }
            }
            BrowseState::AwaitContinuePrompt | BrowseState::Done => BrowseState::Done,
        };
        Ok(self.state)
    }

    fn show<W: Write>(&mut self, start: usize, end: usize, out: &mut W) -> Result<()> {
        let end = end.min(self.table.num_rows());
        let start = start.min(end);
        self.shown.push((start, end));
        write_rows(&self.table.slice(start, end - start), start, out)?;
        Ok(())
    }
}

/// Offer the raw rows of `table` page by page.
pub fn browse_raw<P: Prompt, W: Write>(table: &TripTable, prompt: &mut P, out: &mut W) -> Result<Vec<Window>> {
    let mut browser = RawRowBrowser::new(table);
    browser.run(prompt, out)?;
    Ok(browser.shown)
}
