//! Command-line interface module.
//!
//! This module handles:
//! - Argument parsing via clap
//! - Interactive prompts via rustyline (or scripted answers in tests)
//! - Filter collection, raw row paging and the restart loop
//! - Table output for raw rows

mod args;
mod browser;
mod input;
mod output;
mod prompt;
mod session;

pub use args::Args;
pub use browser::{browse_raw, BrowseState, RawRowBrowser, Window, NEXT_PROMPT, PAGE_SIZE, RAW_PROMPT};
pub use input::{collect_filters, CITY_PROMPT, DAY_PROMPT, MONTH_PROMPT};
pub use output::write_rows;
pub use prompt::{is_yes, normalize, LinePrompt, Prompt, ScriptedPrompt};
pub use session::{PassOutcome, Session, SessionEnd, GREETING, RESTART_PROMPT};
