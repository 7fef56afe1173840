//! Error types for bikeshare.

use thiserror::Error;

/// Main error type for bikeshare operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A prompt answer outside the accepted set. Always recovered by re-prompting.
    #[error("Invalid {field}: '{value}'")]
    InvalidInput { field: &'static str, value: String },

    /// The city's trip file is missing, unreadable or corrupt
    #[error("Dataset unavailable: {path}: {reason}")]
    DatasetUnavailable { path: String, reason: String },

    /// A report was asked to summarize zero rows
    #[error("{report}: no trips match the selected filters")]
    EmptyResultSet { report: &'static str },

    /// A required column is missing or has an unexpected type
    #[error("Column '{column}': {reason}")]
    Schema { column: String, reason: String },

    /// End of input (Ctrl-D) or interrupt (Ctrl-C) at a prompt
    #[error("Input closed")]
    InputClosed,

    /// Line editor failure
    #[error("Prompt error: {0}")]
    Prompt(#[from] rustyline::error::ReadlineError),

    /// Arrow error while building or slicing the trip table
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Errors that abort the current session pass but leave the restart prompt available.
    pub fn is_pass_level(&self) -> bool {
        matches!(
            self,
            Error::DatasetUnavailable { .. } | Error::Schema { .. } | Error::Arrow(_)
        )
    }

    pub(crate) fn dataset(path: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        Error::DatasetUnavailable {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
