//! Line-based prompt capability.
//!
//! The Input Collector, Raw Row Browser and restart question all read through
//! the [`Prompt`] trait so sessions can be driven by a terminal
//! ([`LinePrompt`]) or by canned answers in tests ([`ScriptedPrompt`]).

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{Error, Result};

/// Source of answers to interactive questions.
pub trait Prompt {
    /// Show `prompt` and block until a line is entered.
    ///
    /// Returns [`Error::InputClosed`] on end of input or interrupt.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        (**self).read_line(prompt)
    }
}

/// Terminal prompt using rustyline for line editing and history.
pub struct LinePrompt {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl LinePrompt {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;
        Ok(Self {
            editor,
            history_file: None,
        })
    }

    /// Set the history file path.
    pub fn with_history(mut self, path: &Path) -> Self {
        self.history_file = Some(path.to_path_buf());
        if let Err(e) = self.editor.load_history(path) {
            tracing::debug!("Could not load history: {}", e);
        }
        self
    }

    /// Save history to file.
    pub fn save_history(&mut self) {
        if let Some(ref path) = self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                tracing::debug!("Could not save history: {}", e);
            }
        }
    }
}

impl Prompt for LinePrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(line)
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Err(Error::InputClosed),
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for LinePrompt {
    fn drop(&mut self) {
        self.save_history();
    }
}

/// Prompt that replays a fixed list of answers.
///
/// Every question asked is recorded; once the answers run out the prompt
/// behaves like a closed terminal.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or(Error::InputClosed)
    }
}

/// Trim and lower-case an answer for comparison.
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Whether an answer means yes.
pub fn is_yes(answer: &str) -> bool {
    matches!(normalize(answer).as_str(), "yes" | "y")
}
