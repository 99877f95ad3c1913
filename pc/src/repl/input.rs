//! Console line input

use std::io::{self, IsTerminal, Write};

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;
use tracing::debug;

/// Failure reading a console line
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input interrupted")]
    Interrupted,

    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),
}

/// Source of user input lines
pub trait LineReader {
    /// Prompt for and read one line, trimmed of surrounding whitespace
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError>;

    /// Record a submitted query for line-editing recall
    fn remember(&mut self, _line: &str) {}
}

/// rustyline-backed terminal reader
pub struct ConsoleReader {
    editor: DefaultEditor,
    interactive: bool,
}

impl ConsoleReader {
    pub fn new() -> Result<Self, InputError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            interactive: io::stdin().is_terminal(),
        })
    }
}

impl LineReader for ConsoleReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        // rustyline skips the prompt when stdin is piped
        let prompt = if self.interactive {
            prompt
        } else {
            let mut stdout = io::stdout();
            write!(stdout, "{}", prompt).and_then(|_| stdout.flush()).map_err(ReadlineError::Io)?;
            ""
        };

        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(ReadlineError::Eof) => {
                debug!("read_line: end of input");
                Ok(None)
            }
            Err(ReadlineError::Interrupted) => Err(InputError::Interrupted),
            Err(err) => Err(err.into()),
        }
    }

    fn remember(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
