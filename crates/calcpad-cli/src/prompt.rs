//! Line input for the menu loop.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    /// Ctrl-C at the prompt.
    #[error("interrupted")]
    Interrupted,

    /// Ctrl-D, or the input stream ran out.
    #[error("end of input")]
    Eof,

    #[error("terminal error: {0}")]
    Terminal(#[source] ReadlineError),

    #[error("input error: {0}")]
    Io(#[from] io::Error),
}

impl From<ReadlineError> for PromptError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Interrupted => Self::Interrupted,
            ReadlineError::Eof => Self::Eof,
            other => Self::Terminal(other),
        }
    }
}

/// Source of user input lines.
pub trait Prompter {
    /// Shows `prompt` and reads one line without its trailing newline.
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError>;
}

/// Reads from the terminal with line editing.
pub struct RustylinePrompter {
    editor: DefaultEditor,
}

impl RustylinePrompter {
    pub fn new() -> Result<Self, PromptError> {
        Ok(Self { editor: DefaultEditor::new()? })
    }
}

impl Prompter for RustylinePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        Ok(self.editor.readline(prompt)?)
    }
}

/// Reads plain lines, echoing each prompt to `out` first.
///
/// Used when stdin is not a terminal: rustyline reads piped input without
/// writing the prompt anywhere.
pub struct LinePrompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.out.write_all(prompt.as_bytes())?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(line)
    }
}

#[derive(Debug)]
enum Scripted {
    Line(String),
    Interrupt,
}

/// Replays a fixed transcript, then reports end of input.
///
/// Every prompt shown is recorded so callers can check what was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: VecDeque<Scripted>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: lines.into_iter().map(|line| Scripted::Line(line.into())).collect(),
            prompts: Vec::new(),
        }
    }

    /// Appends a Ctrl-C after the scripted lines.
    #[must_use]
    pub fn then_interrupt(mut self) -> Self {
        self.script.push_back(Scripted::Interrupt);
        self
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.prompts.push(prompt.to_string());
        match self.script.pop_front() {
            Some(Scripted::Line(line)) => Ok(line),
            Some(Scripted::Interrupt) => Err(PromptError::Interrupted),
            None => Err(PromptError::Eof),
        }
    }
}
