//! Confirmation prompt

use std::io::{BufRead, Write};
use crate::error::RunError;

/// The user's answer to "run this entry?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Approve,
    Decline,
}

impl Answer {
    /// Classify a line with its terminator already removed.
    ///
    /// Only a lone `n` or `N` declines. Anything else, including the empty
    /// line, `no` and ` n`, approves.
    pub fn from_line(line: &str) -> Self {
        Self::from_bytes(line.as_bytes())
    }

    /// Classify raw input bytes. Invalid UTF-8 approves like any other line.
    pub fn from_bytes(line: &[u8]) -> Self {
        match line {
            b"n" | b"N" => Answer::Decline,
            _ => Answer::Approve,
        }
    }
}

/// Strip exactly one `\n` or `\r\n` terminator.
fn strip_terminator(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\n")
        .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
        .unwrap_or(line)
}

/// Writes questions to `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, assume_yes: false }
    }

    /// Answer every question with `y` instead of reading input
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Access the output sink for non-question lines
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask whether to run `name`.
    pub fn ask(&mut self, name: &str) -> Result<Answer, RunError> {
        writeln!(self.output, "Do you want to run {} ? (Y/n)", name)?;

        if self.assume_yes {
            writeln!(self.output, "y")?;
            self.output.flush()?;
            return Ok(Answer::Approve);
        }
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(RunError::input_closed());
        }
        Ok(Answer::from_bytes(strip_terminator(&line)))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
