//! Line-oriented console used by the interactive shells
//!
//! Generic over the input and output streams so the shells can be driven by
//! scripted input in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::KeeperResult;

/// A prompt/response console over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of text
    pub fn say(&mut self, text: impl Display) -> KeeperResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print text exactly as given
    pub fn print(&mut self, text: &str) -> KeeperResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Show a prompt and read one line, without the trailing newline
    ///
    /// Returns `None` once the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> KeeperResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript tidy when input ends mid-prompt
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
