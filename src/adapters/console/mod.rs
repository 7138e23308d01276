//! Console adapter - `Prompt` over any buffered reader and writer.
//!
//! `ConsolePrompt::stdio()` is what the binary uses. Tests build one over
//! an in-memory `Cursor` and `Vec<u8>`.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::domain::foundation::DomainError;
use crate::ports::Prompt;

/// Line-oriented prompt over a reader/writer pair.
#[derive(Debug)]
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
}

impl ConsolePrompt<StdinLock<'static>, Stdout> {
    /// Creates a prompt bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the prompt and returns the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn say(&mut self, line: &str) -> Result<(), DomainError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>, DomainError> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
