//! Unbuffered terminal output: one `writeln!` per line.

use super::Output;
use crate::level::Level;
use std::io::{self, Write};

/// Which standard stream receives console lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    Stdout,
    Stderr,
    /// Warn and Error go to stderr, the rest to stdout.
    #[default]
    Split,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput {
    stream: Stream,
}

impl ConsoleOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }
}

impl Output for ConsoleOutput {
    fn write(&mut self, level: Level, line: &str) -> Result<(), crate::Error> {
        let to_stderr = match self.stream {
            Stream::Stdout => false,
            Stream::Stderr => true,
            Stream::Split => level >= Level::Warn,
        };

        if to_stderr {
            writeln!(io::stderr(), "{line}")?;
        } else {
            writeln!(io::stdout(), "{line}")?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
