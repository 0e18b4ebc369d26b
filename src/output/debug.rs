//! Echoes every line twice: as the terminal shows it, then with control characters spelled
//! out, which makes broken or misplaced escape sequences visible.

use super::Output;
use crate::level::Level;
use std::io::{self, Write};

pub struct DebugOutput<W: Write + Send> {
    writer: W,
}

impl DebugOutput<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> DebugOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Spells out ESC as `\033` and newline, tab and carriage return as `\n`, `\t`, `\r`.
#[must_use]
pub fn escape_control(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\x1b' => out.push_str("\\033"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

impl<W: Write + Send> Output for DebugOutput<W> {
    fn write(&mut self, _level: Level, line: &str) -> Result<(), crate::Error> {
        writeln!(self.writer, "{line}")?;
        writeln!(self.writer, "{}", escape_control(line))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        self.writer.flush()?;
        Ok(())
    }
}
