//! Fans each record out to an ordered list of formatter/output pairs, after level filtering
//! and the markup validation gate.

mod builder;
mod from_config;
pub mod global;

pub use builder::{ConsoleBuilder, FileBuilder, LoggerBuilder};
pub use global::FlushGuard;

use crate::MESSAGE_SIZE;
use crate::fmt::{Formatter, Palette, markup, truncate};
use crate::internal;
use crate::level::Level;
use crate::output::{LogRecord, Output};
use std::fmt;
use std::panic::Location;

/// Replaces a message whose markup does not validate against the logger's palette.
pub const INVALID_MARKUP_NOTICE: &str = "Invalid color tags";

/// A formatter and the output its lines go to.
pub(crate) struct Pipe {
    pub(crate) formatter: Box<dyn Formatter>,
    pub(crate) output: Box<dyn Output>,
}

/// Owns its outputs; methods take `&mut self`. Share one across threads through
/// [`global`] or your own mutex.
pub struct Logger {
    min_level: Level,
    palette: Palette,
    pipes: Vec<Pipe>,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            min_level: Level::Info,
            palette: Palette::standard().clone(),
            pipes: Vec::new(),
        }
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Logs `msg` attributed to the caller's file and line.
    #[track_caller]
    pub fn log(&mut self, level: Level, msg: &str) {
        let location = Location::caller();
        self.log_at(level, location.file(), location.line(), msg);
    }

    /// Core dispatch: filter by level, cap the message at `MESSAGE_SIZE - 1` bytes, validate
    /// its markup, then hand the record to every pipe. A message with broken markup is
    /// replaced by an `Error`-level [`INVALID_MARKUP_NOTICE`].
    pub fn log_at(&mut self, level: Level, file: &str, line: u32, msg: &str) {
        if level < self.min_level {
            return;
        }

        let mut message = msg.to_string();
        truncate(&mut message, MESSAGE_SIZE - 1);

        let record = if markup::validate(&message, &self.palette) {
            LogRecord::new(level, file, line, message)
        } else {
            LogRecord::new(Level::Error, file, line, INVALID_MARKUP_NOTICE)
        };

        self.dispatch(&record);
    }

    /// `format_args!` entry point used by the logging macros. Formatting is skipped entirely
    /// for filtered levels.
    pub fn log_args(&mut self, level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
        if level < self.min_level {
            return;
        }

        match args.as_str() {
            Some(literal) => self.log_at(level, file, line, literal),
            None => self.log_at(level, file, line, &args.to_string()),
        }
    }

    fn dispatch(&mut self, record: &LogRecord) {
        for pipe in &mut self.pipes {
            let line = pipe.formatter.format(record, &self.palette);
            if let Err(e) = pipe.output.write(record.level, &line) {
                internal::warn(&format!("Output write failed: {e}"));
            }
        }
    }

    #[track_caller]
    pub fn debug(&mut self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    #[track_caller]
    pub fn info(&mut self, msg: &str) {
        self.log(Level::Info, msg);
    }

    #[track_caller]
    pub fn warn(&mut self, msg: &str) {
        self.log(Level::Warn, msg);
    }

    #[track_caller]
    pub fn error(&mut self, msg: &str) {
        self.log(Level::Error, msg);
    }

    /// Flushes every output, even after one of them fails.
    ///
    /// # Errors
    /// The first error encountered.
    pub fn flush(&mut self) -> Result<(), crate::Error> {
        let mut first_error = None;
        for pipe in &mut self.pipes {
            if let Err(e) = pipe.output.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    pub const fn set_level(&mut self, level: Level) {
        self.min_level = level;
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.pipes.len()
    }
}
