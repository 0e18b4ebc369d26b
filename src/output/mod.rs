//! Where finished lines go. The built-in backends (console, file, debug echo, buffered) can't
//! cover every target, so anything implementing [`Output`] can be plugged into a logger.

mod buffered;
mod console;
mod debug;
mod file;

pub use buffered::{BufferedOutput, LINE_END, MIN_CAPACITY};
pub use console::{ConsoleOutput, Stream};
pub use debug::{DebugOutput, escape_control};
pub use file::FileOutput;

use crate::level::Level;

/// One log call, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    /// Source path as reported by `file!()` or `Location::file()`.
    pub file: String,
    pub line: u32,
    pub message: String,
}

impl LogRecord {
    #[must_use]
    pub fn new(level: Level, file: impl Into<String>, line: u32, message: impl Into<String>) -> Self {
        Self {
            level,
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Last path component, split on both `/` and `\` so Windows paths shorten too.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(&self.file)
    }
}

/// `Send` so a logger can sit behind the process-wide mutex. Methods take `&mut self`:
/// outputs own mutable state (buffers, file handles) and the logger serializes access.
pub trait Output: Send {
    /// Delivers one formatted line (no trailing newline). `level` lets backends route by
    /// severity; most ignore it.
    ///
    /// # Errors
    /// I/O errors from the underlying target.
    fn write(&mut self, level: Level, line: &str) -> Result<(), crate::Error>;

    /// Pushes anything held back to the target.
    ///
    /// # Errors
    /// I/O errors from the underlying target.
    fn flush(&mut self) -> Result<(), crate::Error>;
}
