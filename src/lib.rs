//! `taglog` - Logging with inline color tags.
//!
//! Messages carry their own coloring: `r|failed|` renders `failed` in the palette's `r`
//! color and `||` is a literal pipe. Markup is checked before anything is written, at
//! compile time for the logging macros and at runtime for everything else.
//!
//! - Palette of single-letter colors, extendable from config
//! - Console, file and debug-echo outputs, each optionally buffered
//! - Line templates with `{tag}`, `{location}`, `{msg}` and friends
//! - TOML configuration with includes and per-app overrides
//!
//! # Example
//!
//! ```
//! use taglog::{Level, Logger};
//!
//! let mut logger = Logger::builder()
//!     .level(Level::Debug)
//!     .console()
//!         .colors(true)
//!         .done()
//!     .build()
//!     .expect("console outputs always open");
//!
//! logger.info("Application started");
//! logger.warn("Connection y|slow|, retrying");
//! logger.error("Connection r|failed|");
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `taglog` command-line tool

pub mod config;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

mod error;
mod macros;

#[cfg(feature = "cli")]
pub mod cli;

/// Messages are capped at this size, terminator included, before markup processing.
pub const MESSAGE_SIZE: usize = 256;
/// Finished lines are capped at this size, terminator included.
pub const LINE_SIZE: usize = 512;
/// Default capacity of buffered outputs.
pub const BUFFER_SIZE: usize = 1024;

pub use config::Config;
pub use error::Error;
pub use fmt::{Color, ConsoleFormatter, Formatter, Palette, PlainFormatter};
pub use level::Level;
pub use logger::{FlushGuard, Logger, LoggerBuilder};
pub use output::{BufferedOutput, ConsoleOutput, DebugOutput, FileOutput, LogRecord, Output};
