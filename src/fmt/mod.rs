//! Everything between a raw message and a finished line: the markup engine and its palette,
//! line templates, and the formatters that combine them.

mod color;
mod format;
mod formatter;
pub mod markup;
mod palette;

pub use color::Color;
pub use format::{
    Alignment, FormatSegment, FormatTemplate, FormatValues, Placeholder, pad, truncate,
};
pub use formatter::{ConsoleFormatter, Formatter, PlainFormatter};
pub use markup::{
    DELIMITER, SpanState, render, strip, validate, validate_format_literal, validate_strict,
};
pub use palette::{Palette, RESET, STANDARD_COLORS};
