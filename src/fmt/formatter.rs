//! Formatters turn a record into the final line. Which one a pipe uses decides whether the
//! message markup is rendered into colors or stripped.

use super::format::{FormatTemplate, FormatValues, truncate};
use super::markup;
use super::palette::{Palette, RESET};
use crate::output::LogRecord;
use crate::{LINE_SIZE, MESSAGE_SIZE};

/// `Send` so a logger holding boxed formatters can live behind the global mutex.
pub trait Formatter: Send {
    /// Produces one line, at most `LINE_SIZE - 1` bytes, without a trailing newline.
    fn format(&self, record: &LogRecord, palette: &Palette) -> String;
}

/// Colored layout for terminals: `[INFO]   main.rs:12      : message`.
#[derive(Debug, Clone)]
pub struct ConsoleFormatter {
    colors: bool,
    template: FormatTemplate,
    tag_width: usize,
    location_width: usize,
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors: true,
            template: FormatTemplate::default(),
            tag_width: 8,
            location_width: 13,
        }
    }

    /// With colors off the layout stays the same but markup is stripped.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.template = FormatTemplate::parse(template);
        self
    }

    #[must_use]
    pub const fn tag_width(mut self, width: usize) -> Self {
        self.tag_width = width;
        self
    }

    #[must_use]
    pub const fn location_width(mut self, width: usize) -> Self {
        self.location_width = width;
        self
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors
    }
}

impl Formatter for ConsoleFormatter {
    fn format(&self, record: &LogRecord, palette: &Palette) -> String {
        let tag = format!("[{}]", record.level.label());
        let tag = format!("{tag:<width$}", width = self.tag_width);

        let (tag, msg) = if self.colors {
            let tag = palette
                .get(record.level.color_letter())
                .map_or(tag.clone(), |code| format!("{code}{tag}{RESET}"));
            (tag, markup::render(&record.message, MESSAGE_SIZE, palette))
        } else {
            (tag, markup::strip(&record.message, MESSAGE_SIZE))
        };

        let values = FormatValues::new()
            .tag(tag)
            .level(record.level.as_str())
            .location(record.file_name(), record.line, self.location_width)
            .msg(msg);

        let mut line = self.template.render(&values);
        truncate(&mut line, LINE_SIZE - 1);
        line
    }
}

/// Uncolored, unpadded layout for files and pipes: `[INFO] main.rs:12 : message`.
#[derive(Debug, Clone, Default)]
pub struct PlainFormatter {
    template: FormatTemplate,
}

impl PlainFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.template = FormatTemplate::parse(template);
        self
    }
}

impl Formatter for PlainFormatter {
    fn format(&self, record: &LogRecord, _palette: &Palette) -> String {
        let values = FormatValues::new()
            .tag(format!("[{}]", record.level.label()))
            .level(record.level.as_str())
            .location(record.file_name(), record.line, 0)
            .msg(markup::strip(&record.message, MESSAGE_SIZE));

        let mut line = self.template.render(&values);
        truncate(&mut line, LINE_SIZE - 1);
        line
    }
}
