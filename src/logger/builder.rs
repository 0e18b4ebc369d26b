//! Stepwise construction. Outputs that touch the outside world (files, buffers with a
//! declared capacity) are only opened in [`LoggerBuilder::build`], so every configuration
//! error surfaces in one place.

use super::{Logger, Pipe};
use crate::fmt::{ConsoleFormatter, Formatter, Palette, PlainFormatter};
use crate::level::Level;
use crate::output::{BufferedOutput, ConsoleOutput, DebugOutput, FileOutput, Output, Stream};
use std::io;
use std::path::PathBuf;

enum Target {
    Console(Stream),
    File(PathBuf),
    Debug,
    Custom(Box<dyn Output>),
}

struct PipeSpec {
    formatter: Box<dyn Formatter>,
    target: Target,
    buffer: Option<usize>,
}

impl PipeSpec {
    fn open(self) -> Result<Pipe, crate::Error> {
        let output: Box<dyn Output> = match (self.target, self.buffer) {
            (Target::Console(_), Some(capacity)) => {
                Box::new(BufferedOutput::new(io::stdout(), capacity)?)
            }
            (Target::Console(stream), None) => Box::new(ConsoleOutput::new().stream(stream)),
            (Target::File(path), Some(capacity)) => {
                Box::new(FileOutput::open_buffered(path, capacity)?)
            }
            (Target::File(path), None) => Box::new(FileOutput::open(path)?),
            (Target::Debug, _) => Box::new(DebugOutput::stdout()),
            (Target::Custom(output), _) => output,
        };

        Ok(Pipe {
            formatter: self.formatter,
            output,
        })
    }
}

pub struct LoggerBuilder {
    min_level: Level,
    palette: Palette,
    pipes: Vec<PipeSpec>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Info is the default minimum level; Debug is opt-in.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Info,
            palette: Palette::standard().clone(),
            pipes: Vec::new(),
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Palette used both for runtime validation and for rendering.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn console(self) -> ConsoleBuilder {
        ConsoleBuilder {
            parent: self,
            formatter: ConsoleFormatter::new(),
            stream: Stream::default(),
            buffer: None,
        }
    }

    #[must_use]
    pub fn file(self, path: impl Into<PathBuf>) -> FileBuilder {
        FileBuilder {
            parent: self,
            formatter: PlainFormatter::new(),
            path: path.into(),
            buffer: None,
        }
    }

    /// Colored lines echoed with their control characters spelled out, on stdout.
    #[must_use]
    pub fn debug_output(mut self) -> Self {
        self.pipes.push(PipeSpec {
            formatter: Box::new(ConsoleFormatter::new()),
            target: Target::Debug,
            buffer: None,
        });
        self
    }

    /// Any formatter with any output, used as-is.
    #[must_use]
    pub fn pipe(
        mut self,
        formatter: impl Formatter + 'static,
        output: impl Output + 'static,
    ) -> Self {
        self.pipes.push(PipeSpec {
            formatter: Box::new(formatter),
            target: Target::Custom(Box::new(output)),
            buffer: None,
        });
        self
    }

    /// Opens every output in declaration order.
    ///
    /// # Errors
    /// A buffer capacity below the minimum, or a file that cannot be opened.
    pub fn build(self) -> Result<Logger, crate::Error> {
        let pipes = self
            .pipes
            .into_iter()
            .map(PipeSpec::open)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Logger {
            min_level: self.min_level,
            palette: self.palette,
            pipes,
        })
    }
}

pub struct ConsoleBuilder {
    parent: LoggerBuilder,
    formatter: ConsoleFormatter,
    stream: Stream,
    buffer: Option<usize>,
}

impl ConsoleBuilder {
    /// Piped output and color-incapable terminals break on escape codes.
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.formatter = self.formatter.colors(enabled);
        self
    }

    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.formatter = self.formatter.template(template);
        self
    }

    /// Ignored when buffered: a buffered console always flushes to stdout.
    #[must_use]
    pub const fn stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }

    /// Batch lines in a buffer of `capacity` bytes, flushed when full, on
    /// [`Logger::flush`] and when the logger is dropped.
    #[must_use]
    pub const fn buffered(mut self, capacity: usize) -> Self {
        self.buffer = Some(capacity);
        self
    }

    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.pipes.push(PipeSpec {
            formatter: Box::new(self.formatter),
            target: Target::Console(self.stream),
            buffer: self.buffer,
        });
        self.parent
    }
}

pub struct FileBuilder {
    parent: LoggerBuilder,
    formatter: PlainFormatter,
    path: PathBuf,
    buffer: Option<usize>,
}

impl FileBuilder {
    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.formatter = self.formatter.template(template);
        self
    }

    #[must_use]
    pub const fn buffered(mut self, capacity: usize) -> Self {
        self.buffer = Some(capacity);
        self
    }

    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.pipes.push(PipeSpec {
            formatter: Box::new(self.formatter),
            target: Target::File(self.path),
            buffer: self.buffer,
        });
        self.parent
    }
}
