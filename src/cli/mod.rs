//! Command-line interface, built with Clap.

pub mod commands;

use crate::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// taglog - Log and preview messages with inline color tags.
#[derive(Debug, Parser)]
#[command(name = "taglog", version, about = "Log and preview messages with inline color tags")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Apply the [apps.<NAME>] overrides from the config
    #[arg(long, global = true, value_name = "NAME")]
    pub app: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log a message through the configured outputs.
    Log {
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// Log message, words are joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
        /// Source file reported in the line
        #[arg(long, default_value = "taglog")]
        file: String,
        /// Source line reported in the line
        #[arg(long, default_value_t = 0)]
        line: u32,
    },
    /// Check the markup of a message. Exits with failure when it is invalid.
    Check {
        /// Accept any lowercase tag letter instead of only palette colors
        #[arg(long)]
        strict: bool,
        /// Message to check
        message: String,
    },
    /// Print a message with its markup rendered as colors.
    Render {
        /// Strip the markup instead of coloring it
        #[arg(long)]
        plain: bool,
        /// Output limit in bytes, terminator included
        #[arg(long, default_value_t = crate::MESSAGE_SIZE)]
        max_len: usize,
        /// Message to render
        message: String,
    },
    /// List the palette colors.
    Colors,
}

impl Cli {
    /// The `--config` file when given, the default location otherwise.
    ///
    /// # Errors
    /// See [`Config::load`] and [`Config::load_from`].
    pub fn load_config(&self) -> Result<Config, crate::Error> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}

/// Dispatches a parsed command.
#[must_use]
pub fn run(command: &Command, config: &Config, app: Option<&str>) -> ExitCode {
    match command {
        Command::Log {
            level,
            message,
            file,
            line,
        } => commands::cmd_log(config, app, (*level).into(), &message.join(" "), file, *line),
        Command::Check { strict, message } => commands::cmd_check(config, message, *strict),
        Command::Render {
            plain,
            max_len,
            message,
        } => commands::cmd_render(config, message, *plain, *max_len),
        Command::Colors => commands::cmd_colors(config),
    }
}
