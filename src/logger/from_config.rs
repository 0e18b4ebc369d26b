//! Logger construction from taglog config files.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;
use crate::output::Stream;

impl Logger {
    /// Loads the default config file and builds a logger from it. A config that fails to load
    /// is reported through the internal logger and replaced by defaults.
    ///
    /// # Errors
    /// See [`Logger::from_config_with`].
    pub fn from_config(app_name: Option<&str>) -> Result<Self, crate::Error> {
        internal::debug("Building logger from config");
        let config = Config::load().unwrap_or_else(|e| {
            internal::warn(&format!("Config unusable, falling back to defaults: {e}"));
            Config::default()
        });
        Self::from_config_with(&config, app_name)
    }

    /// Builds a logger from `config`, applying `[apps.<app_name>]` overrides when given.
    ///
    /// # Errors
    /// A configured buffer size of 1 or 2, or a log file that cannot be opened.
    pub fn from_config_with(config: &Config, app_name: Option<&str>) -> Result<Self, crate::Error> {
        let config = app_name.map_or_else(|| config.clone(), |app| config.for_app(app));
        internal::debug(&format!("Log level: {}", config.general.level));

        let mut builder = LoggerBuilder::new()
            .level(config.parse_level())
            .palette(config.palette());
        let mut outputs: Vec<&str> = Vec::new();

        if config.console.enabled {
            builder = Self::configure_console(builder, &config);
            outputs.push("console");
        }

        if config.file.enabled {
            builder = Self::configure_file(builder, &config);
            outputs.push("file");
        }

        if config.debug.enabled {
            builder = builder.debug_output();
            outputs.push("debug");
        }

        if outputs.is_empty() {
            internal::warn("No outputs enabled");
        } else {
            internal::debug(&format!("Outputs enabled: [{}]", outputs.join(", ")));
        }

        builder.build()
    }

    fn configure_console(builder: LoggerBuilder, config: &Config) -> LoggerBuilder {
        let console = &config.console;
        internal::debug(&format!(
            "Console: colors={}, buffer_size={}",
            console.colors, console.buffer_size
        ));

        let stream = if console.stderr {
            Stream::Split
        } else {
            Stream::Stdout
        };

        let mut console_builder = builder
            .console()
            .colors(console.colors)
            .template(&console.structure)
            .stream(stream);
        if console.buffer_size > 0 {
            console_builder = console_builder.buffered(console.buffer_size);
        }
        console_builder.done()
    }

    fn configure_file(builder: LoggerBuilder, config: &Config) -> LoggerBuilder {
        let file = &config.file;
        internal::debug(&format!(
            "File: path={}, buffer_size={}",
            file.path, file.buffer_size
        ));

        let mut file_builder = builder.file(&file.path).template(&file.structure);
        if file.buffer_size > 0 {
            file_builder = file_builder.buffered(file.buffer_size);
        }
        file_builder.done()
    }
}
