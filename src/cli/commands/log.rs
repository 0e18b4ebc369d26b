//! One log line from a shell script, through the same outputs a library user would get.

use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use std::process::ExitCode;

#[must_use]
pub fn cmd_log(
    config: &Config,
    app: Option<&str>,
    level: Level,
    message: &str,
    file: &str,
    line: u32,
) -> ExitCode {
    let mut logger = match Logger::from_config_with(config, app) {
        Ok(logger) => logger,
        Err(e) => {
            internal::error(&format!("Cannot build logger: {e}"));
            return ExitCode::FAILURE;
        }
    };

    logger.log_at(level, file, line, message);

    if let Err(e) = logger.flush() {
        internal::error(&format!("Flush failed: {e}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
