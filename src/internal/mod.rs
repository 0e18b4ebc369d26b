//! Taglog's own diagnostic logger, bootstrapped early so config problems and output failures
//! can be reported through the same formatting pipeline, on stderr.
//!
//! Calls made before [`init`] are dropped, as are calls made while the internal logger is
//! already busy on the same or another thread.

use crate::config::Config;
use crate::fmt::{ConsoleFormatter, DELIMITER};
use crate::level::Level;
use crate::logger::Logger;
use crate::output::{ConsoleOutput, Stream};
use std::panic::Location;
use std::sync::{Mutex, OnceLock, TryLockError};

static INTERNAL_LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Loads the default config itself. Only the first `init*` call takes effect.
pub fn init() {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        let config = Config::load().unwrap_or_default();
        Mutex::new(build_internal_logger(&config))
    });
    if !was_init {
        debug("Internal logger ready");
    }
}

/// Reuses an already loaded config.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| Mutex::new(build_internal_logger(config)));
    if !was_init {
        debug(&format!("Internal logger ready, level {}", config.general.level));
    }
}

fn build_internal_logger(config: &Config) -> Logger {
    let formatter = ConsoleFormatter::new().colors(config.console.colors);
    Logger::builder()
        .level(config.parse_level())
        .pipe(formatter, ConsoleOutput::new().stream(Stream::Stderr))
        .build()
        .unwrap_or_default()
}

#[track_caller]
fn log(level: Level, msg: &str) {
    let Some(lock) = INTERNAL_LOGGER.get() else {
        return;
    };
    let location = Location::caller();

    let mut logger = match lock.try_lock() {
        Ok(logger) => logger,
        Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        Err(TryLockError::WouldBlock) => return,
    };

    // Paths and values quoted in diagnostics are not markup.
    let escaped = msg.replace(DELIMITER, "||");
    logger.log_at(level, location.file(), location.line(), &escaped);
}

#[track_caller]
pub fn debug(msg: &str) {
    log(Level::Debug, msg);
}

#[track_caller]
pub fn info(msg: &str) {
    log(Level::Info, msg);
}

#[track_caller]
pub fn warn(msg: &str) {
    log(Level::Warn, msg);
}

#[track_caller]
pub fn error(msg: &str) {
    log(Level::Error, msg);
}
