//! Process-wide logger behind the `log_*!` macros.
//!
//! The logger lives in a `OnceLock<Mutex<_>>`; the mutex is what serializes concurrent call
//! sites around the buffered outputs. Statics are never dropped, so buffered lines would be
//! lost at exit without help: [`init`] returns a [`FlushGuard`] that flushes the global logger
//! when it goes out of scope, on every exit path of `main` including unwinding. A logger
//! created lazily by a macro call has no guard owner, so it is built unbuffered.

use super::Logger;
use crate::config::Config;
use crate::internal;
use crate::level::Level;
use std::fmt;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static GLOBAL: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Flushes the global logger on drop. Keep it alive for the whole of `main`.
#[must_use = "dropping the guard immediately flushes and loses the exit-time flush"]
#[derive(Debug)]
pub struct FlushGuard {
    _private: (),
}

impl Drop for FlushGuard {
    fn drop(&mut self) {
        if let Err(e) = flush() {
            internal::warn(&format!("Final flush failed: {e}"));
        }
    }
}

/// Installs `logger` as the global logger.
///
/// # Errors
/// Hands `logger` back when a global logger already exists (installed earlier, or created
/// lazily by a macro call).
pub fn init(mut logger: Logger) -> Result<FlushGuard, Logger> {
    if GLOBAL.get().is_some() {
        return Err(logger);
    }
    announce(&mut logger);

    GLOBAL
        .set(Mutex::new(logger))
        .map_err(|rejected| rejected.into_inner().unwrap_or_else(PoisonError::into_inner))?;
    Ok(FlushGuard { _private: () })
}

/// A flush-on-drop guard for whatever global logger exists when it drops. Buffered output
/// needs [`init`]; a lazily created logger writes every line straight through.
pub const fn guard() -> FlushGuard {
    FlushGuard { _private: () }
}

/// The global logger, built from the default config file on first use when [`init`] was
/// never called. Buffering is turned off for it, since nothing would flush it at exit.
pub fn logger() -> &'static Mutex<Logger> {
    GLOBAL.get_or_init(|| {
        let mut config = Config::load().unwrap_or_default();
        internal::init_with_config(&config);
        unbuffer(&mut config);

        let mut logger = Logger::from_config_with(&config, None).unwrap_or_else(|e| {
            internal::error(&format!("Logger from config failed, using console: {e}"));
            Logger::builder().console().done().build().unwrap_or_default()
        });
        announce(&mut logger);
        Mutex::new(logger)
    })
}

fn unbuffer(config: &mut Config) {
    let buffered = (config.console.enabled && config.console.buffer_size > 0)
        || (config.file.enabled && config.file.buffer_size > 0);
    if buffered {
        internal::warn(
            "Global logger created without init(), buffer_size ignored so no line is lost at exit",
        );
    }
    config.console.buffer_size = 0;
    config.file.buffer_size = 0;
}

fn lock() -> MutexGuard<'static, Logger> {
    logger().lock().unwrap_or_else(PoisonError::into_inner)
}

fn announce(logger: &mut Logger) {
    let outputs = logger.output_count();
    logger.debug(&format!(
        "Logger initialized with {outputs} output destinations, markup check g|enabled|"
    ));
}

/// Target of the logging macros.
pub fn log(level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
    lock().log_args(level, file, line, args);
}

/// # Errors
/// The first output error, see [`Logger::flush`].
pub fn flush() -> Result<(), crate::Error> {
    lock().flush()
}

pub fn set_level(level: Level) {
    lock().set_level(level);
}
