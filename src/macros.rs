//! Logging macros for the global logger.
//!
//! The format string must be a literal. Its markup is checked with
//! [`validate_format_literal`](crate::fmt::validate_format_literal) in a `const` item, so a
//! message like `"r|unterminated"` fails to compile instead of failing at runtime. A
//! placeholder may pick the tag letter: `log_info!("value: {}|{}|", letter, v)`.

/// Logs through the global logger at the given level.
///
/// ```
/// taglog::log_at_level!(taglog::Level::Info, "loaded {} g|plugins|", 3);
/// ```
#[macro_export]
macro_rules! log_at_level {
    ($level:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        const _: () = ::core::assert!(
            $crate::fmt::validate_format_literal($fmt),
            "Invalid color tags"
        );
        $crate::logger::global::log(
            $level,
            ::core::file!(),
            ::core::line!(),
            ::core::format_args!($fmt $(, $arg)*),
        );
    }};
}

/// ```
/// taglog::log_debug!("cache b|warm|, {} entries", 12);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($($t:tt)*) => {
        $crate::log_at_level!($crate::Level::Debug, $($t)*)
    };
}

/// ```
/// taglog::log_info!("listening on port {}", 8080);
/// taglog::log_info!("sensor value: {}|{:.2}|", 'y', 12.5);
/// ```
#[macro_export]
macro_rules! log_info {
    ($($t:tt)*) => {
        $crate::log_at_level!($crate::Level::Info, $($t)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($t:tt)*) => {
        $crate::log_at_level!($crate::Level::Warn, $($t)*)
    };
}

/// ```compile_fail
/// taglog::log_error!("r|unterminated");
/// ```
#[macro_export]
macro_rules! log_error {
    ($($t:tt)*) => {
        $crate::log_at_level!($crate::Level::Error, $($t)*)
    };
}

/// Flushes every buffered output of the global logger. Errors are reported through the
/// internal logger.
#[macro_export]
macro_rules! flush_logs {
    () => {
        if let ::core::result::Result::Err(e) = $crate::logger::global::flush() {
            $crate::internal::warn(&::std::format!("Flush failed: {e}"));
        }
    };
}
