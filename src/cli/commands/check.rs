use crate::config::Config;
use crate::fmt::{validate, validate_strict};
use std::process::ExitCode;

/// Strict mode accepts any `a`-`z` tag letter, the way the logging macros check literals.
/// Otherwise every tag letter must be in the configured palette.
#[must_use]
pub fn check(config: &Config, message: &str, strict: bool) -> bool {
    if strict {
        validate_strict(message)
    } else {
        validate(message, &config.palette())
    }
}

#[must_use]
pub fn cmd_check(config: &Config, message: &str, strict: bool) -> ExitCode {
    if check(config, message, strict) {
        println!("valid");
        ExitCode::SUCCESS
    } else {
        println!("invalid");
        ExitCode::FAILURE
    }
}
