use crate::config::Config;
use crate::fmt::{render, strip, validate};
use crate::internal;
use std::process::ExitCode;

/// `None` when the markup does not validate against the configured palette.
#[must_use]
pub fn render_message(config: &Config, message: &str, plain: bool, max_len: usize) -> Option<String> {
    let palette = config.palette();
    if !validate(message, &palette) {
        return None;
    }

    Some(if plain {
        strip(message, max_len)
    } else {
        render(message, max_len, &palette)
    })
}

#[must_use]
pub fn cmd_render(config: &Config, message: &str, plain: bool, max_len: usize) -> ExitCode {
    match render_message(config, message, plain, max_len) {
        Some(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        None => {
            internal::error("Invalid color tags");
            ExitCode::FAILURE
        }
    }
}
