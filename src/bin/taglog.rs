//! `taglog` binary: log, check and preview color-tagged messages from the shell.
//!
//! Usage:
//!   taglog log <level> <message..>          Log through the configured outputs
//!   taglog check [--strict] <message>       Validate markup
//!   taglog render [--plain] <message>       Print rendered markup
//!   taglog colors                           List palette colors

use clap::Parser;
use std::process::ExitCode;
use taglog::cli::{Cli, run};
use taglog::internal;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    run(&cli.command, &config, cli.app.as_deref())
}
