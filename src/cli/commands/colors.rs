use crate::config::Config;
use crate::fmt::{Palette, RESET};
use std::process::ExitCode;

/// One line per palette letter, in letter order: the letter, a colored sample and the
/// markup that produces it.
#[must_use]
pub fn color_table(palette: &Palette) -> Vec<String> {
    palette
        .letters()
        .into_iter()
        .map(|letter| {
            let code = palette.get(letter).unwrap_or_default();
            format!("  {letter}  {code}sample{RESET}  {letter}|sample|")
        })
        .collect()
}

#[must_use]
pub fn cmd_colors(config: &Config) -> ExitCode {
    let palette = config.palette();
    println!("Palette colors ({}):", palette.len());
    for line in color_table(&palette) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
