//! One file per subcommand; each handler owns its error reporting.

mod check;
mod colors;
mod log;
mod render;

pub use check::{check, cmd_check};
pub use colors::{cmd_colors, color_table};
pub use log::cmd_log;
pub use render::{cmd_render, render_message};
