pub mod cli;
pub mod colors;
pub mod commands;

pub use cli::{Cli, Commands, GenerateCommand, ListCommands};
pub use colors::Colors;

const FALLBACK_TERM_WIDTH: u16 = 80;

fn term_width() -> u16 {
  crossterm::terminal::size().map_or(FALLBACK_TERM_WIDTH, |(width, _)| width)
}
