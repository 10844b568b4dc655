//! Raw ANSI control sequences written to the terminal.

use crate::core::data::colour::Colour;

pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
pub const CURSOR_HOME: &str = "\x1b[H";
pub const ERASE_BELOW: &str = "\x1b[J";
pub const RESET: &str = "\x1b[0m";

/// Raw mode disables output post-processing, so lines need an explicit carriage return.
pub const LINE_BREAK: &str = "\r\n";

#[must_use]
pub fn fg(colour: Colour) -> String {
    format!("\x1b[38;2;{};{};{}m", colour.r, colour.g, colour.b)
}

#[must_use]
pub fn bg(colour: Colour) -> String {
    format!("\x1b[48;2;{};{};{}m", colour.r, colour.g, colour.b)
}
