//! # ANSI/VT100 escape sequences
//!
//! Named constants for every control sequence the composer and terminal
//! driver emit, plus the SGR color codes the highlighter maps its tags onto.

pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
pub const CLEAR_LINE: &[u8] = b"\x1b[K";
pub const REVERSE_VIDEO: &[u8] = b"\x1b[7m";
pub const RESET_FMT: &[u8] = b"\x1b[m";
pub const DEFAULT_FG: &[u8] = b"\x1b[39m";
pub const CURSOR_FORWARD_999: &[u8] = b"\x1b[999C";
pub const CURSOR_DOWN_999: &[u8] = b"\x1b[999B";
pub const DEVICE_STATUS_REPORT: &[u8] = b"\x1b[6n";

/// Build the `ESC [ row ; col H` cursor-positioning sequence (1-indexed).
pub fn cursor_position(row: usize, col: usize) -> String {
    format!("\x1b[{row};{col}H")
}

/// Build an `ESC [ <code> m` SGR sequence.
pub fn sgr(code: u8) -> String {
    format!("\x1b[{code}m")
}
