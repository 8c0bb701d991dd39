//! ANSI color helper utilities for terminal output.

use std::io::{self, IsTerminal};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Colours only when stdout is a terminal (not in pipes or tests).
fn enabled() -> bool {
    io::stdout().is_terminal()
}

fn paint(color: &str, text: &str) -> String {
    if enabled() {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Grey for absent values ("-" or blank), plain otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        paint(GREY, value)
    } else {
        value.to_string()
    }
}

/// Overtime figures stand out in yellow when non-zero.
pub fn colorize_overtime(value: f64, text: &str) -> String {
    if value > 0.0 {
        paint(YELLOW, text)
    } else {
        text.to_string()
    }
}

/// Night hours are shown in blue when non-zero.
pub fn colorize_night(value: f64, text: &str) -> String {
    if value > 0.0 {
        paint(BLUE, text)
    } else {
        text.to_string()
    }
}
