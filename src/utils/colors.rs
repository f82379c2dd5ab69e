/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

/// Returns GREY for an empty or placeholder window cell ("--:--"),
/// and RESET otherwise.
pub fn color_for_window_cell(value: &str) -> &'static str {
    if value.trim().is_empty() || value.trim() == "--:--" {
        GREY
    } else {
        RESET
    }
}

/// Ritorna formattazione colorata di un valore opzionale.
pub fn colorize_optional(value: &str) -> String {
    format!("{}{}{}", color_for_window_cell(value), value, RESET)
}
