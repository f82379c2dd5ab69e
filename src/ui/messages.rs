use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_GREEN: &str = "\x1b[32m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_OK: &str = "✅";

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

/// Two-state badge shown by `status`, mirroring the website header pill
pub fn badge(is_open: bool) -> String {
    if is_open {
        format!("{}{}🟢 OPEN{}", FG_GREEN, BOLD, RESET)
    } else {
        format!("{}{}🔴 CLOSED{}", FG_RED, BOLD, RESET)
    }
}

