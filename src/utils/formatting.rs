//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a service window as "12:00-14:00", or "--:--" when the service
/// is switched off.
pub fn describe_window(enabled: bool, start: &str, end: &str) -> String {
    if enabled {
        format!("{}-{}", start, end)
    } else {
        "--:--".to_string()
    }
}
