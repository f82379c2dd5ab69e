//! Time utilities: parsing HH:MM, minutes-since-midnight conversions,
//! formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse an HH:MM string into minutes since midnight.
/// Returns None on malformed input so a bad window degrades to "never open"
/// instead of failing the evaluation.
pub fn parse_hhmm(t: &str) -> Option<i64> {
    let time = parse_time(t)?;
    Some(time.hour() as i64 * 60 + time.minute() as i64)
}

/// Parse a strict HH:MM argument from the CLI, erroring on bad input
pub fn parse_required_hhmm(input: &str) -> AppResult<i64> {
    parse_hhmm(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

/// Parse a "HH:MM-HH:MM" range argument (used by `set --lunch/--dinner`)
pub fn parse_time_range(input: &str) -> AppResult<(String, String)> {
    let (start, end) = input
        .split_once('-')
        .ok_or_else(|| AppError::InvalidWindow(input.to_string()))?;

    let start = start.trim();
    let end = end.trim();

    if parse_hhmm(start).is_none() || parse_hhmm(end).is_none() {
        return Err(AppError::InvalidWindow(input.to_string()));
    }

    Ok((start.to_string(), end.to_string()))
}
