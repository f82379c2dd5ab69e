use crate::models::weekday::Weekday;
use chrono::{Datelike, Local, Timelike};

pub fn today() -> Weekday {
    Weekday::from_chrono(Local::now().weekday())
}

/// Minutes elapsed since local midnight, the instant format the evaluator
/// consumes.
pub fn now_minutes() -> i64 {
    let now = Local::now().time();
    now.hour() as i64 * 60 + now.minute() as i64
}
