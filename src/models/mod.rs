pub mod evaluation;
pub mod schedule;
pub mod weekday;
