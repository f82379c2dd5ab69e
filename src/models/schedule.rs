use crate::models::weekday::Weekday;
use crate::utils::time::parse_hhmm;
use serde::{Deserialize, Serialize};

/// A single service window (lunch or dinner) with HH:MM boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceWindow {
    pub enabled: bool,
    pub start: String,
    pub end: String,
}

impl Default for ServiceWindow {
    fn default() -> Self {
        Self {
            enabled: false,
            start: "12:00".to_string(),
            end: "14:00".to_string(),
        }
    }
}

impl ServiceWindow {
    pub fn new(enabled: bool, start: &str, end: &str) -> Self {
        Self {
            enabled,
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Resolve the window to minutes since midnight.
    ///
    /// Returns None when the window is disabled, a boundary does not parse
    /// as HH:MM, or start >= end (zero/negative width). Such a window never
    /// matches any instant and never drives an "opens at" hint.
    pub fn span(&self) -> Option<(i64, i64)> {
        if !self.enabled {
            return None;
        }
        let start = parse_hhmm(&self.start)?;
        let end = parse_hhmm(&self.end)?;
        if start >= end {
            return None;
        }
        Some((start, end))
    }
}

/// One day of the week: a day-level switch plus the two service windows.
/// When `enabled` is false the day is closed no matter what the windows say.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub enabled: bool,
    #[serde(default)]
    pub lunch: ServiceWindow,
    #[serde(default)]
    pub dinner: ServiceWindow,
}

impl DaySchedule {
    /// Standard service day: lunch 12:00-14:00, dinner 19:00-22:00
    pub fn standard() -> Self {
        Self {
            enabled: true,
            lunch: ServiceWindow::new(true, "12:00", "14:00"),
            dinner: ServiceWindow::new(true, "19:00", "22:00"),
        }
    }

    /// Fully closed day (windows keep the standard times, all disabled)
    pub fn closed() -> Self {
        Self {
            enabled: false,
            lunch: ServiceWindow::new(false, "12:00", "14:00"),
            dinner: ServiceWindow::new(false, "19:00", "22:00"),
        }
    }
}

/// The weekly schedule. Every weekday is always present in memory; a day
/// missing from the settings file deserializes as a closed day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    #[serde(default)]
    pub monday: DaySchedule,
    #[serde(default)]
    pub tuesday: DaySchedule,
    #[serde(default)]
    pub wednesday: DaySchedule,
    #[serde(default)]
    pub thursday: DaySchedule,
    #[serde(default)]
    pub friday: DaySchedule,
    #[serde(default)]
    pub saturday: DaySchedule,
    #[serde(default)]
    pub sunday: DaySchedule,
}

impl WeekSchedule {
    pub fn day(&self, wd: Weekday) -> &DaySchedule {
        match wd {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, wd: Weekday) -> &mut DaySchedule {
        match wd {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }

    /// Default restaurant week: every day on the standard service times,
    /// Tuesday closed (weekly rest day).
    pub fn default_week() -> Self {
        Self {
            monday: DaySchedule::standard(),
            tuesday: DaySchedule::closed(),
            wednesday: DaySchedule::standard(),
            thursday: DaySchedule::standard(),
            friday: DaySchedule::standard(),
            saturday: DaySchedule::standard(),
            sunday: DaySchedule::standard(),
        }
    }
}
