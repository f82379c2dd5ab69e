#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

use ropensign::models::schedule::{DaySchedule, ServiceWindow, WeekSchedule};

pub fn ros() -> Command {
    cargo_bin_cmd!("ropensign")
}

/// Create a unique settings file path inside the system temp dir and remove
/// any existing file
pub fn setup_test_hours(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ropensign.yml", name));
    let hours_path = path.to_string_lossy().to_string();
    fs::remove_file(&hours_path).ok();
    hours_path
}

/// Initialize a settings file with the default weekly schedule
pub fn init_hours(hours_path: &str) {
    ros()
        .args(["--hours", hours_path, "init"])
        .assert()
        .success();
}

/// The canonical service day used throughout the tests:
/// lunch 12:00-14:00, dinner 19:00-22:00
pub fn canonical_day() -> DaySchedule {
    DaySchedule {
        enabled: true,
        lunch: ServiceWindow::new(true, "12:00", "14:00"),
        dinner: ServiceWindow::new(true, "19:00", "22:00"),
    }
}

/// A week where every day is the given schedule
pub fn week_of(day: DaySchedule) -> WeekSchedule {
    WeekSchedule {
        monday: day.clone(),
        tuesday: day.clone(),
        wednesday: day.clone(),
        thursday: day.clone(),
        friday: day.clone(),
        saturday: day.clone(),
        sunday: day,
    }
}
