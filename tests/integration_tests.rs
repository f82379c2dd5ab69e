use predicates::str::contains;

mod common;
use common::{init_hours, ros, setup_test_hours};

#[test]
fn test_init_creates_settings_file() {
    let hours = setup_test_hours("init_creates");

    ros()
        .args(["--hours", &hours, "init"])
        .assert()
        .success()
        .stdout(contains("Settings file"));

    let content = std::fs::read_to_string(&hours).expect("settings file written");
    assert!(content.contains("opening_hours"));
    assert!(content.contains("monday"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let hours = setup_test_hours("init_twice");
    init_hours(&hours);

    ros().args(["--hours", &hours, "init"]).assert().failure();
}

#[test]
fn test_status_open_during_lunch() {
    let hours = setup_test_hours("status_lunch");
    init_hours(&hours);

    ros()
        .args(["--hours", &hours, "status", "--day", "monday", "--at", "13:00"])
        .assert()
        .success()
        .stdout(contains("OPEN"));
}

#[test]
fn test_status_between_services() {
    let hours = setup_test_hours("status_gap");
    init_hours(&hours);

    ros()
        .args(["--hours", &hours, "status", "--day", "monday", "--at", "15:00"])
        .assert()
        .success()
        .stdout(contains("CLOSED"))
        .stdout(contains("opens at 19:00"));
}

#[test]
fn test_status_on_rest_day() {
    let hours = setup_test_hours("status_rest_day");
    init_hours(&hours);

    // Tuesday is closed in the default week
    ros()
        .args(["--hours", &hours, "status", "--day", "tuesday", "--at", "13:00"])
        .assert()
        .success()
        .stdout(contains("CLOSED"))
        .stdout(contains("closed today"));
}

#[test]
fn test_status_after_last_service() {
    let hours = setup_test_hours("status_late");
    init_hours(&hours);

    ros()
        .args(["--hours", &hours, "status", "--day", "monday", "--at", "23:00"])
        .assert()
        .success()
        .stdout(contains("closed for today"));
}

#[test]
fn test_status_json_output() {
    let hours = setup_test_hours("status_json");
    init_hours(&hours);

    ros()
        .args([
            "--hours", &hours, "status", "--day", "monday", "--at", "13:00", "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"is_open\": true"));

    ros()
        .args([
            "--hours", &hours, "status", "--day", "monday", "--at", "15:00", "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"is_open\": false"))
        .stdout(contains("\"status_label\": \"opens at 19:00\""));
}

#[test]
fn test_status_without_settings_file_uses_defaults() {
    // No init: the default week applies (Tuesday closed)
    let hours = setup_test_hours("status_defaults");

    ros()
        .args(["--hours", &hours, "status", "--day", "tuesday", "--at", "20:00"])
        .assert()
        .success()
        .stdout(contains("closed today"));
}

#[test]
fn test_status_rejects_bad_time() {
    let hours = setup_test_hours("status_bad_time");
    init_hours(&hours);

    ros()
        .args(["--hours", &hours, "status", "--at", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_status_rejects_bad_weekday() {
    let hours = setup_test_hours("status_bad_day");
    init_hours(&hours);

    ros()
        .args(["--hours", &hours, "status", "--day", "someday"])
        .assert()
        .failure()
        .stderr(contains("Invalid weekday"));
}

#[test]
fn test_week_prints_full_schedule() {
    let hours = setup_test_hours("week_table");
    init_hours(&hours);

    ros()
        .args(["--hours", &hours, "week"])
        .assert()
        .success()
        .stdout(contains("Monday"))
        .stdout(contains("Sunday"))
        .stdout(contains("12:00-14:00"))
        .stdout(contains("19:00-22:00"))
        .stdout(contains("closed"));
}

#[test]
fn test_config_print() {
    let hours = setup_test_hours("config_print");
    init_hours(&hours);

    ros()
        .args(["--hours", &hours, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("restaurant_name"))
        .stdout(contains("opening_hours"));
}
