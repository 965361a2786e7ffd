#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::core::roster::Roster;
use rattendance::models::AttendanceStatus;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const PHOTO: &str = "https://example.org/avatar.png";

/// Binary under test, with HOME pointed at a scratch dir so a real
/// ~/.rattendance config never leaks into the tests.
pub fn rta() -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("HOME", env::temp_dir().join("rattendance_test_home"));
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB through the CLI.
pub fn init_db(db_path: &str) {
    rta()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small roster useful for many tests:
/// Carol present and Dave absent on 1/1/2024, Carol absent on 1/2/2024.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for name in ["Carol", "Dave"] {
        rta()
            .args(["--db", db_path, "add", name])
            .assert()
            .success();
    }

    for (who, status, date) in [
        ("Carol", "present", "1/1/2024"),
        ("Dave", "absent", "1/1/2024"),
        ("Carol", "absent", "1/2/2024"),
    ] {
        rta()
            .args(["--db", db_path, "mark", who, status, "--date", date])
            .assert()
            .success();
    }
}

/// Roster built only through the public operations.
pub fn sample_roster() -> Roster {
    let mut roster = Roster::new();
    let alice = roster.add_employee("Alice", Some(PHOTO), PHOTO).unwrap();
    let bob = roster.add_employee("Bob", None, PHOTO).unwrap();
    roster.add_employee("Eve", None, PHOTO).unwrap();

    roster
        .mark_attendance(Some(alice), AttendanceStatus::Present, "1/1/2024")
        .unwrap();
    roster
        .mark_attendance(Some(alice), AttendanceStatus::Absent, "1/2/2024")
        .unwrap();
    roster
        .mark_attendance(Some(bob), AttendanceStatus::Present, "1/1/2024")
        .unwrap();
    roster
}
