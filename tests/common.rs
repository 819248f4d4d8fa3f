#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rtimesheet::models::category::Category;
use rtimesheet::models::record::TimeRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the real configuration.
///
/// HOME (APPDATA on Windows) points at a per-test directory so no user
/// config file is picked up, and the password variable is cleared.
pub fn rts(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rtimesheet");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("RTIMESHEET_PASSWORD");
    cmd
}

/// Fresh directory inside the system temp dir (removed first if present).
pub fn temp_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
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

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

pub fn ts(y: i32, m: u32, day: u32, h: u32, min: u32) -> NaiveDateTime {
    d(y, m, day).and_hms_opt(h, min, 0).expect("valid time")
}

pub fn rec(user: &str, date: NaiveDate, category: Category, hours: f64) -> TimeRecord {
    TimeRecord::new(user, date, category, hours, ts(2024, 1, 1, 9, 0))
}

/// Initialize an SQLite store through the CLI (no config file is written)
pub fn init_db(home: &str, db_path: &str) {
    rts(home)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
