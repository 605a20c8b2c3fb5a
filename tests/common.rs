#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use std::env;
use std::path::PathBuf;

use stempeluhr::core::recorder;
use stempeluhr::models::event::WorkerId;
use stempeluhr::store::{EventStore, SqliteStore};

pub fn suhr() -> Command {
    cargo_bin_cmd!("stempeluhr")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stempeluhr.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

pub fn open_store(db_path: &str) -> SqliteStore {
    SqliteStore::open(db_path).expect("open store")
}

pub fn worker() -> WorkerId {
    WorkerId::new("Max", "Mustermann")
}

pub fn ts(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S")
        .expect("parse timestamp")
}

/// Record a full worked day through the recorder: clock-in, one break,
/// clock-out.
pub fn seed_workday(
    store: &mut dyn EventStore,
    w: &WorkerId,
    date: &str,
    clock_in: &str,
    break_start: &str,
    break_end: &str,
    clock_out: &str,
) {
    recorder::clock_in_at(store, w, ts(date, clock_in)).expect("clock in");
    recorder::break_start_at(store, w, ts(date, break_start)).expect("break start");
    recorder::break_end_at(store, w, ts(date, break_end)).expect("break end");
    recorder::clock_out_at(store, w, ts(date, clock_out)).expect("clock out");
}

/// Record a plain worked day without a break.
pub fn seed_simple_day(
    store: &mut dyn EventStore,
    w: &WorkerId,
    date: &str,
    clock_in: &str,
    clock_out: &str,
) {
    recorder::clock_in_at(store, w, ts(date, clock_in)).expect("clock in");
    recorder::clock_out_at(store, w, ts(date, clock_out)).expect("clock out");
}
