mod common;
use common::{open_store, setup_test_db, ts, worker};

use std::env;
use std::io::Write;
use std::path::PathBuf;

use stempeluhr::core::recorder;
use stempeluhr::errors::AppError;
use stempeluhr::models::event::{TimeEvent, WorkerId};
use stempeluhr::models::status::EventStatus;
use stempeluhr::store::{CsvStore, EventStore};

#[test]
fn test_append_query_latest_round_trip() {
    let db_path = setup_test_db("recorder_round_trip");
    let mut store = open_store(&db_path);
    let w = worker();

    let appended =
        recorder::clock_in_at(&mut store, &w, ts("2024-05-06", "08:30:00")).expect("clock in");

    let latest = store
        .query_latest(&w)
        .expect("query latest")
        .expect("one event");
    assert_eq!(latest, appended);
}

#[test]
fn test_blank_first_name_rejected() {
    let db_path = setup_test_db("recorder_blank_first");
    let mut store = open_store(&db_path);
    let w = WorkerId::new("   ", "Mustermann");

    let result = recorder::clock_in_at(&mut store, &w, ts("2024-05-06", "08:30:00"));
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(store.query(None).expect("query").is_empty());
}

#[test]
fn test_break_duration_short_format() {
    let db_path = setup_test_db("recorder_break_short");
    let mut store = open_store(&db_path);
    let w = worker();

    recorder::clock_in_at(&mut store, &w, ts("2024-05-06", "08:00:00")).expect("clock in");
    recorder::break_start_at(&mut store, &w, ts("2024-05-06", "12:00:00")).expect("break start");
    let ev =
        recorder::break_end_at(&mut store, &w, ts("2024-05-06", "12:45:00")).expect("break end");

    assert_eq!(ev.break_duration.as_deref(), Some("45min"));
}

#[test]
fn test_break_duration_long_format() {
    let db_path = setup_test_db("recorder_break_long");
    let mut store = open_store(&db_path);
    let w = worker();

    recorder::clock_in_at(&mut store, &w, ts("2024-05-06", "08:00:00")).expect("clock in");
    recorder::break_start_at(&mut store, &w, ts("2024-05-06", "12:00:00")).expect("break start");
    let ev =
        recorder::break_end_at(&mut store, &w, ts("2024-05-06", "13:05:00")).expect("break end");

    assert_eq!(ev.break_duration.as_deref(), Some("1h 5min"));
}

#[test]
fn test_break_end_before_start_records_unknown_duration() {
    let db_path = setup_test_db("recorder_break_unknown");
    let mut store = open_store(&db_path);
    let w = worker();

    recorder::break_start_at(&mut store, &w, ts("2024-05-06", "12:00:00")).expect("break start");
    // Clock moved backwards: elapsed time cannot be computed.
    let ev =
        recorder::break_end_at(&mut store, &w, ts("2024-05-06", "11:00:00")).expect("break end");

    assert_eq!(ev.break_duration.as_deref(), Some("duration unknown"));
}

#[test]
fn test_break_end_without_start_appends_nothing() {
    let db_path = setup_test_db("recorder_break_end_rejected");
    let mut store = open_store(&db_path);
    let w = worker();

    recorder::clock_in_at(&mut store, &w, ts("2024-05-06", "08:00:00")).expect("clock in");

    let result = recorder::break_end_at(&mut store, &w, ts("2024-05-06", "12:00:00"));
    assert!(matches!(result, Err(AppError::NoActiveBreak(_))));
    assert_eq!(store.query(Some(&w)).expect("query").len(), 1);
}

#[test]
fn test_break_duration_only_on_break_end() {
    let db_path = setup_test_db("recorder_duration_iff_end");
    let mut store = open_store(&db_path);
    let w = worker();

    recorder::clock_in_at(&mut store, &w, ts("2024-05-06", "08:00:00")).expect("clock in");
    recorder::break_start_at(&mut store, &w, ts("2024-05-06", "12:00:00")).expect("break start");
    recorder::break_end_at(&mut store, &w, ts("2024-05-06", "12:30:00")).expect("break end");
    recorder::clock_out_at(&mut store, &w, ts("2024-05-06", "17:00:00")).expect("clock out");

    for ev in store.query(Some(&w)).expect("query") {
        assert_eq!(
            ev.break_duration.is_some(),
            ev.status == EventStatus::BreakEnd
        );
    }
}

fn setup_test_csv(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stempeluhr.csv", name));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

#[test]
fn test_csv_backend_round_trip() {
    let csv_path = setup_test_csv("recorder_csv_round_trip");
    let mut store = CsvStore::open(&csv_path).expect("open csv store");
    let w = worker();

    recorder::clock_in_at(&mut store, &w, ts("2024-05-06", "08:00:00")).expect("clock in");
    recorder::break_start_at(&mut store, &w, ts("2024-05-06", "12:00:00")).expect("break start");
    let ended =
        recorder::break_end_at(&mut store, &w, ts("2024-05-06", "12:30:00")).expect("break end");

    let latest = store
        .query_latest(&w)
        .expect("query latest")
        .expect("one event");
    assert_eq!(latest, ended);
    assert_eq!(store.query(Some(&w)).expect("query").len(), 3);
}

#[test]
fn test_csv_backend_skips_malformed_rows() {
    let csv_path = setup_test_csv("recorder_csv_malformed");
    let mut store = CsvStore::open(&csv_path).expect("open csv store");
    let w = worker();

    recorder::clock_in_at(&mut store, &w, ts("2024-05-06", "08:00:00")).expect("clock in");

    // A truncated line from a crashed writer.
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(&csv_path)
        .expect("open csv file");
    writeln!(file, "Max,Mustermann,not-a-date").expect("write garbage");

    recorder::clock_out_at(&mut store, &w, ts("2024-05-06", "17:00:00")).expect("clock out");

    let events = store.query(Some(&w)).expect("query");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].status, EventStatus::ClockOut);
}

#[test]
fn test_legacy_break_end_status_text_still_parses() {
    let db_path = setup_test_db("recorder_legacy_status");
    let mut store = open_store(&db_path);
    let w = worker();

    // Older databases embedded the duration in the status text.
    store.conn
        .execute(
            "INSERT INTO events (first_name, last_name, date, time, status, break_duration)
             VALUES ('Max', 'Mustermann', '2023-11-02', '12:30:00', 'Pause Ende (30 Min.)', NULL)",
            [],
        )
        .expect("insert legacy row");

    let latest = store
        .query_latest(&w)
        .expect("query latest")
        .expect("one event");
    assert_eq!(latest.status, EventStatus::BreakEnd);
}

#[test]
fn test_append_accepts_structurally_odd_sequences() {
    let db_path = setup_test_db("recorder_odd_sequences");
    let mut store = open_store(&db_path);
    let w = worker();

    // Two clock-ins in a row are permitted by the log; the caller guards
    // against this via the status module.
    recorder::clock_in_at(&mut store, &w, ts("2024-05-06", "08:00:00")).expect("first clock in");
    recorder::clock_in_at(&mut store, &w, ts("2024-05-06", "09:00:00")).expect("second clock in");

    assert_eq!(store.query(Some(&w)).expect("query").len(), 2);
}

#[test]
fn test_events_are_never_mutated() {
    let db_path = setup_test_db("recorder_immutable");
    let mut store = open_store(&db_path);
    let w = worker();

    let first =
        recorder::clock_in_at(&mut store, &w, ts("2024-05-06", "08:00:00")).expect("clock in");
    recorder::clock_out_at(&mut store, &w, ts("2024-05-06", "17:00:00")).expect("clock out");

    let events = store.query(Some(&w)).expect("query");
    let restored: Vec<&TimeEvent> = events
        .iter()
        .filter(|ev| ev.status == EventStatus::ClockIn)
        .collect();
    assert_eq!(restored, vec![&first]);
}
