use predicates::str::contains;

mod common;
use common::{open_store, seed_simple_day, setup_test_db, suhr, temp_out, worker};

#[test]
fn test_export_events_csv_all() {
    let db_path = setup_test_db("export_events_csv_all");
    let mut store = open_store(&db_path);
    seed_simple_day(&mut store, &worker(), "2025-09-01", "09:00:00", "17:00:00");
    seed_simple_day(&mut store, &worker(), "2025-09-15", "09:00:00", "17:00:00");
    drop(store);

    let out = temp_out("export_events_csv_all", "csv");

    suhr()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
    assert!(content.contains("Ein"));
    assert!(content.contains("Aus"));
}

#[test]
fn test_export_events_json_range() {
    let db_path = setup_test_db("export_events_json_range");
    let mut store = open_store(&db_path);
    seed_simple_day(&mut store, &worker(), "2025-09-01", "09:00:00", "17:00:00");
    seed_simple_day(&mut store, &worker(), "2024-09-10", "09:00:00", "17:00:00");
    drop(store);

    let out = temp_out("export_events_json_range", "json");

    suhr()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2025-09",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2025-09-01"));
    assert!(!content.contains("2024-09-10"));
}

#[test]
fn test_export_range_pair() {
    let db_path = setup_test_db("export_range_pair");
    let mut store = open_store(&db_path);
    seed_simple_day(&mut store, &worker(), "2024-09-10", "09:00:00", "17:00:00");
    seed_simple_day(&mut store, &worker(), "2025-08-31", "09:00:00", "17:00:00");
    seed_simple_day(&mut store, &worker(), "2026-01-05", "09:00:00", "17:00:00");
    drop(store);

    let out = temp_out("export_range_pair", "csv");

    suhr()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2024-09:2025-09",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2024-09-10"));
    assert!(content.contains("2025-08-31"));
    assert!(!content.contains("2026-01-05"));
}

#[test]
fn test_export_empty_range_warns() {
    let db_path = setup_test_db("export_empty_range");
    let mut store = open_store(&db_path);
    seed_simple_day(&mut store, &worker(), "2025-09-01", "09:00:00", "17:00:00");
    drop(store);

    let out = temp_out("export_empty_range", "csv");

    suhr()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "1999",
        ])
        .assert()
        .success()
        .stdout(contains("No events found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_force_overwrites() {
    let db_path = setup_test_db("export_force");
    let mut store = open_store(&db_path);
    seed_simple_day(&mut store, &worker(), "2025-09-01", "09:00:00", "17:00:00");
    drop(store);

    let out = temp_out("export_force", "csv");
    std::fs::write(&out, "stale").expect("write stale file");

    suhr()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
}

#[test]
fn test_log_print_records_operations() {
    let db_path = setup_test_db("log_print");

    suhr()
        .args(["--db", &db_path, "in", "Max", "Mustermann"])
        .assert()
        .success();

    suhr()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("append"))
        .stdout(contains("Max Mustermann"));
}

#[test]
fn test_csv_backend_via_cli() {
    let mut path = std::env::temp_dir();
    path.push("cli_csv_backend_stempeluhr.csv");
    let csv_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&csv_path).ok();

    suhr()
        .args([
            "--storage",
            "csv",
            "--db",
            &csv_path,
            "in",
            "Max",
            "Mustermann",
        ])
        .assert()
        .success()
        .stdout(contains("Clocked in Max Mustermann"));

    suhr()
        .args([
            "--storage",
            "csv",
            "--db",
            &csv_path,
            "status",
            "Max",
            "Mustermann",
        ])
        .assert()
        .success()
        .stdout(contains("is clocked in"));

    let content = std::fs::read_to_string(&csv_path).expect("read csv log");
    assert!(content.contains("Max,Mustermann"));
    assert!(content.contains("Ein"));
}

#[test]
fn test_log_unavailable_on_csv_backend() {
    let mut path = std::env::temp_dir();
    path.push("cli_csv_log_stempeluhr.csv");
    let csv_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&csv_path).ok();

    suhr()
        .args(["--storage", "csv", "--db", &csv_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("only available with the SQLite backend"));
}
