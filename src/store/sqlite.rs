//! SQLite adapter for the event log.

use crate::errors::{AppError, AppResult};
use crate::models::event::{TimeEvent, WorkerId};
use crate::models::status::EventStatus;
use crate::store::EventStore;
use crate::ui::messages::warning;
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, Row, params};
use std::path::Path;

pub struct SqliteStore {
    pub conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Write an internal log line into the `log` table.
    pub fn log_operation(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();

        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        stmt.execute(params![now, operation, target, message])?;

        Ok(())
    }

    /// Rows of the internal log table, oldest first.
    pub fn read_log(&mut self) -> AppResult<Vec<(String, String, String, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT date, operation, target, message FROM log ORDER BY id ASC")?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

fn init_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS events (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             first_name TEXT NOT NULL,
             last_name TEXT NOT NULL,
             date TEXT NOT NULL,
             time TEXT NOT NULL,
             status TEXT NOT NULL,
             break_duration TEXT
         );
         CREATE TABLE IF NOT EXISTS log (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             date TEXT NOT NULL,
             operation TEXT NOT NULL,
             target TEXT NOT NULL,
             message TEXT NOT NULL
         );",
    )?;
    Ok(())
}

pub fn map_row(row: &Row) -> rusqlite::Result<TimeEvent> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M:%S").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = EventStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(TimeEvent {
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        date,
        time,
        status,
        break_duration: row.get("break_duration")?,
    })
}

/// Collect mapped rows, skipping malformed ones with a warning instead of
/// aborting the whole query.
fn collect_events(
    rows: impl Iterator<Item = rusqlite::Result<TimeEvent>>,
) -> AppResult<Vec<TimeEvent>> {
    let mut out = Vec::new();
    for r in rows {
        match r {
            Ok(ev) => out.push(ev),
            Err(e) => warning(format!("Skipping malformed event: {e}")),
        }
    }
    Ok(out)
}

impl EventStore for SqliteStore {
    fn append(&mut self, event: &TimeEvent) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO events (first_name, last_name, date, time, status, break_duration)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                event.first_name,
                event.last_name,
                event.date_str(),
                event.time_str(),
                event.status.to_db_str(),
                event.break_duration,
            ],
        )?;

        self.log_operation(
            "append",
            &event.worker().to_string(),
            event.status.to_db_str(),
        )?;
        Ok(())
    }

    fn query(&mut self, worker: Option<&WorkerId>) -> AppResult<Vec<TimeEvent>> {
        match worker {
            Some(w) => {
                let mut stmt = self.conn.prepare(
                    "SELECT * FROM events
                     WHERE first_name = ?1 AND last_name = ?2
                     ORDER BY date DESC, time DESC, id DESC",
                )?;
                let rows = stmt.query_map(params![w.first_name, w.last_name], map_row)?;
                collect_events(rows)
            }
            None => {
                let mut stmt = self
                    .conn
                    .prepare("SELECT * FROM events ORDER BY date DESC, time DESC, id DESC")?;
                let rows = stmt.query_map([], map_row)?;
                collect_events(rows)
            }
        }
    }

    fn query_latest(&mut self, worker: &WorkerId) -> AppResult<Option<TimeEvent>> {
        let mut stmt = self.conn.prepare(
            "SELECT * FROM events
             WHERE first_name = ?1 AND last_name = ?2
             ORDER BY date DESC, time DESC, id DESC
             LIMIT 1",
        )?;
        let rows = stmt.query_map(params![worker.first_name, worker.last_name], map_row)?;
        Ok(collect_events(rows)?.into_iter().next())
    }

    fn query_latest_any(&mut self) -> AppResult<Option<TimeEvent>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM events ORDER BY date DESC, time DESC, id DESC LIMIT 1")?;
        let rows = stmt.query_map([], map_row)?;
        Ok(collect_events(rows)?.into_iter().next())
    }
}
