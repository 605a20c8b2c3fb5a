//! Flat-file adapter for the event log: headerless CSV, one row per
//! event, appended in arrival order. Same column shape as the SQLite
//! backend so data can be moved between the two.

use crate::errors::{AppError, AppResult};
use crate::models::event::{TimeEvent, WorkerId};
use crate::models::status::EventStatus;
use crate::store::EventStore;
use crate::ui::messages::warning;
use chrono::{NaiveDate, NaiveTime};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::OpenOptions;
use std::path::PathBuf;

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let path = PathBuf::from(path);
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir)?;
        }
        Ok(Self { path })
    }

    fn read_all(&self) -> AppResult<Vec<TimeEvent>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| AppError::Storage(format!("CSV open error: {e}")))?;

        let mut out = Vec::new();
        for record in rdr.records() {
            let record =
                record.map_err(|e| AppError::Storage(format!("CSV read error: {e}")))?;
            match parse_record(&record) {
                Ok(ev) => out.push(ev),
                Err(e) => warning(format!("Skipping malformed event: {e}")),
            }
        }
        Ok(out)
    }
}

/// Parse one stored row. Legacy files carry five columns (no
/// break_duration); current files carry six.
fn parse_record(record: &StringRecord) -> AppResult<TimeEvent> {
    if record.len() < 5 {
        return Err(AppError::Malformed(format!(
            "expected 5 or 6 columns, got {}",
            record.len()
        )));
    }

    let date = NaiveDate::parse_from_str(&record[2], "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(record[2].to_string()))?;
    let time = NaiveTime::parse_from_str(&record[3], "%H:%M:%S")
        .map_err(|_| AppError::InvalidTime(record[3].to_string()))?;
    let status = EventStatus::from_db_str(&record[4])
        .ok_or_else(|| AppError::InvalidStatus(record[4].to_string()))?;

    let break_duration = record
        .get(5)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    Ok(TimeEvent {
        first_name: record[0].to_string(),
        last_name: record[1].to_string(),
        date,
        time,
        status,
        break_duration,
    })
}

impl EventStore for CsvStore {
    fn append(&mut self, event: &TimeEvent) -> AppResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.write_record([
            event.first_name.as_str(),
            event.last_name.as_str(),
            &event.date_str(),
            &event.time_str(),
            event.status.to_db_str(),
            event.break_duration.as_deref().unwrap_or(""),
        ])
        .map_err(|e| AppError::Storage(format!("CSV write error: {e}")))?;
        wtr.flush()?;
        Ok(())
    }

    fn query(&mut self, worker: Option<&WorkerId>) -> AppResult<Vec<TimeEvent>> {
        let mut events = self.read_all()?;

        if let Some(w) = worker {
            events.retain(|ev| ev.first_name == w.first_name && ev.last_name == w.last_name);
        }

        // Newest first; ties resolved by file (insertion) order, later
        // appends winning, to match the SQLite backend.
        let mut indexed: Vec<(usize, TimeEvent)> = events.into_iter().enumerate().collect();
        indexed.sort_by(|(ia, a), (ib, b)| {
            b.timestamp().cmp(&a.timestamp()).then(ib.cmp(ia))
        });
        Ok(indexed.into_iter().map(|(_, ev)| ev).collect())
    }

    fn query_latest(&mut self, worker: &WorkerId) -> AppResult<Option<TimeEvent>> {
        Ok(self.query(Some(worker))?.into_iter().next())
    }

    fn query_latest_any(&mut self) -> AppResult<Option<TimeEvent>> {
        Ok(self.query(None)?.into_iter().next())
    }
}
