//! Append-only event log, isolated behind a trait so the backend
//! (embedded SQLite vs. flat CSV file) stays a swappable adapter.

pub mod csv_file;
pub mod sqlite;

use crate::config::{Config, StorageBackend};
use crate::errors::AppResult;
use crate::models::event::{TimeEvent, WorkerId};

pub use csv_file::CsvStore;
pub use sqlite::SqliteStore;

/// Storage contract consumed by the core. Events are written exactly once
/// and never updated or deleted.
pub trait EventStore {
    /// Append a single event. One atomic insert, no batching.
    fn append(&mut self, event: &TimeEvent) -> AppResult<()>;

    /// All events, newest first (descending by date, time). `None` returns
    /// every worker's events.
    fn query(&mut self, worker: Option<&WorkerId>) -> AppResult<Vec<TimeEvent>>;

    /// Most recent event of one worker.
    fn query_latest(&mut self, worker: &WorkerId) -> AppResult<Option<TimeEvent>>;

    /// Most recent event of any worker. Used to recall the last recorded
    /// identity when the CLI is invoked without names.
    fn query_latest_any(&mut self) -> AppResult<Option<TimeEvent>>;
}

/// Open the backend selected by the configuration.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn EventStore>> {
    match cfg.storage {
        StorageBackend::Sqlite => Ok(Box::new(SqliteStore::open(&cfg.database)?)),
        StorageBackend::Csv => Ok(Box::new(CsvStore::open(&cfg.csv_file)?)),
    }
}
