use super::status::EventStatus;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Identity of the worker whose events are recorded: the raw
/// `(first_name, last_name)` pair. No numeric ID exists; the pair is
/// compared case- and whitespace-sensitive, exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerId {
    pub first_name: String,
    pub last_name: String,
}

impl WorkerId {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// True when either name is empty or blank.
    pub fn is_blank(&self) -> bool {
        self.first_name.trim().is_empty() || self.last_name.trim().is_empty()
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// One immutable row of the punch log.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimeEvent {
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDate,                // ⇔ events.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,                // ⇔ events.time (TEXT "HH:MM:SS")
    pub status: EventStatus,            // ⇔ events.status ('Ein' | 'Aus' | 'Pause Start' | 'Pause Ende')
    pub break_duration: Option<String>, // ⇔ events.break_duration, set only on 'Pause Ende'
}

impl TimeEvent {
    pub fn new(worker: &WorkerId, timestamp: NaiveDateTime, status: EventStatus) -> Self {
        Self {
            first_name: worker.first_name.clone(),
            last_name: worker.last_name.clone(),
            date: timestamp.date(),
            time: timestamp.time(),
            status,
            break_duration: None,
        }
    }

    pub fn worker(&self) -> WorkerId {
        WorkerId::new(self.first_name.clone(), self.last_name.clone())
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}
