//! Display-ready view of the punch log, newest first. Break ends are
//! paired with their break starts by replaying the log chronologically,
//! so the view survives process restarts without any in-memory state.

use crate::errors::AppResult;
use crate::models::event::{TimeEvent, WorkerId};
use crate::models::status::EventStatus;
use crate::store::EventStore;
use crate::utils::time::format_break_duration;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Status label plus a "(1h 5min)" suffix on paired break ends.
    pub status_text: String,
}

/// Finite, restartable sequence of display rows; `rows()` can be iterated
/// any number of times and always yields the same output for the same log.
pub struct History {
    rows: Vec<HistoryRow>,
}

impl History {
    pub fn load(store: &mut dyn EventStore, worker: Option<&WorkerId>) -> AppResult<Self> {
        let events = store.query(worker)?;
        Ok(Self::from_events(events))
    }

    /// Build rows from events already sorted newest first.
    pub fn from_events(events: Vec<TimeEvent>) -> Self {
        // Chronological pass (oldest first) to pair breaks. Per worker and
        // calendar date, each break start may be consumed by at most one
        // later break end; an end without an unconsumed start on its day
        // gets no suffix.
        let mut open_breaks: HashMap<(String, String, NaiveDate), Vec<NaiveTime>> = HashMap::new();
        let mut suffixes: Vec<String> = vec![String::new(); events.len()];

        for (idx, ev) in events.iter().enumerate().rev() {
            let key = (ev.first_name.clone(), ev.last_name.clone(), ev.date);

            match ev.status {
                EventStatus::BreakStart => {
                    open_breaks.entry(key).or_default().push(ev.time);
                }
                EventStatus::BreakEnd => {
                    if let Some(start) = open_breaks.entry(key).or_default().pop() {
                        let minutes = (ev.time - start).num_minutes();
                        suffixes[idx] = format!(" ({})", format_break_duration(minutes));
                    }
                }
                _ => {}
            }
        }

        let rows = events
            .into_iter()
            .zip(suffixes)
            .map(|(ev, suffix)| HistoryRow {
                status_text: format!("{}{}", ev.status.to_db_str(), suffix),
                first_name: ev.first_name,
                last_name: ev.last_name,
                date: ev.date,
                time: ev.time,
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> impl Iterator<Item = &HistoryRow> {
        self.rows.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
