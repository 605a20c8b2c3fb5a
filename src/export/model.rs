use crate::models::event::TimeEvent;
use serde::Serialize;

/// Flat, string-typed event row for CSV/JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub first_name: String,
    pub last_name: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub break_duration: String,
}

impl From<&TimeEvent> for EventExport {
    fn from(ev: &TimeEvent) -> Self {
        Self {
            first_name: ev.first_name.clone(),
            last_name: ev.last_name.clone(),
            date: ev.date_str(),
            time: ev.time_str(),
            status: ev.status.to_db_str().to_string(),
            break_duration: ev.break_duration.clone().unwrap_or_default(),
        }
    }
}
