//! Time utilities: parsing HH:MM:SS, duration computations and the
//! human-readable break duration format.

use chrono::{NaiveDateTime, NaiveTime};

/// Recorded when a break duration cannot be computed (e.g. the clock
/// moved backwards between start and end).
pub const UNKNOWN_DURATION: &str = "duration unknown";

pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}

/// Break duration as displayed and stored: "1h 5min" from one hour on,
/// plain "45min" below.
pub fn format_break_duration(minutes: i64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours > 0 {
        format!("{}h {}min", hours, mins)
    } else {
        format!("{}min", mins)
    }
}

pub fn hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
