//! Work-time aggregation: replays one month of a worker's events and
//! folds them into per-ISO-week summaries with overtime beyond the
//! 40-hour threshold.

use crate::errors::AppResult;
use crate::models::event::{TimeEvent, WorkerId};
use crate::models::status::EventStatus;
use crate::models::summary::WeeklySummary;
use crate::store::EventStore;
use chrono::{Datelike, NaiveDateTime};
use std::collections::BTreeMap;

/// Net hours per ISO week beyond which time counts as overtime.
pub const WEEKLY_HOURS_THRESHOLD: f64 = 40.0;

/// One `WeeklySummary` per ISO calendar week of the target month,
/// ascending by week number. Total over well-formed logs: structurally
/// odd sequences (double clock-ins, stray clock-outs) degrade to
/// best-effort numbers, never to an error.
pub fn weekly_summaries(
    store: &mut dyn EventStore,
    worker: &WorkerId,
    year: i32,
    month: u32,
) -> AppResult<Vec<WeeklySummary>> {
    let mut events = store.query(Some(worker))?;
    events.retain(|ev| ev.date.year() == year && ev.date.month() == month);
    // The store returns newest first; replay wants oldest first, with
    // same-second ties kept in insertion order.
    events.reverse();

    let mut weeks: BTreeMap<u32, Vec<&TimeEvent>> = BTreeMap::new();
    for ev in &events {
        weeks.entry(ev.date.iso_week().week()).or_default().push(ev);
    }

    let summaries = weeks
        .into_iter()
        .map(|(week_number, week_events)| {
            let (work_secs, break_secs) = replay_week(&week_events);

            let work_hours = work_secs as f64 / 3600.0;
            let break_hours = break_secs as f64 / 3600.0;
            // May go negative on inconsistent data; not clamped.
            let net_hours = work_hours - break_hours;
            let overtime_hours = (net_hours - WEEKLY_HOURS_THRESHOLD).max(0.0);

            WeeklySummary {
                week_number,
                work_hours,
                break_hours,
                net_hours,
                overtime_hours,
            }
        })
        .collect();

    Ok(summaries)
}

/// Replay one week of events (ascending) into worked and break seconds.
/// Unmatched clock-outs and break-ends are no-ops.
fn replay_week(events: &[&TimeEvent]) -> (i64, i64) {
    let mut work_secs = 0;
    let mut break_secs = 0;

    let mut last_clock_in: Option<NaiveDateTime> = None;
    let mut last_break_start: Option<NaiveDateTime> = None;

    for ev in events {
        match ev.status {
            EventStatus::ClockIn => last_clock_in = Some(ev.timestamp()),
            EventStatus::ClockOut => {
                if let Some(start) = last_clock_in.take() {
                    work_secs += (ev.timestamp() - start).num_seconds();
                }
            }
            EventStatus::BreakStart => last_break_start = Some(ev.timestamp()),
            EventStatus::BreakEnd => {
                if let Some(start) = last_break_start.take() {
                    break_secs += (ev.timestamp() - start).num_seconds();
                }
            }
        }
    }

    (work_secs, break_secs)
}
