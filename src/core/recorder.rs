//! Write path of the punch log: validates and appends clock and break
//! events. Each write is a single append; state preconditions (such as
//! "already clocked in") are the caller's job via the status module.

use crate::errors::{AppError, AppResult};
use crate::models::event::{TimeEvent, WorkerId};
use crate::models::status::EventStatus;
use crate::store::EventStore;
use crate::utils::time::{UNKNOWN_DURATION, format_break_duration, minutes_between};
use chrono::{Local, NaiveDateTime, Timelike};

/// Current local wall-clock time, truncated to whole seconds (the log
/// stores HH:MM:SS).
fn now_local() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

pub fn clock_in(store: &mut dyn EventStore, worker: &WorkerId) -> AppResult<TimeEvent> {
    clock_in_at(store, worker, now_local())
}

/// Append a clock-in at an explicit timestamp. Fails when either name is
/// blank; does not check prior state.
pub fn clock_in_at(
    store: &mut dyn EventStore,
    worker: &WorkerId,
    now: NaiveDateTime,
) -> AppResult<TimeEvent> {
    if worker.is_blank() {
        return Err(AppError::Validation(
            "first and last name must not be empty".into(),
        ));
    }

    let event = TimeEvent::new(worker, now, EventStatus::ClockIn);
    store.append(&event)?;
    Ok(event)
}

pub fn clock_out(store: &mut dyn EventStore, worker: &WorkerId) -> AppResult<TimeEvent> {
    clock_out_at(store, worker, now_local())
}

pub fn clock_out_at(
    store: &mut dyn EventStore,
    worker: &WorkerId,
    now: NaiveDateTime,
) -> AppResult<TimeEvent> {
    let event = TimeEvent::new(worker, now, EventStatus::ClockOut);
    store.append(&event)?;
    Ok(event)
}

pub fn break_start(store: &mut dyn EventStore, worker: &WorkerId) -> AppResult<TimeEvent> {
    break_start_at(store, worker, now_local())
}

pub fn break_start_at(
    store: &mut dyn EventStore,
    worker: &WorkerId,
    now: NaiveDateTime,
) -> AppResult<TimeEvent> {
    let event = TimeEvent::new(worker, now, EventStatus::BreakStart);
    store.append(&event)?;
    Ok(event)
}

pub fn break_end(store: &mut dyn EventStore, worker: &WorkerId) -> AppResult<TimeEvent> {
    break_end_at(store, worker, now_local())
}

/// Append a break-end. The worker's most recent event must be a break
/// start; its timestamp yields the recorded duration. Appends nothing
/// when there is no active break.
pub fn break_end_at(
    store: &mut dyn EventStore,
    worker: &WorkerId,
    now: NaiveDateTime,
) -> AppResult<TimeEvent> {
    let latest = store.query_latest(worker)?;

    let start = match latest {
        Some(ev) if ev.status.is_break_start() => ev,
        _ => return Err(AppError::NoActiveBreak(worker.to_string())),
    };

    let minutes = minutes_between(start.timestamp(), now);
    let duration = if minutes >= 0 {
        format_break_duration(minutes)
    } else {
        UNKNOWN_DURATION.to_string()
    };

    let mut event = TimeEvent::new(worker, now, EventStatus::BreakEnd);
    event.break_duration = Some(duration);
    store.append(&event)?;
    Ok(event)
}
