//! Status reconstruction: the worker's current punch state derived from
//! the single most recent event, never from a full history scan. A stray
//! "Pause Ende" with no matching start therefore reads as "working, not
//! on break".

use crate::errors::AppResult;
use crate::models::event::WorkerId;
use crate::models::state::ApplicationState;
use crate::models::status::EventStatus;
use crate::store::EventStore;

pub fn current_state(store: &mut dyn EventStore, worker: &WorkerId) -> AppResult<ApplicationState> {
    let latest = store.query_latest(worker)?;

    let state = match latest {
        None => ApplicationState::clocked_out(),
        Some(ev) => match ev.status {
            EventStatus::ClockIn => ApplicationState {
                is_clocked_in: true,
                is_in_break: false,
                break_start_time: None,
            },
            EventStatus::BreakStart => ApplicationState {
                is_clocked_in: true,
                is_in_break: true,
                break_start_time: Some(ev.timestamp()),
            },
            EventStatus::BreakEnd => ApplicationState {
                is_clocked_in: true,
                is_in_break: false,
                break_start_time: None,
            },
            EventStatus::ClockOut => ApplicationState::clocked_out(),
        },
    };

    Ok(state)
}
