pub mod clock;
pub mod config;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod report;
pub mod status;

use crate::errors::{AppError, AppResult};
use crate::models::event::WorkerId;
use crate::store::EventStore;

/// Resolve the worker identity from CLI arguments, falling back to the
/// most recently recorded worker when both names are omitted.
pub(crate) fn resolve_worker(
    store: &mut dyn EventStore,
    first_name: Option<&String>,
    last_name: Option<&String>,
) -> AppResult<WorkerId> {
    match (first_name, last_name) {
        (Some(f), Some(l)) => Ok(WorkerId::new(f.clone(), l.clone())),
        (None, None) => store
            .query_latest_any()?
            .map(|ev| ev.worker())
            .ok_or_else(|| {
                AppError::Validation(
                    "no recorded worker to fall back to; pass FIRST_NAME and LAST_NAME".into(),
                )
            }),
        _ => Err(AppError::Validation(
            "pass both FIRST_NAME and LAST_NAME (or neither)".into(),
        )),
    }
}
