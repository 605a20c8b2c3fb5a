use chrono::NaiveDateTime;

/// Derived punch state of a worker, recomputed on demand from the latest
/// event. Never persisted or cached beyond a single query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplicationState {
    pub is_clocked_in: bool,
    pub is_in_break: bool,
    pub break_start_time: Option<NaiveDateTime>,
}

impl ApplicationState {
    /// State of a worker with no recorded events.
    pub fn clocked_out() -> Self {
        Self::default()
    }
}
