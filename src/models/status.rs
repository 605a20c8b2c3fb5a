use serde::Serialize;

/// The four punch states recorded in the log.
///
/// The database keeps the legacy German strings (`Ein`, `Aus`,
/// `Pause Start`, `Pause Ende`) so existing data stays readable.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventStatus {
    ClockIn,
    ClockOut,
    BreakStart,
    BreakEnd,
}

impl EventStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventStatus::ClockIn => "Ein",
            EventStatus::ClockOut => "Aus",
            EventStatus::BreakStart => "Pause Start",
            EventStatus::BreakEnd => "Pause Ende",
        }
    }

    /// Convert DB string → enum.
    ///
    /// Older databases stored the break duration inside the status text
    /// ("Pause Ende (30 Min.)"), so anything starting with "Pause Ende"
    /// still counts as a break end.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Ein" => Some(EventStatus::ClockIn),
            "Aus" => Some(EventStatus::ClockOut),
            "Pause Start" => Some(EventStatus::BreakStart),
            "Pause Ende" => Some(EventStatus::BreakEnd),
            other if other.starts_with("Pause Ende") => Some(EventStatus::BreakEnd),
            _ => None,
        }
    }

    pub fn is_clock_in(&self) -> bool {
        matches!(self, EventStatus::ClockIn)
    }

    pub fn is_clock_out(&self) -> bool {
        matches!(self, EventStatus::ClockOut)
    }

    pub fn is_break_start(&self) -> bool {
        matches!(self, EventStatus::BreakStart)
    }

    pub fn is_break_end(&self) -> bool {
        matches!(self, EventStatus::BreakEnd)
    }
}
