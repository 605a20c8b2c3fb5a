use serde::Serialize;

/// Aggregated work time of one ISO calendar week.
///
/// All fields are real-valued hours; rounding happens only at the
/// presentation boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub week_number: u32,
    pub work_hours: f64,
    pub break_hours: f64,
    pub net_hours: f64,
    pub overtime_hours: f64,
}

/// Elementwise sum over a month's weekly summaries. Computed by callers
/// (CLI table, PDF report), not by the aggregator itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MonthlyTotals {
    pub work_hours: f64,
    pub break_hours: f64,
    pub net_hours: f64,
    pub overtime_hours: f64,
}

impl MonthlyTotals {
    pub fn from_weeks(weeks: &[WeeklySummary]) -> Self {
        let mut totals = Self::default();
        for w in weeks {
            totals.work_hours += w.work_hours;
            totals.break_hours += w.break_hours;
            totals.net_hours += w.net_hours;
            totals.overtime_hours += w.overtime_hours;
        }
        totals
    }
}
