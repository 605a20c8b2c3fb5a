//! Formatting utilities used for CLI and export outputs.

/// Hours for display, rounded to two decimals. The core never rounds;
/// this is the presentation boundary.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Minutes as "HH:MM", e.g. 510 → "08:30". Negative values keep a sign.
pub fn mins_to_hhmm(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
