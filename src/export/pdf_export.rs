//! Monthly report PDF: one row per calendar day (begin, end, breaks,
//! hours), followed by the weekly overtime summary.

use crate::core::day_overview::DayOverview;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::event::WorkerId;
use crate::models::summary::{MonthlyTotals, WeeklySummary};
use crate::ui::messages::info;
use crate::utils::date::month_name;
use crate::utils::formatting::{format_hours, mins_to_hhmm};
use crate::utils::time::hhmm;
use std::io;
use std::path::Path;

const DAY_HEADERS: [&str; 6] = ["Datum", "Tag", "Beginn", "Ende", "Pausen", "Stunden"];
const WEEK_HEADERS: [&str; 5] = [
    "Woche",
    "Arbeit (h)",
    "Pause (h)",
    "Netto (h)",
    "Überstunden (h)",
];

fn day_row(day: &DayOverview) -> Vec<String> {
    let breaks = day
        .breaks
        .iter()
        .filter_map(|p| p.end.map(|e| format!("{}-{}", hhmm(p.start), hhmm(e))))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        day.date.format("%d.%m.%Y").to_string(),
        day.weekday.to_string(),
        day.begin.map(hhmm).unwrap_or_default(),
        day.end.map(hhmm).unwrap_or_default(),
        breaks,
        day.net_minutes.map(mins_to_hhmm).unwrap_or_default(),
    ]
}

fn week_row(week: &WeeklySummary) -> Vec<String> {
    vec![
        week.week_number.to_string(),
        format_hours(week.work_hours),
        format_hours(week.break_hours),
        format_hours(week.net_hours),
        format_hours(week.overtime_hours),
    ]
}

pub fn export_monthly_pdf(
    worker: &WorkerId,
    year: i32,
    month: u32,
    days: &[DayOverview],
    weeks: &[WeeklySummary],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let totals = MonthlyTotals::from_weeks(weeks);
    let title = format!(
        "Arbeitszeiterfassung - {} - {} {}",
        worker,
        month_name(month),
        year
    );

    let day_rows: Vec<Vec<String>> = days.iter().map(day_row).collect();

    let mut week_rows: Vec<Vec<String>> = weeks.iter().map(week_row).collect();
    week_rows.push(vec![
        "Gesamt".to_string(),
        format_hours(totals.work_hours),
        format_hours(totals.break_hours),
        format_hours(totals.net_hours),
        format_hours(totals.overtime_hours),
    ]);

    let overtime_line = format!(
        "Überstunden im {} {}: {} Stunden",
        month_name(month),
        year,
        format_hours(totals.overtime_hours)
    );

    let mut pdf = PdfManager::new();
    pdf.write_table(&title, &DAY_HEADERS, &day_rows, None);
    pdf.write_table(
        &format!("Wochenübersicht {} {}", month_name(month), year),
        &WEEK_HEADERS,
        &week_rows,
        Some(&overtime_line),
    );

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
