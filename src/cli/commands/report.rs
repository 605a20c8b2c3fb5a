use crate::cli::commands::resolve_worker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::weekly_summaries;
use crate::core::day_overview::month_overview;
use crate::errors::{AppError, AppResult};
use crate::export::{ensure_writable, export_monthly_pdf};
use crate::models::summary::MonthlyTotals;
use crate::store::open_store;
use crate::ui::messages::{info, warning};
use crate::utils::date::{month_name, parse_year_month};
use crate::utils::formatting::format_hours;
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Report {
        month,
        first_name,
        last_name,
        pdf,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let (year, month_num) = parse_year_month(month)
        .ok_or_else(|| AppError::InvalidDate(format!("expected YYYY-MM, got '{month}'")))?;

    let mut store = open_store(cfg)?;
    let worker = resolve_worker(store.as_mut(), first_name.as_ref(), last_name.as_ref())?;

    let weeks = weekly_summaries(store.as_mut(), &worker, year, month_num)?;

    if weeks.is_empty() {
        warning(format!(
            "No events for {} in {} {}.",
            worker,
            month_name(month_num),
            year
        ));
        return Ok(());
    }

    info(format!(
        "Weekly summary for {} - {} {}",
        worker,
        month_name(month_num),
        year
    ));

    let mut table = Table::new(&["Week", "Work (h)", "Break (h)", "Net (h)", "Overtime (h)"]);
    for w in &weeks {
        table.add_row(vec![
            w.week_number.to_string(),
            format_hours(w.work_hours),
            format_hours(w.break_hours),
            format_hours(w.net_hours),
            format_hours(w.overtime_hours),
        ]);
    }

    let totals = MonthlyTotals::from_weeks(&weeks);
    table.add_row(vec![
        "Total".to_string(),
        format_hours(totals.work_hours),
        format_hours(totals.break_hours),
        format_hours(totals.net_hours),
        format_hours(totals.overtime_hours),
    ]);

    print!("{}", table.render());

    if let Some(file) = pdf {
        let path = Path::new(file);
        ensure_writable(path, *force)?;

        let days = month_overview(store.as_mut(), &worker, year, month_num)?;
        export_monthly_pdf(&worker, year, month_num, &days, &weeks, path)?;
    }

    Ok(())
}
