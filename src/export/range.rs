//! Period expressions for export filters: `YYYY`, `YYYY-MM`,
//! `YYYY-MM-DD`, or a `start:end` pair of either.

use crate::errors::{AppError, AppResult};
use crate::utils::date::{all_days_of_month, parse_date};
use chrono::{Datelike, NaiveDate};

/// Inclusive date bounds of one period expression.
fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        let days = all_days_of_month(first.year(), first.month());
        if let (Some(start), Some(end)) = (days.first(), days.last()) {
            return Ok((*start, *end));
        }
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>()
        && let (Some(start), Some(end)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((start, end));
    }

    Err(AppError::InvalidDate(format!("invalid period: {p}")))
}

/// Parse a range filter: a single period, or `start:end` where the
/// result spans from the start of the first to the end of the second.
pub fn parse_range(range: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match range.split_once(':') {
        Some((a, b)) => {
            let (start, _) = parse_period(a)?;
            let (_, end) = parse_period(b)?;
            Ok((start, end))
        }
        None => parse_period(range),
    }
}
