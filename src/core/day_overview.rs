//! Per-day begin/end/break rows for one month, as consumed by the
//! monthly report: first clock-in of the day as begin, last clock-out as
//! end, each break start/end pair as one interval.

use crate::errors::AppResult;
use crate::models::event::{TimeEvent, WorkerId};
use crate::models::status::EventStatus;
use crate::store::EventStore;
use crate::utils::date::{all_days_of_month, weekday_short_de};
use chrono::{Datelike, NaiveDate, NaiveTime};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct BreakInterval {
    pub start: NaiveTime,
    pub end: Option<NaiveTime>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayOverview {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub begin: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub breaks: Vec<BreakInterval>,
    /// end − begin − closed breaks, when both day bounds exist.
    pub net_minutes: Option<i64>,
}

/// One row per calendar day of the month, empty days included.
pub fn month_overview(
    store: &mut dyn EventStore,
    worker: &WorkerId,
    year: i32,
    month: u32,
) -> AppResult<Vec<DayOverview>> {
    let mut events = store.query(Some(worker))?;
    events.retain(|ev| ev.date.year() == year && ev.date.month() == month);
    events.reverse(); // oldest first for the day replay

    let mut days: HashMap<NaiveDate, Vec<&TimeEvent>> = HashMap::new();
    for ev in &events {
        days.entry(ev.date).or_default().push(ev);
    }

    let overview = all_days_of_month(year, month)
        .into_iter()
        .map(|date| build_day(date, days.get(&date).map_or(&[][..], Vec::as_slice)))
        .collect();

    Ok(overview)
}

fn build_day(date: NaiveDate, events: &[&TimeEvent]) -> DayOverview {
    let mut begin: Option<NaiveTime> = None;
    let mut end: Option<NaiveTime> = None;
    let mut breaks: Vec<BreakInterval> = Vec::new();

    for ev in events {
        match ev.status {
            EventStatus::ClockIn => {
                if begin.is_none() {
                    begin = Some(ev.time);
                }
            }
            EventStatus::ClockOut => end = Some(ev.time),
            EventStatus::BreakStart => breaks.push(BreakInterval {
                start: ev.time,
                end: None,
            }),
            EventStatus::BreakEnd => {
                if let Some(open) = breaks.last_mut()
                    && open.end.is_none()
                {
                    open.end = Some(ev.time);
                }
            }
        }
    }

    let net_minutes = match (begin, end) {
        (Some(b), Some(e)) => {
            let break_mins: i64 = breaks
                .iter()
                .filter_map(|p| p.end.map(|pe| (pe - p.start).num_minutes()))
                .sum();
            Some((e - b).num_minutes() - break_mins)
        }
        _ => None,
    };

    DayOverview {
        date,
        weekday: weekday_short_de(date),
        begin,
        end,
        breaks,
        net_minutes,
    }
}
