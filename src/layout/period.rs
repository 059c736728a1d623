//! Calendar arithmetic for timeline periods: given a mode, a start date and
//! a cell index, produce the cell's label, year grouping key and inclusive
//! date bounds.

use chrono::{Datelike, Duration, NaiveDate};

use crate::ir::TimelineMode;

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodInfo {
    pub label: String,
    pub group_key: i32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    last_day_of_month(year, month).day()
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // The first of every month exists, so these unwraps cannot fire.
    NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap() - Duration::days(1)
}

/// Monday of the ISO week containing `date`.
pub fn iso_week_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn add_months(year: i32, month: u32, delta: u32) -> (i32, u32) {
    let total = (month - 1) + delta;
    (year + (total / 12) as i32, total % 12 + 1)
}

/// Inclusive `[start, end]` calendar bounds of the period `index` cells
/// after the one containing `start_date`.
pub fn period_bounds(
    mode: TimelineMode,
    start_date: NaiveDate,
    index: usize,
) -> (NaiveDate, NaiveDate) {
    let index = index as u32;
    match mode {
        TimelineMode::Week => {
            let monday = iso_week_monday(start_date) + Duration::weeks(index as i64);
            (monday, monday + Duration::days(6))
        }
        TimelineMode::Month => {
            let (year, month) = add_months(start_date.year(), start_date.month(), index);
            (
                NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
                last_day_of_month(year, month),
            )
        }
        TimelineMode::Quarter => {
            let quarter_first = (start_date.month() - 1) / 3 * 3 + 1;
            let (year, month) = add_months(start_date.year(), quarter_first, index * 3);
            (
                NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
                last_day_of_month(year, month + 2),
            )
        }
        TimelineMode::HalfYear => {
            let half_first = if start_date.month() <= 6 { 1 } else { 7 };
            let (year, month) = add_months(start_date.year(), half_first, index * 6);
            (
                NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
                last_day_of_month(year, month + 5),
            )
        }
        TimelineMode::Year => {
            let year = start_date.year() + index as i32;
            (
                NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
            )
        }
    }
}

/// Label, grouping key and bounds for one cell. Generic labels substitute a
/// sequence number but keep the real date bounds, which the positioning
/// math still needs.
pub fn period_info(
    mode: TimelineMode,
    start_date: NaiveDate,
    index: usize,
    generic_labels: bool,
    show_first_day: bool,
) -> PeriodInfo {
    let (start, end) = period_bounds(mode, start_date, index);
    let group_key = start.year();
    let label = if generic_labels {
        let noun = match mode {
            TimelineMode::Week => "Week",
            TimelineMode::Month => "Month",
            TimelineMode::Quarter => "Quarter",
            TimelineMode::HalfYear => "Half",
            TimelineMode::Year => "Year",
        };
        format!("{noun} {}", index + 1)
    } else {
        match mode {
            TimelineMode::Week => {
                let week = start.iso_week().week();
                if show_first_day {
                    format!("W{week:02} {}", start.day())
                } else {
                    format!("W{week:02}")
                }
            }
            TimelineMode::Month => MONTH_ABBREV[start.month0() as usize].to_string(),
            TimelineMode::Quarter => format!("Q{}", (start.month() - 1) / 3 + 1),
            TimelineMode::HalfYear => format!("H{}", if start.month() <= 6 { 1 } else { 2 }),
            TimelineMode::Year => start.year().to_string(),
        }
    };
    PeriodInfo {
        label,
        group_key,
        start,
        end,
    }
}
