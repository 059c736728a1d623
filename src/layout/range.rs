//! Mapping of dates and date ranges onto pixel positions along the
//! timeline axis.
//!
//! A date maps to a fraction of one period cell; a range maps to one box
//! segment per period it overlaps, classified four ways: fully inside the
//! period, started earlier, ending later, or spanning it completely.

use chrono::{Datelike, NaiveDate};

use super::period::days_in_month;
use super::types::{PeriodLayout, Rect};
use crate::ir::TimelineMode;

/// Horizontal fraction of the period cell at which `date` sits. Defined
/// for any `date` inside the period's bounds; result is in `[0, 1]`.
pub fn fraction_within_period(mode: TimelineMode, date: NaiveDate, period: &PeriodLayout) -> f32 {
    match mode {
        TimelineMode::Week => date.weekday().number_from_monday() as f32 / 7.0,
        TimelineMode::Month => {
            date.day() as f32 / days_in_month(date.year(), date.month()) as f32
        }
        TimelineMode::Quarter => (date.month() - period.start.month()) as f32 / 3.0,
        TimelineMode::HalfYear => (date.month() - period.start.month()) as f32 / 6.0,
        TimelineMode::Year => date.month() as f32 / 12.0,
    }
}

/// Pixel x of a single date, or `None` when no period contains it. Out of
/// range is a normal outcome, not an error.
pub fn point_position(periods: &[PeriodLayout], mode: TimelineMode, date: NaiveDate) -> Option<f32> {
    let period = periods.iter().find(|p| p.start <= date && date <= p.end)?;
    Some(period.rect.x + period.rect.width * fraction_within_period(mode, date, period))
}

/// One clipped piece of a task bar, produced per overlapped period. Every
/// segment is widened by 1px so adjacent segments visually abut. An
/// inverted range produces no segments, keeping every emitted width
/// non-negative.
pub fn range_segments(
    periods: &[PeriodLayout],
    mode: TimelineMode,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<(f32, f32)> {
    if end < start {
        return Vec::new();
    }
    let mut segments = Vec::new();
    for period in periods {
        let cell = period.rect;
        let begins_here = start >= period.start && start <= period.end;
        let ends_here = end >= period.start && end <= period.end;
        let begins_past = start < period.start;
        let ends_future = end > period.end;

        let (x, width) = if begins_here && ends_here {
            let from = fraction_within_period(mode, start, period);
            let to = fraction_within_period(mode, end, period);
            (cell.x + cell.width * from, cell.width * (to - from))
        } else if begins_past && ends_here {
            (cell.x, cell.width * fraction_within_period(mode, end, period))
        } else if begins_here && ends_future {
            let from = fraction_within_period(mode, start, period);
            (cell.x + cell.width * from, cell.width * (1.0 - from))
        } else if begins_past && ends_future {
            (cell.x, cell.width)
        } else {
            continue;
        };
        segments.push((x, width + 1.0));
    }
    segments
}

/// Pixel x range of the union of a task's segments, used to centre its
/// single text anchor.
pub fn segments_union(segments: &[(f32, f32)]) -> Option<(f32, f32)> {
    let (first_x, _) = segments.first()?;
    let (last_x, last_w) = segments.last()?;
    Some((*first_x, last_x + last_w))
}

/// Convenience for building the per-row rectangles out of raw segments.
pub fn segments_to_rects(segments: &[(f32, f32)], y: f32, height: f32) -> Vec<Rect> {
    segments
        .iter()
        .map(|&(x, width)| Rect::new(x, y, width, height))
        .collect()
}
