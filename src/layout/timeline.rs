//! Pixel layout of the timeline strip: equal-width period cells plus the
//! year header row grouping them by calendar year.

use crate::config::LayoutConfig;
use crate::ir::{TimelineMode, TimelineSpec};

use super::period::period_info;
use super::types::{PeriodLayout, Rect, TimelineGeometry, YearHeaderLayout};

/// Horizontal split of the drawing surface: group column x/width and
/// timeline x/width. Shared by timeline and group layout so both agree.
pub(super) fn horizontal_split(surface_width: f32, config: &LayoutConfig) -> (f32, f32) {
    let usable = surface_width - config.left_margin - config.right_margin - config.group_gap;
    let group_column = usable * config.group_column_percentage;
    let timeline_x = config.left_margin + group_column + config.group_gap;
    let timeline_width = usable * (1.0 - config.group_column_percentage);
    (timeline_x, timeline_width)
}

/// Lays out the ordered period cells and year headers starting at
/// `cursor_y`; returns the geometry and the advanced cursor.
pub(super) fn compute_timeline(
    spec: &TimelineSpec,
    surface_width: f32,
    config: &LayoutConfig,
    cursor_y: f32,
) -> (TimelineGeometry, f32) {
    let (timeline_x, timeline_width) = horizontal_split(surface_width, config);
    let period_width = timeline_width / spec.items as f32;

    let has_header_row = spec.mode != TimelineMode::Year && !spec.generic_labels;
    let header_y = cursor_y;
    let period_y = if has_header_row {
        cursor_y + config.year_header_height
    } else {
        cursor_y
    };

    let periods: Vec<PeriodLayout> = (0..spec.items)
        .map(|i| {
            let info = period_info(
                spec.mode,
                spec.start,
                i,
                spec.generic_labels,
                spec.show_first_day,
            );
            PeriodLayout {
                index: i,
                label: info.label,
                group_key: info.group_key,
                start: info.start,
                end: info.end,
                rect: Rect::new(
                    timeline_x + i as f32 * period_width,
                    period_y,
                    period_width - config.period_gap,
                    config.period_row_height,
                ),
            }
        })
        .collect();

    let year_headers = if has_header_row {
        year_headers(&periods, header_y, config.year_header_height)
    } else {
        Vec::new()
    };

    let cursor = period_y + config.period_row_height + config.timeline_gap;

    let geometry = TimelineGeometry {
        mode: spec.mode,
        x: timeline_x,
        width: timeline_width,
        top: cursor_y,
        year_headers,
        periods,
        year_style: spec.year_style.clone(),
        period_style: spec.period_style.clone(),
    };
    (geometry, cursor)
}

/// One header cell per run of consecutive periods sharing a calendar year,
/// spanning from the first cell's left edge to the last cell's right edge.
fn year_headers(periods: &[PeriodLayout], y: f32, height: f32) -> Vec<YearHeaderLayout> {
    let mut headers: Vec<YearHeaderLayout> = Vec::new();
    for period in periods {
        match headers.last_mut() {
            Some(header) if header.year == period.group_key => {
                header.rect.width = period.rect.right() - header.rect.x;
            }
            _ => headers.push(YearHeaderLayout {
                year: period.group_key,
                label: period.group_key.to_string(),
                rect: Rect::new(period.rect.x, y, period.rect.width, height),
            }),
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::theme::Theme;

    fn spec(mode: TimelineMode, start: (i32, u32, u32), items: usize) -> TimelineSpec {
        let theme = Theme::default_theme();
        TimelineSpec {
            mode,
            start: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            items,
            generic_labels: false,
            show_first_day: false,
            year_style: theme.year_header,
            period_style: theme.period,
        }
    }

    #[test]
    fn period_widths_tile_the_timeline() {
        let config = LayoutConfig::default();
        let (tl, _) = compute_timeline(&spec(TimelineMode::Month, (2023, 1, 1), 12), 1200.0, &config, 40.0);
        let (x, width) = horizontal_split(1200.0, &config);
        assert_eq!(tl.x, x);
        assert_eq!(tl.periods.len(), 12);
        let cell = width / 12.0;
        for (i, p) in tl.periods.iter().enumerate() {
            assert!((p.rect.x - (x + i as f32 * cell)).abs() < 1e-3);
            assert!((p.rect.width - (cell - config.period_gap)).abs() < 1e-3);
        }
        let last = tl.periods.last().unwrap();
        assert!((last.rect.right() + config.period_gap - (x + width)).abs() < 0.5);
    }

    #[test]
    fn year_headers_span_their_periods() {
        let config = LayoutConfig::default();
        // Oct 2023 .. Mar 2024: 3 months in each year.
        let (tl, _) = compute_timeline(&spec(TimelineMode::Month, (2023, 10, 1), 6), 1200.0, &config, 40.0);
        assert_eq!(tl.year_headers.len(), 2);
        assert_eq!(tl.year_headers[0].year, 2023);
        assert_eq!(tl.year_headers[1].year, 2024);
        assert_eq!(tl.year_headers[0].rect.x, tl.periods[0].rect.x);
        assert!(
            (tl.year_headers[0].rect.right() - tl.periods[2].rect.right()).abs() < 1e-3
        );
        assert_eq!(tl.year_headers[1].rect.x, tl.periods[3].rect.x);
    }

    #[test]
    fn yearly_mode_has_no_header_row() {
        let config = LayoutConfig::default();
        let (tl, cursor) = compute_timeline(&spec(TimelineMode::Year, (2023, 1, 1), 3), 1200.0, &config, 40.0);
        assert!(tl.year_headers.is_empty());
        assert_eq!(tl.periods[0].rect.y, 40.0);
        assert_eq!(
            cursor,
            40.0 + config.period_row_height + config.timeline_gap
        );
    }

    #[test]
    fn header_row_advances_the_cursor() {
        let config = LayoutConfig::default();
        let (tl, cursor) = compute_timeline(&spec(TimelineMode::Month, (2023, 1, 1), 6), 1200.0, &config, 40.0);
        assert_eq!(tl.periods[0].rect.y, 40.0 + config.year_header_height);
        assert_eq!(
            cursor,
            40.0 + config.year_header_height + config.period_row_height + config.timeline_gap
        );
    }
}
