//! Two-phase "today" marker. Phase 1 pins the label and line x while the
//! timeline is being laid out; phase 2 closes the line just above the
//! footer once every group has claimed its vertical room. Splitting the
//! phases into separate types keeps a half-finished marker unrepresentable.

use chrono::NaiveDate;

use crate::config::LayoutConfig;
use crate::text_metrics::TextMeasurer;
use crate::theme::MarkerStyle;

use super::range::point_position;
use super::types::{MarkerLayout, Point, TextLayout, TimelineGeometry};

/// Marker with a fixed horizontal position and an open-ended line.
#[derive(Debug, Clone)]
pub(super) struct PendingMarker {
    label: TextLayout,
    line_x: f32,
    line_top: f32,
    style: MarkerStyle,
}

/// Phase 1: locate today's period and pin the label. `None` when today is
/// outside the covered range, which suppresses the marker entirely.
pub(super) fn place_label(
    today: NaiveDate,
    timeline: &TimelineGeometry,
    style: &MarkerStyle,
    measurer: &dyn TextMeasurer,
) -> Option<PendingMarker> {
    let x = point_position(&timeline.periods, timeline.mode, today)?;
    let size = measurer.measure("Today", &style.text.font_family, style.text.font_size);
    let label = TextLayout {
        text: "Today".to_string(),
        anchor: Point {
            x: x - size.width / 2.0,
            y: timeline.top - size.height,
        },
        width: size.width,
        height: size.height,
        style: style.text.clone(),
    };
    Some(PendingMarker {
        label,
        line_x: x,
        line_top: timeline.top,
        style: style.clone(),
    })
}

/// Phase 2: close the line just above the footer. Consumes the pending
/// marker; must run after group layout and before the footer is placed.
pub(super) fn finalize_line(
    pending: PendingMarker,
    footer_y: f32,
    config: &LayoutConfig,
) -> MarkerLayout {
    MarkerLayout {
        label: pending.label,
        line_from: Point {
            x: pending.line_x,
            y: pending.line_top,
        },
        line_to: Point {
            x: pending.line_x,
            y: footer_y - config.marker_clearance,
        },
        style: pending.style,
    }
}
