//! The single layout pass. Components run in a fixed order - logo (top),
//! title, subtitle, timeline, groups, marker finalization, footer, logo
//! (bottom) - threading one [`LayoutCursor`] value through each step so the
//! ordering is a data dependency rather than a convention.

mod hierarchy;
mod marker;
pub mod period;
pub mod range;
mod timeline;
pub mod types;

pub use types::*;

use crate::align::aligned_x;
use crate::error::{LayoutError, Result};
use crate::ir::LogoPlacement;
use crate::roadmap::{LabelSpec, Roadmap};
use crate::text_metrics::TextMeasurer;

/// The running "next free y" value. Only ever moves down.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutCursor {
    y: f32,
}

impl LayoutCursor {
    fn new(top: f32) -> Self {
        Self { y: top }
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn advance(&mut self, delta: f32) {
        debug_assert!(delta >= 0.0, "cursor may only move down");
        self.y += delta;
    }

    fn advance_to(&mut self, y: f32) {
        debug_assert!(y >= self.y, "cursor may only move down");
        self.y = y;
    }
}

/// Runs the full layout pass over a roadmap. Fails if the title or the
/// timeline was never set; everything else degrades to empty geometry.
pub fn compute_layout(roadmap: &Roadmap, measurer: &dyn TextMeasurer) -> Result<RoadmapLayout> {
    let config = &roadmap.config;
    let title_spec = roadmap.title.as_ref().ok_or(LayoutError::MissingTitle)?;
    let timeline_spec = roadmap
        .timeline
        .as_ref()
        .ok_or(LayoutError::MissingTimeline)?;

    let width = roadmap.width;
    let span_x = config.left_margin;
    let span_width = width - config.left_margin - config.right_margin;
    let mut cursor = LayoutCursor::new(config.top_margin);

    let mut logo = None;
    if let Some(spec) = &roadmap.logo {
        if spec.placement == LogoPlacement::Top {
            let x = aligned_x(span_x, span_width, spec.width, spec.alignment);
            logo = Some(LogoLayout {
                rect: Rect::new(x, cursor.y(), spec.width, spec.height),
            });
            cursor.advance(spec.height + config.logo_gap);
        }
    }

    let title = place_text(title_spec, span_x, span_width, cursor.y(), measurer);
    cursor.advance(title.height + config.title_gap);

    let subtitle = roadmap.subtitle.as_ref().map(|spec| {
        let text = place_text(spec, span_x, span_width, cursor.y(), measurer);
        cursor.advance(text.height + config.subtitle_gap);
        text
    });

    let (timeline, after_timeline) =
        timeline::compute_timeline(timeline_spec, width, config, cursor.y());
    cursor.advance_to(after_timeline);

    // Marker phase 1: the horizontal position is known as soon as the
    // period cells are; the line stays open until the groups are done.
    let pending_marker = marker::place_label(
        roadmap.effective_today(),
        &timeline,
        &roadmap.theme.marker,
        measurer,
    );

    let mut groups = Vec::with_capacity(roadmap.groups.len());
    for group in &roadmap.groups {
        let (layout, next_y) =
            hierarchy::layout_group(group, &timeline, config, measurer, cursor.y());
        cursor.advance_to(next_y);
        groups.push(layout);
    }

    // Marker phase 2 must land between group layout and footer placement:
    // the line's end depends on where the footer will start.
    let footer_y = cursor.y() + config.footer_gap;
    let marker = pending_marker.map(|pending| marker::finalize_line(pending, footer_y, config));

    let footer = roadmap.footer.as_ref().map(|spec| {
        cursor.advance_to(footer_y);
        let text = place_text(spec, span_x, span_width, cursor.y(), measurer);
        cursor.advance(text.height);
        text
    });

    if let Some(spec) = &roadmap.logo {
        if spec.placement == LogoPlacement::Bottom {
            cursor.advance(config.logo_gap);
            let x = aligned_x(span_x, span_width, spec.width, spec.alignment);
            logo = Some(LogoLayout {
                rect: Rect::new(x, cursor.y(), spec.width, spec.height),
            });
            cursor.advance(spec.height);
        }
    }

    let height = if roadmap.auto_height {
        cursor.y() + config.bottom_margin
    } else {
        roadmap.fixed_height
    };

    Ok(RoadmapLayout {
        width,
        height,
        background: roadmap.theme.background.clone(),
        title,
        subtitle,
        timeline,
        groups,
        marker,
        footer,
        logo,
    })
}

fn place_text(
    spec: &LabelSpec,
    span_x: f32,
    span_width: f32,
    y: f32,
    measurer: &dyn TextMeasurer,
) -> TextLayout {
    let size = measurer.measure(&spec.text, &spec.style.font_family, spec.style.font_size);
    TextLayout {
        text: spec.text.clone(),
        anchor: Point {
            x: aligned_x(span_x, span_width, size.width, spec.alignment),
            y,
        },
        width: size.width,
        height: size.height,
        style: spec.style.clone(),
    }
}
