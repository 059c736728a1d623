//! Rendering capability boundary. The engine computes geometry and walks
//! it in paint order, emitting fire-and-forget primitive calls on a
//! host-supplied [`Renderer`]. No rasterization happens here.

use std::path::Path;

use crate::layout::types::{Point, Rect, RoadmapLayout, TaskLayout};
use crate::theme::TextStyle;

/// Drawing capability the host supplies. Calls return nothing; the engine
/// never inspects drawing results.
pub trait Renderer {
    fn draw_rect(&mut self, rect: Rect, fill: &str);
    fn draw_diamond(&mut self, rect: Rect, fill: &str);
    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle);
    fn draw_line(&mut self, from: Point, to: Point, color: &str);
    fn save_output(&mut self, target: &Path);
}

/// Walks a computed layout in paint order: background, title block,
/// timeline rows, groups with their tasks and milestones, marker, footer.
/// The logo box is host-drawn (there is no image primitive); its reserved
/// rectangle is available on the layout.
pub fn render(layout: &RoadmapLayout, renderer: &mut dyn Renderer) {
    renderer.draw_rect(
        Rect::new(0.0, 0.0, layout.width, layout.height),
        &layout.background,
    );
    renderer.draw_text(&layout.title.text, layout.title.anchor, &layout.title.style);
    if let Some(subtitle) = &layout.subtitle {
        renderer.draw_text(&subtitle.text, subtitle.anchor, &subtitle.style);
    }

    for header in &layout.timeline.year_headers {
        renderer.draw_rect(header.rect, &layout.timeline.year_style.fill);
        renderer.draw_text(
            &header.label,
            header.rect.center(),
            &layout.timeline.year_style.text,
        );
    }
    for period in &layout.timeline.periods {
        renderer.draw_rect(period.rect, &layout.timeline.period_style.fill);
        renderer.draw_text(
            &period.label,
            period.rect.center(),
            &layout.timeline.period_style.text,
        );
    }

    for group in &layout.groups {
        if group.rect.height > 0.0 {
            renderer.draw_rect(group.rect, &group.style.fill);
            renderer.draw_text(&group.text, group.text_anchor, &group.style.text);
        }
        for task in &group.tasks {
            render_task(task, renderer);
        }
    }

    if let Some(marker) = &layout.marker {
        renderer.draw_text(&marker.label.text, marker.label.anchor, &marker.label.style);
        renderer.draw_line(marker.line_from, marker.line_to, &marker.style.line_color);
    }

    if let Some(footer) = &layout.footer {
        renderer.draw_text(&footer.text, footer.anchor, &footer.style);
    }
}

fn render_task(task: &TaskLayout, renderer: &mut dyn Renderer) {
    for rect in &task.boxes {
        renderer.draw_rect(*rect, &task.style.fill);
    }
    if let Some(anchor) = task.text_anchor {
        renderer.draw_text(&task.text, anchor, &task.style.text);
    }
    for milestone in &task.milestones {
        renderer.draw_diamond(milestone.diamond, &milestone.style.fill);
        renderer.draw_text(&milestone.text, milestone.text_anchor, &milestone.style.text);
    }
    for parallel in &task.parallel_tasks {
        render_task(parallel, renderer);
    }
}

/// One recorded primitive call, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        rect: Rect,
        fill: String,
    },
    Diamond {
        rect: Rect,
        fill: String,
    },
    Text {
        text: String,
        anchor: Point,
        color: String,
    },
    Line {
        from: Point,
        to: Point,
        color: String,
    },
    Save {
        target: std::path::PathBuf,
    },
}

/// Renderer that records the primitive stream instead of drawing.
/// Useful for tests and for hosts that replay the stream elsewhere.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub ops: Vec<Primitive>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> impl Iterator<Item = &Primitive> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Primitive::Rect { .. }))
    }
}

impl Renderer for RecordingRenderer {
    fn draw_rect(&mut self, rect: Rect, fill: &str) {
        self.ops.push(Primitive::Rect {
            rect,
            fill: fill.to_string(),
        });
    }

    fn draw_diamond(&mut self, rect: Rect, fill: &str) {
        self.ops.push(Primitive::Diamond {
            rect,
            fill: fill.to_string(),
        });
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        self.ops.push(Primitive::Text {
            text: text.to_string(),
            anchor,
            color: style.color.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: &str) {
        self.ops.push(Primitive::Line {
            from,
            to,
            color: color.to_string(),
        });
    }

    fn save_output(&mut self, target: &Path) {
        self.ops.push(Primitive::Save {
            target: target.to_path_buf(),
        });
    }
}
