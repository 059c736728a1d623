use chrono::NaiveDate;

use crate::ir::TimelineMode;
use crate::theme::{BarStyle, MarkerStyle, MilestoneStyle, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// One timeline cell with its calendar bounds and pixel box.
#[derive(Debug, Clone)]
pub struct PeriodLayout {
    pub index: usize,
    pub label: String,
    /// Calendar year used to build year-group headers.
    pub group_key: i32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub rect: Rect,
}

/// Header cell spanning every period of one calendar year.
#[derive(Debug, Clone)]
pub struct YearHeaderLayout {
    pub year: i32,
    pub label: String,
    pub rect: Rect,
}

#[derive(Debug, Clone)]
pub struct TimelineGeometry {
    pub mode: TimelineMode,
    /// Left edge of the period cells (right of the group column).
    pub x: f32,
    pub width: f32,
    /// Top of the timeline block (year header row if present).
    pub top: f32,
    pub year_headers: Vec<YearHeaderLayout>,
    pub periods: Vec<PeriodLayout>,
    pub year_style: BarStyle,
    pub period_style: BarStyle,
}

impl TimelineGeometry {
    /// First and last calendar day covered by the visible window.
    pub fn covered_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.periods.first()?;
        let last = self.periods.last()?;
        Some((first.start, last.end))
    }
}

/// A measured, positioned run of text.
#[derive(Debug, Clone)]
pub struct TextLayout {
    pub text: String,
    /// Top-left of the text box.
    pub anchor: Point,
    pub width: f32,
    pub height: f32,
    pub style: TextStyle,
}

#[derive(Debug, Clone)]
pub struct MilestoneLayout {
    pub text: String,
    pub diamond: Rect,
    pub text_anchor: Point,
    pub style: MilestoneStyle,
}

/// A task bar, clipped per period: one box segment per overlapped period.
/// Zero segments means the task lies entirely outside the visible window.
#[derive(Debug, Clone)]
pub struct TaskLayout {
    pub text: String,
    pub boxes: Vec<Rect>,
    /// Centred over the union of the segments; absent when out of range.
    pub text_anchor: Option<Point>,
    pub milestones: Vec<MilestoneLayout>,
    pub parallel_tasks: Vec<TaskLayout>,
    pub style: BarStyle,
}

#[derive(Debug, Clone)]
pub struct GroupLayout {
    pub text: String,
    pub rect: Rect,
    pub text_anchor: Point,
    pub tasks: Vec<TaskLayout>,
    pub style: BarStyle,
}

/// The "today" indicator. Only ever constructed when today falls inside
/// the timeline's covered range.
#[derive(Debug, Clone)]
pub struct MarkerLayout {
    pub label: TextLayout,
    pub line_from: Point,
    pub line_to: Point,
    pub style: MarkerStyle,
}

#[derive(Debug, Clone)]
pub struct LogoLayout {
    pub rect: Rect,
}

/// Complete geometry for one roadmap, ready to hand to a renderer.
#[derive(Debug, Clone)]
pub struct RoadmapLayout {
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub title: TextLayout,
    pub subtitle: Option<TextLayout>,
    pub timeline: TimelineGeometry,
    pub groups: Vec<GroupLayout>,
    pub marker: Option<MarkerLayout>,
    pub footer: Option<TextLayout>,
    pub logo: Option<LogoLayout>,
}
