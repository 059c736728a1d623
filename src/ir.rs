//! Semantic input model for a roadmap: what the caller described, before
//! any pixel geometry exists. Built through the [`crate::Roadmap`] API.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::LayoutError;
use crate::theme::{BarStyle, MilestoneStyle};

/// Granularity of one timeline cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineMode {
    Week,
    Month,
    Quarter,
    HalfYear,
    Year,
}

impl FromStr for TimelineMode {
    type Err = LayoutError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_uppercase().as_str() {
            "W" | "WEEK" | "WEEKLY" => Ok(Self::Week),
            "M" | "MONTH" | "MONTHLY" => Ok(Self::Month),
            "Q" | "QUARTER" | "QUARTERLY" => Ok(Self::Quarter),
            "H" | "HALF-YEAR" | "HALFYEAR" | "HALF-YEARLY" => Ok(Self::HalfYear),
            "Y" | "YEAR" | "YEARLY" => Ok(Self::Year),
            _ => Err(LayoutError::UnknownMode(input.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Milestone {
    pub text: String,
    pub date: NaiveDate,
    pub style: MilestoneStyle,
}

/// A bar on the roadmap. `parallel_tasks` nest recursively: a parallel
/// task is the same entity shape, rendered on rows beneath its parent.
#[derive(Debug, Clone)]
pub struct Task {
    pub text: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub milestones: Vec<Milestone>,
    pub parallel_tasks: Vec<Task>,
    pub style: BarStyle,
}

#[derive(Debug, Clone)]
pub struct Group {
    pub text: String,
    pub tasks: Vec<Task>,
    pub style: BarStyle,
}

/// Timeline configuration captured by `set_timeline`.
#[derive(Debug, Clone)]
pub struct TimelineSpec {
    pub mode: TimelineMode,
    pub start: NaiveDate,
    pub items: usize,
    /// Substitute sequence-number labels ("Week 3") for calendar ones.
    pub generic_labels: bool,
    /// Week mode only: append the cell's first day to its label.
    pub show_first_day: bool,
    pub year_style: BarStyle,
    pub period_style: BarStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoPlacement {
    Top,
    Bottom,
}

/// A reserved box for a host-supplied logo image. The engine never decodes
/// image data; it only allocates space.
#[derive(Debug, Clone)]
pub struct LogoSpec {
    pub width: f32,
    pub height: f32,
    pub placement: LogoPlacement,
    pub alignment: crate::align::Alignment,
}
