//! The roadmap aggregate root and its builder-style API. Dates arrive as
//! ISO `YYYY-MM-DD` strings and are parsed eagerly; style overrides are
//! merged over the theme once, at the call boundary.

use chrono::NaiveDate;

use crate::align::Alignment;
use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::ir::{Group, LogoPlacement, LogoSpec, Milestone, Task, TimelineMode, TimelineSpec};
use crate::layout::{self, RoadmapLayout};
use crate::render::{self, Renderer};
use crate::text_metrics::TextMeasurer;
use crate::theme::{BarOptions, MilestoneOptions, TextOptions, TextStyle, Theme};

/// A text role with its resolved style and placement.
#[derive(Debug, Clone)]
pub(crate) struct LabelSpec {
    pub text: String,
    pub style: TextStyle,
    pub alignment: Alignment,
}

#[derive(Debug, Clone)]
pub struct RoadmapOptions {
    pub theme: Theme,
    pub config: LayoutConfig,
    /// Derive the surface height from the accumulated layout cursor.
    pub auto_height: bool,
    /// Surface height used when `auto_height` is off.
    pub height: f32,
}

impl Default for RoadmapOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default_theme(),
            config: LayoutConfig::default(),
            auto_height: true,
            height: 600.0,
        }
    }
}

/// Options accepted by [`Roadmap::set_timeline`].
#[derive(Debug, Clone, Default)]
pub struct TimelineOptions {
    /// Show sequence-number labels ("Week 3") instead of calendar ones.
    pub generic_labels: bool,
    /// Week mode: append the cell's first day to its label.
    pub show_first_day: bool,
    pub year_style: BarOptions,
    pub period_style: BarOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupHandle(usize);

/// Index path to a task: group index, then a descent through
/// `parallel_tasks` levels. Handles stay valid as long as earlier entries
/// are not removed, which the API never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskHandle {
    group: usize,
    path: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Roadmap {
    pub(crate) width: f32,
    pub(crate) auto_height: bool,
    pub(crate) fixed_height: f32,
    pub(crate) theme: Theme,
    pub(crate) config: LayoutConfig,
    pub(crate) title: Option<LabelSpec>,
    pub(crate) subtitle: Option<LabelSpec>,
    pub(crate) footer: Option<LabelSpec>,
    pub(crate) timeline: Option<TimelineSpec>,
    pub(crate) groups: Vec<Group>,
    pub(crate) logo: Option<LogoSpec>,
    pub(crate) today: Option<NaiveDate>,
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| {
        LayoutError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}

fn parse_alignment(options: &TextOptions) -> Result<Alignment> {
    match options.alignment.as_deref() {
        Some(expr) => expr.parse(),
        None => Ok(Alignment::default()),
    }
}

impl Roadmap {
    pub fn new(width: f32, options: RoadmapOptions) -> Self {
        Self {
            width,
            auto_height: options.auto_height,
            fixed_height: options.height,
            theme: options.theme,
            config: options.config,
            title: None,
            subtitle: None,
            footer: None,
            timeline: None,
            groups: Vec::new(),
            logo: None,
            today: None,
        }
    }

    pub fn set_title(&mut self, text: &str, options: TextOptions) -> Result<()> {
        self.title = Some(LabelSpec {
            text: text.to_string(),
            style: options.resolve(&self.theme.title),
            alignment: parse_alignment(&options)?,
        });
        Ok(())
    }

    pub fn set_subtitle(&mut self, text: &str, options: TextOptions) -> Result<()> {
        self.subtitle = Some(LabelSpec {
            text: text.to_string(),
            style: options.resolve(&self.theme.subtitle),
            alignment: parse_alignment(&options)?,
        });
        Ok(())
    }

    pub fn set_footer(&mut self, text: &str, options: TextOptions) -> Result<()> {
        self.footer = Some(LabelSpec {
            text: text.to_string(),
            style: options.resolve(&self.theme.footer),
            alignment: parse_alignment(&options)?,
        });
        Ok(())
    }

    pub fn set_timeline(
        &mut self,
        mode: TimelineMode,
        start_date: &str,
        items: usize,
        options: TimelineOptions,
    ) -> Result<()> {
        if items == 0 {
            return Err(LayoutError::InvalidItemCount(items));
        }
        self.timeline = Some(TimelineSpec {
            mode,
            start: parse_date(start_date)?,
            items,
            generic_labels: options.generic_labels,
            show_first_day: options.show_first_day,
            year_style: options.year_style.resolve(&self.theme.year_header),
            period_style: options.period_style.resolve(&self.theme.period),
        });
        Ok(())
    }

    pub fn set_logo(
        &mut self,
        width: f32,
        height: f32,
        placement: LogoPlacement,
        alignment: &str,
    ) -> Result<()> {
        self.logo = Some(LogoSpec {
            width,
            height,
            placement,
            alignment: alignment.parse()?,
        });
        Ok(())
    }

    /// Freezes "today" for deterministic output. Without this the layout
    /// pass samples the wall clock.
    pub fn set_today(&mut self, date: &str) -> Result<()> {
        self.today = Some(parse_date(date)?);
        Ok(())
    }

    pub fn add_group(&mut self, text: &str, options: BarOptions) -> GroupHandle {
        self.groups.push(Group {
            text: text.to_string(),
            tasks: Vec::new(),
            style: options.resolve(&self.theme.group),
        });
        GroupHandle(self.groups.len() - 1)
    }

    pub fn add_task(
        &mut self,
        group: GroupHandle,
        text: &str,
        start: &str,
        end: &str,
        options: BarOptions,
    ) -> Result<TaskHandle> {
        let task = self.build_task(text, start, end, options)?;
        let tasks = &mut self
            .groups
            .get_mut(group.0)
            .ok_or(LayoutError::StaleHandle {
                kind: "group",
                index: group.0,
            })?
            .tasks;
        tasks.push(task);
        Ok(TaskHandle {
            group: group.0,
            path: vec![tasks.len() - 1],
        })
    }

    /// Adds a sub-bar nested under `parent`, sharing its vertical slot
    /// family. Parallel tasks nest recursively.
    pub fn add_parallel_task(
        &mut self,
        parent: &TaskHandle,
        text: &str,
        start: &str,
        end: &str,
        options: BarOptions,
    ) -> Result<TaskHandle> {
        let task = self.build_task(text, start, end, options)?;
        let parent_task = self.task_mut(parent)?;
        parent_task.parallel_tasks.push(task);
        let mut path = parent.path.clone();
        path.push(parent_task.parallel_tasks.len() - 1);
        Ok(TaskHandle {
            group: parent.group,
            path,
        })
    }

    pub fn add_milestone(
        &mut self,
        task: &TaskHandle,
        text: &str,
        date: &str,
        options: MilestoneOptions,
    ) -> Result<()> {
        let style = options.resolve(&self.theme.milestone);
        let date = parse_date(date)?;
        self.task_mut(task)?.milestones.push(Milestone {
            text: text.to_string(),
            date,
            style,
        });
        Ok(())
    }

    /// Runs the full layout pass without drawing anything.
    pub fn layout(&self, measurer: &dyn TextMeasurer) -> Result<RoadmapLayout> {
        layout::compute_layout(self, measurer)
    }

    /// Runs the layout pass, then hands the geometry to the renderer as a
    /// stream of primitive calls.
    pub fn draw(
        &self,
        measurer: &dyn TextMeasurer,
        renderer: &mut dyn Renderer,
    ) -> Result<RoadmapLayout> {
        let layout = self.layout(measurer)?;
        render::render(&layout, renderer);
        Ok(layout)
    }

    pub(crate) fn effective_today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    fn build_task(&self, text: &str, start: &str, end: &str, options: BarOptions) -> Result<Task> {
        Ok(Task {
            text: text.to_string(),
            start: parse_date(start)?,
            end: parse_date(end)?,
            milestones: Vec::new(),
            parallel_tasks: Vec::new(),
            style: options.resolve(&self.theme.task),
        })
    }

    fn task_mut(&mut self, handle: &TaskHandle) -> Result<&mut Task> {
        let stale = |index| LayoutError::StaleHandle {
            kind: "task",
            index,
        };
        let group = self
            .groups
            .get_mut(handle.group)
            .ok_or(LayoutError::StaleHandle {
                kind: "group",
                index: handle.group,
            })?;
        let (first, rest) = handle.path.split_first().ok_or_else(|| stale(0))?;
        let mut task = group.tasks.get_mut(*first).ok_or_else(|| stale(*first))?;
        for &index in rest {
            task = task
                .parallel_tasks
                .get_mut(index)
                .ok_or_else(|| stale(index))?;
        }
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roadmap() -> Roadmap {
        Roadmap::new(1200.0, RoadmapOptions::default())
    }

    #[test]
    fn malformed_dates_fail_at_the_call_site() {
        let mut rm = roadmap();
        let err = rm
            .set_timeline(TimelineMode::Month, "2023-13-01", 6, Default::default())
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidDate { .. }));
        assert!(rm.set_today("not-a-date").is_err());

        let group = rm.add_group("g", Default::default());
        assert!(
            rm.add_task(group, "t", "2023-01-01", "01/02/2023", Default::default())
                .is_err()
        );
    }

    #[test]
    fn zero_item_timeline_is_rejected() {
        let mut rm = roadmap();
        let err = rm
            .set_timeline(TimelineMode::Month, "2023-01-01", 0, Default::default())
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidItemCount(0)));
    }

    #[test]
    fn draw_requires_title_and_timeline() {
        use crate::text_metrics::FixedTextMeasurer;

        let measurer = FixedTextMeasurer::default();
        let mut rm = roadmap();
        assert!(matches!(
            rm.layout(&measurer).unwrap_err(),
            LayoutError::MissingTitle
        ));

        rm.set_title("Roadmap", Default::default()).unwrap();
        assert!(matches!(
            rm.layout(&measurer).unwrap_err(),
            LayoutError::MissingTimeline
        ));

        rm.set_timeline(TimelineMode::Month, "2023-01-01", 6, Default::default())
            .unwrap();
        assert!(rm.layout(&measurer).is_ok());
    }

    #[test]
    fn handles_reach_nested_parallel_tasks() {
        let mut rm = roadmap();
        let group = rm.add_group("g", Default::default());
        let task = rm
            .add_task(group, "t", "2023-01-01", "2023-03-01", Default::default())
            .unwrap();
        let nested = rm
            .add_parallel_task(&task, "p", "2023-02-01", "2023-04-01", Default::default())
            .unwrap();
        let deeper = rm
            .add_parallel_task(&nested, "pp", "2023-03-01", "2023-05-01", Default::default())
            .unwrap();
        rm.add_milestone(&deeper, "m", "2023-04-01", Default::default())
            .unwrap();

        let root = &rm.groups[0].tasks[0];
        assert_eq!(root.parallel_tasks.len(), 1);
        assert_eq!(root.parallel_tasks[0].parallel_tasks.len(), 1);
        assert_eq!(
            root.parallel_tasks[0].parallel_tasks[0].milestones.len(),
            1
        );
    }

    #[test]
    fn style_overrides_resolve_at_add_time() {
        let mut rm = roadmap();
        let _group = rm.add_group(
            "g",
            BarOptions {
                fill: Some("#123456".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(rm.groups[0].style.fill, "#123456");
        assert_eq!(
            rm.groups[0].style.text.font_size,
            rm.theme.group.text.font_size
        );
    }
}
