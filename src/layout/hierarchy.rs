//! Vertical layout of groups, tasks, nested parallel tasks and milestones
//! against an already-positioned timeline.

use crate::config::LayoutConfig;
use crate::ir::{Group, Task};
use crate::text_metrics::TextMeasurer;

use super::range::{point_position, range_segments, segments_to_rects, segments_union};
use super::types::{
    GroupLayout, MilestoneLayout, Point, Rect, TaskLayout, TimelineGeometry,
};

/// Milestones that claim vertical spacing for a task: its own, or - only
/// when it has none - those of its immediate parallel tasks. Documented
/// behaviour; a task with both kinds does not count both.
pub(super) fn spacing_milestone_count(task: &Task) -> usize {
    if !task.milestones.is_empty() {
        task.milestones.len()
    } else {
        task.parallel_tasks
            .iter()
            .map(|parallel| parallel.milestones.len())
            .sum()
    }
}

/// Reserved height for a group, covering every nested row.
pub(super) fn group_height(group: &Group, config: &LayoutConfig) -> f32 {
    let tasks = group.tasks.len();
    if tasks == 0 {
        return 0.0;
    }
    let milestones: usize = group.tasks.iter().map(spacing_milestone_count).sum();
    config.task_row_height * tasks as f32
        + config.milestone_spacing * milestones as f32
        + config.task_gap * tasks as f32
        + config.task_pair_gap * (tasks - 1) as f32
}

/// Lays out one group starting at `cursor_y`. Returns the geometry and the
/// new cursor. An empty group produces zero height and leaves the cursor
/// untouched.
pub(super) fn layout_group(
    group: &Group,
    timeline: &TimelineGeometry,
    config: &LayoutConfig,
    measurer: &dyn TextMeasurer,
    cursor_y: f32,
) -> (GroupLayout, f32) {
    let height = group_height(group, config);
    let rect = Rect::new(
        config.left_margin,
        cursor_y,
        (timeline.x - config.group_gap - config.left_margin).max(0.0),
        height,
    );
    let text_anchor = Point {
        x: rect.x + 5.0,
        y: rect.y + height / 2.0,
    };

    let mut tasks = Vec::with_capacity(group.tasks.len());
    let mut row_y = cursor_y;
    for (i, task) in group.tasks.iter().enumerate() {
        let lead_in = if spacing_milestone_count(task) > 0 {
            config.task_milestone_lead_in
        } else {
            config.task_plain_lead_in
        };
        let task_y = row_y + lead_in;
        tasks.push(layout_task(task, timeline, config, measurer, task_y));
        row_y = task_y + config.task_row_height;
        if i + 1 < group.tasks.len() {
            row_y += config.task_pair_gap;
        }
    }

    let layout = GroupLayout {
        text: group.text.clone(),
        rect,
        text_anchor,
        tasks,
        style: group.style.clone(),
    };
    let new_cursor = if height > 0.0 {
        cursor_y + height + config.group_spacing
    } else {
        cursor_y
    };
    (layout, new_cursor)
}

/// Lays out a task bar at `y`, its milestones above the bar, and its
/// parallel tasks recursively one row further down. Parallel rows start
/// from the same cursor their parent did; the group height formula has
/// already reserved their room, so they never advance the group cursor.
fn layout_task(
    task: &Task,
    timeline: &TimelineGeometry,
    config: &LayoutConfig,
    measurer: &dyn TextMeasurer,
    y: f32,
) -> TaskLayout {
    let segments = range_segments(&timeline.periods, timeline.mode, task.start, task.end);
    let boxes = segments_to_rects(&segments, y, config.task_row_height);
    let text_anchor = segments_union(&segments).map(|(from, to)| {
        let size = measurer.measure(&task.text, &task.style.text.font_family, task.style.text.font_size);
        Point {
            x: (from + to) / 2.0 - size.width / 2.0,
            y: y + config.task_row_height / 2.0,
        }
    });

    let milestones = task
        .milestones
        .iter()
        .filter_map(|milestone| {
            let x = point_position(&timeline.periods, timeline.mode, milestone.date)?;
            let side = config.milestone_diamond_size;
            let diamond = Rect::new(x - side / 2.0, y - config.milestone_rise - side / 2.0, side, side);
            let size = measurer.measure(
                &milestone.text,
                &milestone.style.text.font_family,
                milestone.style.text.font_size,
            );
            Some(MilestoneLayout {
                text: milestone.text.clone(),
                diamond,
                text_anchor: Point {
                    x: x - size.width / 2.0,
                    y: diamond.y - size.height,
                },
                style: milestone.style.clone(),
            })
        })
        .collect();

    let parallel_tasks = task
        .parallel_tasks
        .iter()
        .map(|parallel| {
            layout_task(
                parallel,
                timeline,
                config,
                measurer,
                y + config.task_row_height + config.task_gap,
            )
        })
        .collect();

    TaskLayout {
        text: task.text.clone(),
        boxes,
        text_anchor,
        milestones,
        parallel_tasks,
        style: task.style.clone(),
    }
}
