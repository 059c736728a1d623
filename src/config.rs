use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Pixel constants driving the layout pass. Field defaults reproduce the
/// documented group-height arithmetic
/// (`task_row_height*n + milestone_spacing*m + task_gap*n + task_pair_gap*(n-1)`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    /// Share of the usable width given to the group name column.
    pub group_column_percentage: f32,
    /// Gap between the group column and the timeline.
    pub group_gap: f32,
    /// Gap kept clear between adjacent period cells.
    pub period_gap: f32,
    pub year_header_height: f32,
    pub period_row_height: f32,
    /// Gap between the period row and the first group.
    pub timeline_gap: f32,
    pub task_row_height: f32,
    pub task_gap: f32,
    /// Extra spacing between consecutive tasks within a group.
    pub task_pair_gap: f32,
    /// Vertical room reserved per milestone riding above a task bar.
    pub milestone_spacing: f32,
    /// Lead-in above a task that carries milestones (own or parallel).
    pub task_milestone_lead_in: f32,
    /// Lead-in above a task with no milestones anywhere.
    pub task_plain_lead_in: f32,
    pub milestone_diamond_size: f32,
    /// How far above the task bar the diamond centre sits.
    pub milestone_rise: f32,
    pub title_gap: f32,
    pub subtitle_gap: f32,
    pub group_spacing: f32,
    pub footer_gap: f32,
    pub logo_gap: f32,
    /// Clearance between the marker line end and the footer top.
    pub marker_clearance: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            top_margin: 30.0,
            bottom_margin: 30.0,
            left_margin: 30.0,
            right_margin: 30.0,
            group_column_percentage: 0.2,
            group_gap: 10.0,
            period_gap: 2.0,
            year_header_height: 20.0,
            period_row_height: 20.0,
            timeline_gap: 5.0,
            task_row_height: 20.0,
            task_gap: 5.0,
            task_pair_gap: 2.0,
            milestone_spacing: 15.0,
            task_milestone_lead_in: 15.0,
            task_plain_lead_in: 5.0,
            milestone_diamond_size: 10.0,
            milestone_rise: 7.0,
            title_gap: 10.0,
            subtitle_gap: 8.0,
            group_spacing: 10.0,
            footer_gap: 15.0,
            logo_gap: 10.0,
            marker_clearance: 2.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default_theme(),
            layout: LayoutConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    top_margin: Option<f32>,
    bottom_margin: Option<f32>,
    left_margin: Option<f32>,
    right_margin: Option<f32>,
    group_column_percentage: Option<f32>,
    group_gap: Option<f32>,
    period_gap: Option<f32>,
    year_header_height: Option<f32>,
    period_row_height: Option<f32>,
    timeline_gap: Option<f32>,
    task_row_height: Option<f32>,
    task_gap: Option<f32>,
    task_pair_gap: Option<f32>,
    milestone_spacing: Option<f32>,
    task_milestone_lead_in: Option<f32>,
    task_plain_lead_in: Option<f32>,
    milestone_diamond_size: Option<f32>,
    milestone_rise: Option<f32>,
    title_gap: Option<f32>,
    subtitle_gap: Option<f32>,
    group_spacing: Option<f32>,
    footer_gap: Option<f32>,
    logo_gap: Option<f32>,
    marker_clearance: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    layout: Option<LayoutConfigFile>,
}

macro_rules! apply {
    ($target:expr, $file:expr, $($field:ident),+ $(,)?) => {
        $(if let Some(v) = $file.$field {
            $target.$field = v;
        })+
    };
}

/// Loads a JSON config file with partial overrides over the defaults.
/// `None` yields the defaults untouched.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::named(theme_name)?;
    }
    if let Some(layout) = parsed.layout {
        apply!(
            config.layout,
            layout,
            top_margin,
            bottom_margin,
            left_margin,
            right_margin,
            group_column_percentage,
            group_gap,
            period_gap,
            year_header_height,
            period_row_height,
            timeline_gap,
            task_row_height,
            task_gap,
            task_pair_gap,
            milestone_spacing,
            task_milestone_lead_in,
            task_plain_lead_in,
            milestone_diamond_size,
            milestone_rise,
            title_gap,
            subtitle_gap,
            group_spacing,
            footer_gap,
            logo_gap,
            marker_clearance,
        );
    }
    Ok(config)
}
