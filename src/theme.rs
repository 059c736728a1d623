use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Fully-resolved text styling for one diagram role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f32,
    pub color: String,
}

/// Fully-resolved bar styling (group header, task bar, period cell).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarStyle {
    pub fill: String,
    pub text: TextStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneStyle {
    pub fill: String,
    pub text: TextStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub line_color: String,
    pub text: TextStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub footer: TextStyle,
    pub year_header: BarStyle,
    pub period: BarStyle,
    pub group: BarStyle,
    pub task: BarStyle,
    pub milestone: MilestoneStyle,
    pub marker: MarkerStyle,
}

const DEFAULT_FONT: &str = "Arial, Helvetica, sans-serif";

fn text(size: f32, color: &str) -> TextStyle {
    TextStyle {
        font_family: DEFAULT_FONT.to_string(),
        font_size: size,
        color: color.to_string(),
    }
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            title: text(26.0, "#000000"),
            subtitle: text(18.0, "#333333"),
            footer: text(13.0, "#555555"),
            year_header: BarStyle {
                fill: "#004D80".to_string(),
                text: text(12.0, "#FFFFFF"),
            },
            period: BarStyle {
                fill: "#336699".to_string(),
                text: text(12.0, "#FFFFFF"),
            },
            group: BarStyle {
                fill: "#336699".to_string(),
                text: text(13.0, "#FFFFFF"),
            },
            task: BarStyle {
                fill: "#D6EAF8".to_string(),
                text: text(12.0, "#000000"),
            },
            milestone: MilestoneStyle {
                fill: "#B7950B".to_string(),
                text: text(10.0, "#B7950B"),
            },
            marker: MarkerStyle {
                line_color: "#77530E".to_string(),
                text: text(11.0, "#77530E"),
            },
        }
    }

    pub fn greywoof() -> Self {
        Self {
            background: "#F4F4F4".to_string(),
            title: text(26.0, "#1C2430"),
            subtitle: text(18.0, "#3B4552"),
            footer: text(13.0, "#6B7280"),
            year_header: BarStyle {
                fill: "#4B5563".to_string(),
                text: text(12.0, "#FFFFFF"),
            },
            period: BarStyle {
                fill: "#6B7280".to_string(),
                text: text(12.0, "#FFFFFF"),
            },
            group: BarStyle {
                fill: "#6B7280".to_string(),
                text: text(13.0, "#FFFFFF"),
            },
            task: BarStyle {
                fill: "#D1D5DB".to_string(),
                text: text(12.0, "#1C2430"),
            },
            milestone: MilestoneStyle {
                fill: "#374151".to_string(),
                text: text(10.0, "#374151"),
            },
            marker: MarkerStyle {
                line_color: "#111827".to_string(),
                text: text(11.0, "#111827"),
            },
        }
    }

    /// Looks a theme up by name. Unknown names are a configuration error.
    pub fn named(name: &str) -> Result<Self, LayoutError> {
        match name.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::default_theme()),
            "greywoof" => Ok(Self::greywoof()),
            _ => Err(LayoutError::UnknownTheme(name.to_string())),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// Per-call text overrides. Unset fields fall back to the theme; the merge
/// happens once at the API call boundary, so everything downstream sees a
/// fully-populated [`TextStyle`].
#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub color: Option<String>,
    /// Alignment expression, e.g. `"left:50%"`. See [`crate::align`].
    pub alignment: Option<String>,
}

impl TextOptions {
    pub fn resolve(&self, base: &TextStyle) -> TextStyle {
        TextStyle {
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| base.font_family.clone()),
            font_size: self.font_size.unwrap_or(base.font_size),
            color: self.color.clone().unwrap_or_else(|| base.color.clone()),
        }
    }
}

/// Per-call overrides for bar-shaped entities.
#[derive(Debug, Clone, Default)]
pub struct BarOptions {
    pub fill: Option<String>,
    pub text: TextOptions,
}

impl BarOptions {
    pub fn resolve(&self, base: &BarStyle) -> BarStyle {
        BarStyle {
            fill: self.fill.clone().unwrap_or_else(|| base.fill.clone()),
            text: self.text.resolve(&base.text),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MilestoneOptions {
    pub fill: Option<String>,
    pub text: TextOptions,
}

impl MilestoneOptions {
    pub fn resolve(&self, base: &MilestoneStyle) -> MilestoneStyle {
        MilestoneStyle {
            fill: self.fill.clone().unwrap_or_else(|| base.fill.clone()),
            text: self.text.resolve(&base.text),
        }
    }
}
