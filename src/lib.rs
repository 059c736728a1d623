//! Layout engine for roadmap diagrams. Computes absolute pixel geometry -
//! timeline periods, swim-lane groups, task bars, milestone diamonds, the
//! "today" marker - from dates and text, and hands it to a host-supplied
//! renderer. Nothing is drawn here.

pub mod align;
pub mod config;
pub mod error;
pub mod ir;
pub mod layout;
pub mod render;
pub mod roadmap;
pub mod text_metrics;
pub mod theme;

pub use align::{Alignment, Direction, Offset};
pub use config::{Config, LayoutConfig, load_config};
pub use error::LayoutError;
pub use ir::{LogoPlacement, TimelineMode};
pub use layout::compute_layout;
pub use layout::types::{
    GroupLayout, MarkerLayout, MilestoneLayout, Point, Rect, RoadmapLayout, TaskLayout,
    TimelineGeometry,
};
pub use render::{Primitive, RecordingRenderer, Renderer, render};
pub use roadmap::{GroupHandle, Roadmap, RoadmapOptions, TaskHandle, TimelineOptions};
pub use text_metrics::{FixedTextMeasurer, SystemTextMeasurer, TextMeasurer, TextSize};
pub use theme::{BarOptions, MilestoneOptions, TextOptions, Theme};
