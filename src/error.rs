use thiserror::Error;

/// Failures surfaced by the layout engine.
///
/// Entities falling outside the visible timeline window are not errors;
/// they simply produce no geometry.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("a title must be set before drawing")]
    MissingTitle,
    #[error("a timeline must be set before drawing")]
    MissingTimeline,
    #[error("unrecognized timeline mode `{0}`")]
    UnknownMode(String),
    #[error("unknown colour theme `{0}`")]
    UnknownTheme(String),
    #[error("invalid date `{input}` (expected YYYY-MM-DD)")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid alignment expression `{0}`")]
    InvalidAlignment(String),
    #[error("timeline item count must be at least 1, got {0}")]
    InvalidItemCount(usize),
    #[error("stale handle: no such {kind} at index {index}")]
    StaleHandle { kind: &'static str, index: usize },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
