//! Error taxonomy for loading, scaling and rendering.

use thiserror::Error;

/// Every failure the library can report.
///
/// Network and parse failures are terminal for the pipeline: callers log them
/// and stop before anything is drawn.
#[derive(Debug, Error)]
pub enum HeatmapError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request failed with HTTP {0}")]
    Http(reqwest::StatusCode),

    #[error("invalid temperature document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset contains no monthly records")]
    EmptyDataset,

    #[error("record for year {year} has month {month}, expected 1..=12")]
    InvalidMonth { year: i32, month: i64 },

    #[error("color palette must contain at least one color")]
    EmptyPalette,

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("invalid temperature domain [{min}, {max}]")]
    InvalidDomain { min: f64, max: f64 },

    #[error("rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, HeatmapError>;
