//! temp_heatmap
//!
//! A lightweight Rust library for fetching the global monthly land-surface
//! temperature series and rendering it as a year × month heatmap. Pairs with
//! the `heatmap` CLI and the `heatmap-gui` viewer.
//!
//! ### Features
//! - Fetch the temperature document over HTTPS (or read it from disk)
//! - Normalize months, derive the year axis and temperature extent
//! - Threshold colour scale over an 11-colour diverging palette
//! - Axes, discrete legend and hover tooltips
//! - Render to SVG/PNG, or to an inspectable, hit-testable scene
//!
//! ### Example
//! ```no_run
//! use temp_heatmap::{ChartConfig, HeatmapChart, api::DataSource, palette};
//!
//! let dataset = DataSource::default().load(None)?;
//! let chart = HeatmapChart::new(dataset, palette::default_palette(), ChartConfig::default())?;
//! temp_heatmap::render::export_chart(&chart, "heatmap.svg", None)?;
//! # Ok::<(), temp_heatmap::HeatmapError>(())
//! ```

pub mod api;
pub mod error;
pub mod format;
pub mod legend;
pub mod models;
pub mod normalize;
pub mod palette;
pub mod render;
pub mod scale;
pub mod stats;
pub mod storage;
pub mod tooltip;

pub use error::{HeatmapError, Result};
pub use models::{Dataset, TemperaturePayload, TemperatureRecord};
pub use render::{ChartConfig, HeatmapChart};
