//! Chart rendering: lay the heatmap, its axes and the legend out onto any
//! `DrawingSurface`.
//!
//! - `Scene`: retained surface for inspection, hit-testing and interactive hosts
//! - `PlottersSurface` / `export_chart`: **SVG** or **PNG** files via plotters
//! - Year axis ticked on decades, month axis with full month names
//! - Legend: one swatch per colour band, ticks at every threshold

pub mod plotters_surface;
pub mod scene;
pub mod surface;
pub mod types;

pub use plotters_surface::{PlottersSurface, export_chart};
pub use scene::Scene;
pub use surface::{
    AxisOrient, AxisSpec, AxisTick, CellMeta, CellSpec, DrawingSurface, FillRect, HoverEvent,
    HoverTracker, Point, Rect, TextAnchor, TextSpec,
};
pub use types::{ChartConfig, DEFAULT_TITLE, Margin};

use surface::TICK_SIZE;

use crate::error::Result;
use crate::format::{
    CELSIUS, decade_ticks, estimate_text_width_px, format_count, format_year, map_locale,
    month_name,
};
use crate::legend::{LegendLayout, build_legend};
use crate::models::Dataset;
use crate::normalize::{NormalizedSeries, derive_series};
use crate::palette::Rgb8;
use crate::scale::{BandScale, ThresholdScale};
use crate::tooltip::{TooltipConfig, TooltipController, TooltipOverlay};

pub const X_AXIS_ID: &str = "x-axis";
pub const Y_AXIS_ID: &str = "y-axis";
pub const LEGEND_AXIS_ID: &str = "legend-axis";
pub const LEGEND_CELL_CLASS: &str = "legend-cell";
pub const TITLE_ID: &str = "title";
pub const DESCRIPTION_ID: &str = "description";

/// A dataset bound to its colour scale and layout, ready to draw.
#[derive(Debug, Clone)]
pub struct HeatmapChart {
    dataset: Dataset,
    series: NormalizedSeries,
    scale: ThresholdScale<Rgb8>,
    config: ChartConfig,
}

impl HeatmapChart {
    /// Derive the axis series and build the threshold scale over the
    /// dataset's temperature extent.
    pub fn new(dataset: Dataset, palette: Vec<Rgb8>, config: ChartConfig) -> Result<Self> {
        let series = derive_series(&dataset);
        let scale = ThresholdScale::evenly_spaced(series.extent.min, series.extent.max, palette)?;
        log::debug!(
            "{} years, temperature {:.3}..{:.3}, {} thresholds",
            series.years.len(),
            series.extent.min,
            series.extent.max,
            scale.thresholds().len()
        );
        let label_px =
            estimate_text_width_px("September", config.font_px) as f64 + TICK_SIZE + 3.0;
        if label_px > config.margin.left {
            log::warn!(
                "left margin {}px is narrower than the month labels (~{}px)",
                config.margin.left,
                label_px
            );
        }
        Ok(Self {
            dataset,
            series,
            scale,
            config,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn series(&self) -> &NormalizedSeries {
        &self.series
    }

    pub fn scale(&self) -> &ThresholdScale<Rgb8> {
        &self.scale
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn decimal_sep(&self) -> char {
        map_locale(&self.config.locale).1
    }

    /// Plotting area (inside the margins) in canvas coordinates.
    pub fn plot_area(&self) -> Rect {
        Rect::new(
            self.config.margin.left,
            self.config.margin.top,
            self.config.inner_width(),
            self.config.inner_height(),
        )
    }

    pub fn x_scale(&self) -> BandScale<i32> {
        let area = self.plot_area();
        BandScale::new(
            self.series.years.iter().copied(),
            (area.x, area.x + area.width),
        )
    }

    pub fn y_scale(&self) -> BandScale<u32> {
        let area = self.plot_area();
        BandScale::new(
            self.series.months.iter().copied(),
            (area.y, area.y + area.height),
        )
    }

    /// Legend swatch height.
    pub fn legend_band_height(&self) -> f64 {
        self.config
            .legend_band_height
            .unwrap_or(300.0 / self.scale.band_count() as f64)
    }

    pub fn legend(&self) -> LegendLayout<Rgb8> {
        build_legend(&self.scale, self.config.legend_width, self.decimal_sep())
    }

    /// `"1753 - 2015: base temperature 8.66℃ (3,153 readings)"`
    pub fn description(&self) -> String {
        let (locale, _) = map_locale(&self.config.locale);
        let first = self.series.years.first().copied().unwrap_or_default();
        let last = self.series.years.last().copied().unwrap_or_default();
        format!(
            "{} - {}: base temperature {}{CELSIUS} ({} readings)",
            format_year(first),
            format_year(last),
            self.dataset.base_temperature(),
            format_count(self.dataset.len(), locale)
        )
    }

    pub fn tooltip_config(&self) -> TooltipConfig {
        TooltipConfig {
            decimal_sep: self.decimal_sep(),
            ..TooltipConfig::default()
        }
    }

    /// A Hidden tooltip controller wired to this chart's dataset and locale.
    pub fn tooltip_controller<O: TooltipOverlay>(&self, overlay: O) -> TooltipController<O> {
        TooltipController::new(
            overlay,
            self.dataset.base_temperature(),
            self.tooltip_config(),
        )
    }

    /// Draw the whole chart: header, cells, both axes and the legend.
    pub fn render<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.set_dimensions(self.config.width, self.config.height)?;
        self.draw_header(surface)?;
        self.draw_cells(surface)?;
        self.draw_axes(surface)?;
        self.draw_legend(surface)?;
        Ok(())
    }

    /// Render into a fresh retained scene.
    pub fn to_scene(&self) -> Result<Scene> {
        let mut scene = Scene::new();
        self.render(&mut scene)?;
        Ok(scene)
    }

    fn draw_header<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let center = self.config.width as f64 / 2.0;
        surface.draw_text(&TextSpec {
            id: TITLE_ID.to_string(),
            text: self.config.title.clone(),
            position: Point::new(center, 26.0),
            font_px: 20,
            anchor: TextAnchor::Middle,
        })?;
        surface.draw_text(&TextSpec {
            id: DESCRIPTION_ID.to_string(),
            text: self.description(),
            position: Point::new(center, 48.0),
            font_px: 14,
            anchor: TextAnchor::Middle,
        })
    }

    fn draw_cells<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let xs = self.x_scale();
        let ys = self.y_scale();
        let (w, h) = (xs.bandwidth(), ys.bandwidth());
        for (index, record) in self.dataset.records().iter().enumerate() {
            let (Some(x), Some(y)) = (xs.position(&record.year), ys.position(&record.month))
            else {
                continue;
            };
            let temperature = self.dataset.temperature_of(record);
            surface.draw_cell(&CellSpec {
                record: index,
                rect: Rect::new(x, y, w, h),
                fill: *self.scale.color(temperature),
                meta: CellMeta {
                    year: record.year,
                    month: record.month,
                    temperature,
                },
            })?;
        }
        Ok(())
    }

    fn draw_axes<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let area = self.plot_area();
        let xs = self.x_scale();
        let ys = self.y_scale();

        let x_ticks = decade_ticks(&self.series.years)
            .into_iter()
            .filter_map(|year| {
                xs.center(&year).map(|c| AxisTick {
                    offset: c - area.x,
                    label: format_year(year),
                })
            })
            .collect();
        surface.draw_axis(&AxisSpec {
            id: X_AXIS_ID.to_string(),
            orient: AxisOrient::Bottom,
            origin: Point::new(area.x, area.y + area.height),
            length: area.width,
            font_px: self.config.font_px,
            ticks: x_ticks,
        })?;

        let y_ticks = self
            .series
            .months
            .iter()
            .filter_map(|m| {
                let c = ys.center(m)?;
                Some(AxisTick {
                    offset: c - area.y,
                    label: month_name(*m)?,
                })
            })
            .collect();
        surface.draw_axis(&AxisSpec {
            id: Y_AXIS_ID.to_string(),
            orient: AxisOrient::Left,
            origin: Point::new(area.x, area.y),
            length: area.height,
            font_px: self.config.font_px,
            ticks: y_ticks,
        })
    }

    fn draw_legend<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let area = self.plot_area();
        let legend = self.legend();
        let top = area.y + area.height + self.config.legend_gap;
        let band_h = self.legend_band_height();

        for placed in &legend.swatches {
            surface.draw_rect(&FillRect {
                class: LEGEND_CELL_CLASS.to_string(),
                rect: Rect::new(area.x + placed.x, top, placed.width, band_h),
                fill: placed.swatch.color,
            })?;
        }
        surface.draw_axis(&AxisSpec {
            id: LEGEND_AXIS_ID.to_string(),
            orient: AxisOrient::Bottom,
            origin: Point::new(area.x, top + band_h),
            length: legend.width,
            font_px: self.config.font_px,
            ticks: legend
                .ticks
                .iter()
                .map(|t| AxisTick {
                    offset: t.x,
                    label: t.label.clone(),
                })
                .collect(),
        })
    }
}
