//! Layout configuration for the heatmap chart.

/// Space around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 60.0,
            right: 30.0,
            bottom: 90.0,
            left: 70.0,
        }
    }
}

/// Everything the renderer needs to know about layout and labelling.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub title: String,
    /// Locale tag for number formatting (`en`, `de`, ...).
    pub locale: String,
    pub legend_width: f64,
    /// Height of the legend swatches; `None` means `300 / colors`.
    pub legend_band_height: Option<f64>,
    /// Distance between the bottom of the plotting area and the legend.
    pub legend_gap: f64,
    /// Font size for tick labels.
    pub font_px: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 550,
            margin: Margin::default(),
            title: DEFAULT_TITLE.to_string(),
            locale: "en".to_string(),
            legend_width: 400.0,
            legend_band_height: None,
            legend_gap: 40.0,
            font_px: 11,
        }
    }
}

pub const DEFAULT_TITLE: &str = "Monthly Global Land-Surface Temperature";

impl ChartConfig {
    /// Width of the plotting area inside the margins.
    pub fn inner_width(&self) -> f64 {
        (self.width as f64 - self.margin.left - self.margin.right).max(1.0)
    }

    /// Height of the plotting area inside the margins.
    pub fn inner_height(&self) -> f64 {
        (self.height as f64 - self.margin.top - self.margin.bottom).max(1.0)
    }
}
