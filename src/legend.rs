//! Discrete colour legend derived from a threshold scale.

use crate::format::format_fixed1;
use crate::scale::{LinearScale, ThresholdScale};
use serde::Serialize;

/// Value range covered by one colour band, open ends clamped to the domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSwatch<C> {
    pub range_start: f64,
    pub range_end: f64,
    pub color: C,
}

/// A swatch positioned under the legend's linear scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedSwatch<C> {
    pub swatch: LegendSwatch<C>,
    pub x: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendTick {
    pub value: f64,
    pub x: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLayout<C> {
    pub width: f64,
    pub swatches: Vec<PlacedSwatch<C>>,
    pub ticks: Vec<LegendTick>,
}

/// One swatch per colour band, in band order.
pub fn swatches<C: Clone>(scale: &ThresholdScale<C>) -> Vec<LegendSwatch<C>> {
    let (min, max) = scale.domain();
    scale
        .range()
        .iter()
        .enumerate()
        .filter_map(|(band, color)| {
            let (low, high) = scale.invert_extent(band)?;
            Some(LegendSwatch {
                range_start: low.unwrap_or(min),
                range_end: high.unwrap_or(max),
                color: color.clone(),
            })
        })
        .collect()
}

/// Lay out swatches over `[0, width]` and put a tick at every internal
/// threshold, labelled to one decimal.
pub fn build_legend<C: Clone>(
    scale: &ThresholdScale<C>,
    width: f64,
    decimal_sep: char,
) -> LegendLayout<C> {
    let x = LinearScale::new(scale.domain(), (0.0, width));
    let swatches = swatches(scale)
        .into_iter()
        .map(|swatch| {
            let x0 = x.map(swatch.range_start);
            let x1 = x.map(swatch.range_end);
            PlacedSwatch {
                swatch,
                x: x0,
                width: x1 - x0,
            }
        })
        .collect();
    let ticks = scale
        .thresholds()
        .iter()
        .map(|&value| LegendTick {
            value,
            x: x.map(value),
            label: format_fixed1(value, decimal_sep),
        })
        .collect();
    LegendLayout {
        width,
        swatches,
        ticks,
    }
}
