//! Step function from a continuous temperature domain to ordered colour bands.

use crate::error::{HeatmapError, Result};

/// Half-width used to widen a zero-width domain.
const DEGENERATE_PAD: f64 = 0.5;

/// `count - 1` cut points evenly spaced strictly inside `(min, max)`.
///
/// `step = (max - min) / count`, `t[i] = min + i * step` for `i = 1..count`.
pub fn even_thresholds(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return Vec::new();
    }
    let step = (max - min) / count as f64;
    (1..count).map(|i| min + i as f64 * step).collect()
}

/// Cut points strictly increasing and strictly inside `(min, max)`.
fn strictly_inside(min: f64, max: f64, thresholds: &[f64]) -> bool {
    let (Some(first), Some(last)) = (thresholds.first(), thresholds.last()) else {
        return true;
    };
    *first > min && *last < max && thresholds.windows(2).all(|w| w[0] < w[1])
}

/// Threshold scale over `k` colour tokens and `k - 1` sorted cut points.
///
/// Band `i` covers `[thresholds[i-1], thresholds[i])`; the first band is open
/// below and the last open above. A value equal to a cut point belongs to the
/// upper band.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale<C> {
    domain: (f64, f64),
    thresholds: Vec<f64>,
    range: Vec<C>,
}

impl<C> ThresholdScale<C> {
    /// Evenly spaced thresholds between `min` and `max` bound to `palette`
    /// (index 0 = coldest).
    ///
    /// ### Errors
    /// - `EmptyPalette` for an empty palette
    /// - `InvalidDomain` for non-finite bounds or `min > max`
    ///
    /// A domain too narrow to hold strictly increasing cut points (zero width,
    /// or a few ulps wide) is widened by half a degree on each side.
    pub fn evenly_spaced(min: f64, max: f64, palette: Vec<C>) -> Result<Self> {
        if palette.is_empty() {
            return Err(HeatmapError::EmptyPalette);
        }
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(HeatmapError::InvalidDomain { min, max });
        }
        let mut domain = (min, max);
        let mut thresholds = even_thresholds(min, max, palette.len());
        if !(min < max && strictly_inside(min, max, &thresholds)) {
            log::warn!(
                "temperature domain [{min}, {max}] too narrow for {} bands; widening by {DEGENERATE_PAD}",
                palette.len()
            );
            domain = (min - DEGENERATE_PAD, max + DEGENERATE_PAD);
            thresholds = even_thresholds(domain.0, domain.1, palette.len());
        }
        Ok(Self {
            domain,
            thresholds,
            range: palette,
        })
    }

    /// Domain the thresholds were derived from (after widening, if any).
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn range(&self) -> &[C] {
        &self.range
    }

    pub fn band_count(&self) -> usize {
        self.range.len()
    }

    /// Index of the band containing `value` (number of cut points `<= value`).
    /// NaN falls into band 0.
    pub fn band_index(&self, value: f64) -> usize {
        self.thresholds.partition_point(|t| *t <= value)
    }

    pub fn color(&self, value: f64) -> &C {
        &self.range[self.band_index(value)]
    }

    /// Value range covered by band `band`: `(low, high)` where `None` marks an
    /// open end. Returns `None` for an out-of-range band index.
    pub fn invert_extent(&self, band: usize) -> Option<(Option<f64>, Option<f64>)> {
        if band >= self.range.len() {
            return None;
        }
        let low = band.checked_sub(1).map(|i| self.thresholds[i]);
        let high = self.thresholds.get(band).copied();
        Some((low, high))
    }
}

impl<C: PartialEq> ThresholdScale<C> {
    /// Band index of the first band bound to `color`.
    pub fn band_of(&self, color: &C) -> Option<usize> {
        self.range.iter().position(|c| c == color)
    }
}
