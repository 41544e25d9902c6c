//! Derive the axis series and temperature extent from a raw payload.

use crate::error::{HeatmapError, Result};
use crate::models::{Dataset, MONTHS_PER_YEAR, TemperaturePayload, TemperatureRecord};
use serde::Serialize;
use std::collections::BTreeSet;

/// Min/max absolute temperature across all records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureExtent {
    pub min: f64,
    pub max: f64,
}

/// Secondary series derived from a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSeries {
    /// Distinct years, ascending.
    pub years: Vec<i32>,
    /// Month indices `0..12`.
    pub months: Vec<u32>,
    pub variances: Vec<f64>,
    pub extent: TemperatureExtent,
}

/// Re-base calendar months (1..=12) to 0-based indices and validate the set.
///
/// ### Errors
/// - `EmptyDataset` when the payload carries no records
/// - `InvalidMonth` when any month lies outside `1..=12`
pub fn normalize(payload: TemperaturePayload) -> Result<Dataset> {
    let records = payload
        .monthly_variance
        .into_iter()
        .map(|r| {
            if !(1..=i64::from(MONTHS_PER_YEAR)).contains(&r.month) {
                return Err(HeatmapError::InvalidMonth {
                    year: r.year,
                    month: r.month,
                });
            }
            Ok(TemperatureRecord {
                year: r.year,
                month: (r.month - 1) as u32,
                variance: r.variance,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let dataset = Dataset::new(payload.base_temperature, records)?;
    log::debug!(
        "normalized {} records (base temperature {})",
        dataset.len(),
        dataset.base_temperature()
    );
    Ok(dataset)
}

/// Unique years in numeric ascending order.
pub fn distinct_years(dataset: &Dataset) -> Vec<i32> {
    let years: BTreeSet<i32> = dataset.records().iter().map(|r| r.year).collect();
    years.into_iter().collect()
}

/// The fixed month axis.
pub fn month_indices() -> Vec<u32> {
    (0..MONTHS_PER_YEAR).collect()
}

pub fn variances(dataset: &Dataset) -> Vec<f64> {
    dataset.records().iter().map(|r| r.variance).collect()
}

/// Min/max of `base_temperature + variance`. Infallible because a `Dataset`
/// is never empty.
pub fn temperature_extent(dataset: &Dataset) -> TemperatureExtent {
    let (min_var, max_var) = dataset.records().iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), r| (lo.min(r.variance), hi.max(r.variance)),
    );
    TemperatureExtent {
        min: dataset.base_temperature() + min_var,
        max: dataset.base_temperature() + max_var,
    }
}

/// All derived series in one pass over the public helpers.
pub fn derive_series(dataset: &Dataset) -> NormalizedSeries {
    NormalizedSeries {
        years: distinct_years(dataset),
        months: month_indices(),
        variances: variances(dataset),
        extent: temperature_extent(dataset),
    }
}
