use crate::error::{HeatmapError, Result};
use serde::{Deserialize, Serialize};

/// Number of month slots on the month axis.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Document served by the temperature endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemperaturePayload {
    pub base_temperature: f64,
    pub monthly_variance: Vec<RawRecord>,
}

/// Raw entry from the endpoint. `month` is calendar-based (1 = January).
///
/// Kept as a signed integer so out-of-range months surface as a typed error
/// instead of a deserialization failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RawRecord {
    pub year: i32,
    pub month: i64,
    pub variance: f64,
}

/// One normalized monthly reading (`month` is 0-based).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TemperatureRecord {
    pub year: i32,
    pub month: u32,
    /// Deviation in °C from the dataset's base temperature.
    pub variance: f64,
}

impl TemperatureRecord {
    /// Absolute temperature of this reading.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// Validated, immutable record set.
///
/// Always holds at least one record and every month lies in `0..=11`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dataset {
    base_temperature: f64,
    records: Vec<TemperatureRecord>,
}

impl Dataset {
    /// Build a dataset from already 0-based records.
    pub fn new(base_temperature: f64, records: Vec<TemperatureRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(HeatmapError::EmptyDataset);
        }
        if let Some(bad) = records.iter().find(|r| r.month >= MONTHS_PER_YEAR) {
            return Err(HeatmapError::InvalidMonth {
                year: bad.year,
                month: i64::from(bad.month) + 1,
            });
        }
        Ok(Self {
            base_temperature,
            records,
        })
    }

    pub fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    pub fn records(&self) -> &[TemperatureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<&TemperatureRecord> {
        self.records.get(index)
    }

    /// Absolute temperature of a record of this dataset.
    pub fn temperature_of(&self, record: &TemperatureRecord) -> f64 {
        record.temperature(self.base_temperature)
    }
}
