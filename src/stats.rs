use crate::format::month_name;
use crate::models::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary of absolute temperatures for one calendar month across all years.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    /// 0-based month index.
    pub month: u32,
    pub month_name: String,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Per-month statistics, ordered January..December. Months without readings
/// are omitted.
pub fn monthly_summary(dataset: &Dataset) -> Vec<MonthlySummary> {
    let mut groups: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for r in dataset.records() {
        groups
            .entry(r.month)
            .or_default()
            .push(dataset.temperature_of(r));
    }

    let mut out = Vec::new();
    for (month, mut vals) in groups {
        vals.sort_by(|a, b| a.total_cmp(b));
        let count = vals.len();
        let mean = vals.iter().copied().sum::<f64>() / count as f64;
        let median = if count % 2 == 1 {
            vals[count / 2]
        } else {
            (vals[count / 2 - 1] + vals[count / 2]) / 2.0
        };
        out.push(MonthlySummary {
            month,
            month_name: month_name(month).unwrap_or_default(),
            count,
            min: vals[0],
            max: vals[count - 1],
            mean,
            median,
        });
    }
    out
}
