use crate::format::month_name;
use crate::models::Dataset;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save normalized readings as CSV with header. `month` is the 0-based index.
pub fn save_csv<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("year", "month", "month_name", "variance", "temperature"))?;
    for r in dataset.records() {
        wtr.serialize((
            r.year,
            r.month,
            month_name(r.month).unwrap_or_default(),
            r.variance,
            dataset.temperature_of(r),
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the normalized dataset as pretty JSON.
pub fn save_json<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(dataset)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TemperatureRecord;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let ds = Dataset::new(
            8.0,
            vec![TemperatureRecord {
                year: 1900,
                month: 0,
                variance: -0.5,
            }],
        )
        .unwrap();
        save_csv(&ds, &csvp).unwrap();
        save_json(&ds, &jsonp).unwrap();

        let csv_text = std::fs::read_to_string(&csvp).unwrap();
        assert!(csv_text.starts_with("year,month,month_name,variance,temperature"));
        assert!(csv_text.contains("1900,0,January,-0.5,7.5"));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&jsonp).unwrap()).unwrap();
        assert_eq!(json["base_temperature"], 8.0);
        assert_eq!(json["records"][0]["year"], 1900);
    }
}
