use temp_heatmap::models::{Dataset, TemperatureRecord};
use temp_heatmap::stats::monthly_summary;

fn rec(year: i32, month: u32, variance: f64) -> TemperatureRecord {
    TemperatureRecord {
        year,
        month,
        variance,
    }
}

#[test]
fn summary_per_month() {
    let ds = Dataset::new(
        10.0,
        vec![
            rec(1900, 0, -1.0),
            rec(1901, 0, 1.0),
            rec(1902, 0, 3.0),
            rec(1900, 6, 0.5),
            rec(1901, 6, 1.5),
        ],
    )
    .unwrap();
    let summary = monthly_summary(&ds);
    assert_eq!(summary.len(), 2);

    let jan = &summary[0];
    assert_eq!(jan.month, 0);
    assert_eq!(jan.month_name, "January");
    assert_eq!(jan.count, 3);
    assert_eq!(jan.min, 9.0);
    assert_eq!(jan.max, 13.0);
    assert_eq!(jan.mean, 11.0);
    assert_eq!(jan.median, 11.0);

    let jul = &summary[1];
    assert_eq!(jul.month_name, "July");
    assert_eq!(jul.count, 2);
    assert_eq!(jul.median, 11.0);
}

#[test]
fn months_are_ordered_regardless_of_input() {
    let ds = Dataset::new(0.0, vec![rec(2000, 11, 1.0), rec(2000, 3, 2.0), rec(2000, 0, 3.0)])
        .unwrap();
    let months: Vec<u32> = monthly_summary(&ds).iter().map(|s| s.month).collect();
    assert_eq!(months, vec![0, 3, 11]);
}
