use std::fs;
use temp_heatmap::HeatmapError;
use temp_heatmap::models::{Dataset, TemperatureRecord};
use temp_heatmap::palette::default_palette;
use temp_heatmap::render::{self, ChartConfig, HeatmapChart};

fn chart() -> HeatmapChart {
    let records = (1750..1760)
        .flat_map(|year| {
            (0..12u32).map(move |month| TemperatureRecord {
                year,
                month,
                variance: (year - 1750) as f64 * 0.2 - month as f64 * 0.1,
            })
        })
        .collect();
    let dataset = Dataset::new(8.66, records).unwrap();
    HeatmapChart::new(dataset, default_palette(), ChartConfig::default()).unwrap()
}

#[test]
fn svg_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("heatmap.svg");
    render::export_chart(&chart(), &out, None).unwrap();

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("January"));
    assert!(svg.contains("1750"));
    assert!(svg.contains(render::DEFAULT_TITLE));
}

#[test]
fn bitmap_export_without_font_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("heatmap.png");
    let err = render::export_chart(&chart(), &out, None).unwrap_err();
    assert!(err.to_string().contains("font"));
    assert!(!out.exists());
}

#[test]
fn scene_serializes_to_json() {
    let scene = chart().to_scene().unwrap();
    let json = serde_json::to_value(&scene).unwrap();
    assert_eq!(json["cells"].as_array().unwrap().len(), 120);
    assert_eq!(json["cells"][0]["meta"]["year"], 1750);
    assert!(json["cells"][0]["fill"]["r"].is_u64());
    assert_eq!(json["rects"].as_array().unwrap().len(), 11);
}

#[test]
fn bitmap_export_rejects_non_font_file() {
    let dir = tempfile::tempdir().unwrap();
    let font = dir.path().join("not-a-font.ttf");
    fs::write(&font, "plain text, not TrueType").unwrap();
    let out = dir.path().join("heatmap.png");

    let err = render::export_chart(&chart(), &out, Some(font.as_path())).unwrap_err();
    assert!(matches!(err, HeatmapError::Render(ref msg) if msg.contains("invalid font")));
    assert!(!out.exists());
}
