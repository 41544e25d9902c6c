use temp_heatmap::legend::{build_legend, swatches};
use temp_heatmap::palette::default_palette;
use temp_heatmap::scale::ThresholdScale;

#[test]
fn swatches_cover_domain_without_gaps() {
    let s = ThresholdScale::evenly_spaced(1.684, 13.888, default_palette()).unwrap();
    let sw = swatches(&s);
    assert_eq!(sw.len(), 11);
    assert_eq!(sw[0].range_start, 1.684);
    assert_eq!(sw[10].range_end, 13.888);
    for pair in sw.windows(2) {
        assert_eq!(pair[0].range_end, pair[1].range_start);
    }
    for (i, swatch) in sw.iter().enumerate() {
        assert!(swatch.range_start < swatch.range_end);
        assert_eq!(swatch.color, s.range()[i]);
        // The band a swatch represents maps back to its own colour.
        assert_eq!(*s.color(swatch.range_start), swatch.color);
    }
}

#[test]
fn single_band_legend_spans_domain() {
    let s = ThresholdScale::evenly_spaced(0.0, 2.0, vec!["only"]).unwrap();
    let sw = swatches(&s);
    assert_eq!(sw.len(), 1);
    assert_eq!((sw[0].range_start, sw[0].range_end), (0.0, 2.0));
}

#[test]
fn layout_widths_are_proportional_and_fill_the_legend() {
    let s = ThresholdScale::evenly_spaced(5.0, 15.0, (0..11).collect::<Vec<u8>>()).unwrap();
    let legend = build_legend(&s, 400.0, '.');

    assert_eq!(legend.swatches.len(), 11);
    assert_eq!(legend.swatches[0].x, 0.0);
    let total: f64 = legend.swatches.iter().map(|p| p.width).sum();
    assert!((total - 400.0).abs() < 1e-9);
    for p in &legend.swatches {
        assert!((p.width - 400.0 / 11.0).abs() < 1e-9);
    }
    for pair in legend.swatches.windows(2) {
        assert!((pair[0].x + pair[0].width - pair[1].x).abs() < 1e-9);
    }
}

#[test]
fn ticks_sit_on_every_threshold_with_one_decimal() {
    let s = ThresholdScale::evenly_spaced(5.0, 15.0, (0..11).collect::<Vec<u8>>()).unwrap();
    let legend = build_legend(&s, 400.0, '.');
    assert_eq!(legend.ticks.len(), 10);
    assert_eq!(legend.ticks[0].label, "5.9");
    assert_eq!(legend.ticks[9].label, "14.1");
    for (tick, t) in legend.ticks.iter().zip(s.thresholds()) {
        assert_eq!(tick.value, *t);
        assert!((tick.x - (t - 5.0) / 10.0 * 400.0).abs() < 1e-9);
    }

    let de = build_legend(&s, 400.0, ',');
    assert_eq!(de.ticks[0].label, "5,9");
}

#[test]
fn near_degenerate_domain_still_has_positive_swatches() {
    let min = 10.0_f64;
    let max = f64::from_bits(min.to_bits() + 1);
    let s = ThresholdScale::evenly_spaced(min, max, default_palette()).unwrap();

    let t = s.thresholds();
    assert_eq!(t.len(), 10);
    assert!(t.windows(2).all(|w| w[0] < w[1]));
    assert!(t[0] > s.domain().0 && t[9] < s.domain().1);
    assert!(swatches(&s).iter().all(|sw| sw.range_start < sw.range_end));
    // The data itself still sits inside the widened domain.
    assert!(s.domain().0 < min && max < s.domain().1);
}
