//! Tick and label formatting: years, month names, temperatures, locales.

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// Degree Celsius sign used in labels.
pub const CELSIUS: &str = "℃";

/// Four-digit year label (`%Y`).
pub fn format_year(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{:04}", year)
    }
}

/// Full month name for a 0-based month index, read off the 1970 calendar.
pub fn month_name(month: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(1970, month.checked_add(1)?, 1).map(|d| d.format("%B").to_string())
}

/// Years that fall on a decade boundary, in input order.
pub fn decade_ticks(years: &[i32]) -> Vec<i32> {
    years
        .iter()
        .copied()
        .filter(|y| y.rem_euclid(10) == 0)
        .collect()
}

/// One decimal place with the given decimal separator. Ties round away from
/// zero (`0.25` -> `0.3`).
pub fn format_fixed1(value: f64, decimal_sep: char) -> String {
    localize(format!("{:.1}", round1(value)), decimal_sep)
}

/// One decimal place with an explicit sign (`+0.3`, `-0.5`).
pub fn format_signed1(value: f64, decimal_sep: char) -> String {
    localize(format!("{:+.1}", round1(value)), decimal_sep)
}

/// `{:.1}` alone rounds exact ties to even.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn localize(s: String, decimal_sep: char) -> String {
    if decimal_sep == '.' {
        s
    } else {
        s.replace('.', &decimal_sep.to_string())
    }
}

/// Integer with locale digit grouping (`3,153` vs `3.153`).
pub fn format_count(n: usize, locale: &Locale) -> String {
    (n as u64).to_formatted_string(locale)
}

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'),
    }
}

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_follow_calendar() {
        assert_eq!(month_name(0).as_deref(), Some("January"));
        assert_eq!(month_name(11).as_deref(), Some("December"));
        assert_eq!(month_name(12), None);
    }

    #[test]
    fn years_are_four_digits() {
        assert_eq!(format_year(1753), "1753");
        assert_eq!(format_year(800), "0800");
    }

    #[test]
    fn decade_filter() {
        assert_eq!(decade_ticks(&[1753, 1760, 1761, 1770, 2000]), vec![1760, 1770, 2000]);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_fixed1(0.25, '.'), "0.3");
        assert_eq!(format_fixed1(-0.25, '.'), "-0.3");
        assert_eq!(format_signed1(-0.25, '.'), "-0.3");
        assert_eq!(format_signed1(0.75, ','), "+0,8");
        assert_eq!(format_fixed1(7.75, '.'), "7.8");
    }

    #[test]
    fn locale_separators() {
        assert_eq!(format_fixed1(7.46, '.'), "7.5");
        assert_eq!(format_fixed1(7.46, ','), "7,5");
        assert_eq!(format_signed1(0.34, '.'), "+0.3");
        assert_eq!(format_signed1(-0.5, ','), "-0,5");
        let (de_locale, sep) = map_locale("DE");
        assert_eq!(sep, ',');
        assert_eq!(format_count(3153, de_locale), "3.153");
        assert_eq!(format_count(3153, map_locale("en").0), "3,153");
    }
}
