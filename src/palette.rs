//! Colour tokens and the diverging temperature palette.

use crate::error::{HeatmapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(HeatmapError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| HeatmapError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb8 {
    type Err = HeatmapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// ColorBrewer RdYlBu, 11 classes, listed red (hot) to blue (cold).
const RD_YL_BU_11: [Rgb8; 11] = [
    Rgb8::new(0xa5, 0x00, 0x26),
    Rgb8::new(0xd7, 0x30, 0x27),
    Rgb8::new(0xf4, 0x6d, 0x43),
    Rgb8::new(0xfd, 0xae, 0x61),
    Rgb8::new(0xfe, 0xe0, 0x90),
    Rgb8::new(0xff, 0xff, 0xbf),
    Rgb8::new(0xe0, 0xf3, 0xf8),
    Rgb8::new(0xab, 0xd9, 0xe9),
    Rgb8::new(0x74, 0xad, 0xd1),
    Rgb8::new(0x45, 0x75, 0xb4),
    Rgb8::new(0x31, 0x36, 0x95),
];

/// Default heatmap palette, coldest band first (`RD_YL_BU_11` reversed).
pub fn default_palette() -> Vec<Rgb8> {
    RD_YL_BU_11.iter().rev().copied().collect()
}

/// Parse a comma/semicolon separated list of hex colours, coldest first.
pub fn parse_palette(spec: &str) -> Result<Vec<Rgb8>> {
    let colors = spec
        .split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Rgb8::from_hex)
        .collect::<Result<Vec<_>>>()?;
    if colors.is_empty() {
        return Err(HeatmapError::EmptyPalette);
    }
    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_runs_cold_to_hot() {
        let p = default_palette();
        assert_eq!(p.len(), 11);
        assert_eq!(p[0].to_hex(), "#313695");
        assert_eq!(p[5].to_hex(), "#ffffbf");
        assert_eq!(p[10].to_hex(), "#a50026");
    }

    #[test]
    fn hex_parsing_accepts_optional_hash() {
        assert_eq!(Rgb8::from_hex("#A50026").unwrap(), Rgb8::new(165, 0, 38));
        assert_eq!("313695".parse::<Rgb8>().unwrap(), Rgb8::new(49, 54, 149));
        assert!(Rgb8::from_hex("#12345").is_err());
        assert!(Rgb8::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn palette_list_parsing() {
        let p = parse_palette("#000000, #ffffff;#ff0000").unwrap();
        assert_eq!(p.len(), 3);
        assert!(matches!(parse_palette(" , "), Err(HeatmapError::EmptyPalette)));
    }
}
