use std::str::FromStr;

use crate::foundation::error::{GoldfishError, GoldfishResult};

/// Flat RGB color used as the blend layer when recoloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Rgb8 {
    type Err = GoldfishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Parse a config color string.
///
/// Accepts every CSS color form `csscolorparser` knows: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
/// the full CSS named-color table, and `rgb()`/`hsl()`/`hwb()` functions. Names are matched
/// case-insensitively. Any alpha component is dropped; only RGB feeds the overlay blend.
pub fn parse_color(s: &str) -> GoldfishResult<Rgb8> {
    let s = s.trim();
    if s.is_empty() {
        return Err(GoldfishError::config("color must be non-empty"));
    }
    let color = csscolorparser::parse(&s.to_ascii_lowercase())
        .map_err(|e| GoldfishError::config(format!("color \"{s}\": {e}")))?;
    let [r, g, b, _] = color.to_rgba8();
    Ok(Rgb8::new(r, g, b))
}
