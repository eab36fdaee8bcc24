use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// A 24-bit RGB color.
///
/// In presets it is written either as an integer (`16777215`) or as a hex
/// string (`"#ffffff"`, `"0xffffff"`, `"ffffff"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "u32")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    ///
    /// # Errors
    ///
    /// Returns an error if `hex` does not fit in 24 bits.
    pub fn from_hex(hex: u32) -> Result<Self, ConfigurationError> {
        if hex > 0x00ff_ffff {
            return Err(ConfigurationError::InvalidColor(format!("{hex:#x}")));
        }
        let [_, r, g, b] = hex.to_be_bytes();
        Ok(Self { r, g, b })
    }

    /// Packed `0xRRGGBB` value.
    #[must_use]
    pub fn to_hex(self) -> u32 {
        u32::from_be_bytes([0, self.r, self.g, self.b])
    }

    /// Channels scaled to `[0, 1]`.
    #[must_use]
    pub fn normalized(self) -> NormalizedColor {
        NormalizedColor {
            r: f32::from(self.r) / 255.0,
            g: f32::from(self.g) / 255.0,
            b: f32::from(self.b) / 255.0,
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.is_empty() || digits.len() > 6 {
            return Err(ConfigurationError::InvalidColor(s.to_owned()));
        }
        let hex = u32::from_str_radix(digits, 16)
            .map_err(|_| ConfigurationError::InvalidColor(s.to_owned()))?;
        Self::from_hex(hex)
    }
}

impl From<Rgb> for u32 {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Packed(u32),
    Text(String),
}

impl TryFrom<ColorRepr> for Rgb {
    type Error = ConfigurationError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Packed(hex) => Self::from_hex(hex),
            ColorRepr::Text(text) => text.parse(),
        }
    }
}

/// A color with each channel in `[0, 1]`, ready for a vertex color buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_splits_channels() {
        let c = Rgb::from_hex(0x12_34_56).unwrap();
        assert_eq!(c, Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(c.to_hex(), 0x12_34_56);
    }

    #[test]
    fn from_hex_rejects_more_than_24_bits() {
        assert!(Rgb::from_hex(0x0100_0000).is_err());
    }

    #[test]
    fn parse_hex_strings() {
        assert_eq!("#ff8000".parse::<Rgb>().unwrap(), Rgb::new(0xff, 0x80, 0x00));
        assert_eq!("0x00ff00".parse::<Rgb>().unwrap(), Rgb::new(0, 0xff, 0));
        assert_eq!("0000ff".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 0xff));
        assert!("#zzzzzz".parse::<Rgb>().is_err());
        assert!("#".parse::<Rgb>().is_err());
        assert!("#1234567".parse::<Rgb>().is_err());
    }

    #[test]
    fn normalized_channels() {
        let n = Rgb::new(255, 0, 51).normalized();
        assert!((n.r - 1.0).abs() < f32::EPSILON);
        assert!(n.g.abs() < f32::EPSILON);
        assert!((n.b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn serde_accepts_integer_and_string() {
        let a: Rgb = serde_json::from_str("16711680").unwrap();
        let b: Rgb = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), "16711680");
        assert!(serde_json::from_str::<Rgb>("\"red\"").is_err());
    }
}
