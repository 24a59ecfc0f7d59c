//! `#RRGGBB` color literals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SyntaxError;

/// A 24-bit color parsed from a `#RRGGBB` literal.
///
/// Serializes as its lowercase literal, so config files can write
/// `keyword = "#c678dd"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels as `0.0..=1.0` floats.
    pub fn to_rgb_f32(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    /// True if `s` is exactly `#` followed by six hex digits.
    pub fn is_literal(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit)
    }
}

impl FromStr for HexColor {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_literal(s) {
            return Err(SyntaxError::InvalidHexColor(s.to_string()));
        }

        let channel = |at: usize| {
            u8::from_str_radix(&s[at..at + 2], 16)
                .map_err(|_| SyntaxError::InvalidHexColor(s.to_string()))
        };

        Ok(Self {
            r: channel(1)?,
            g: channel(3)?,
            b: channel(5)?,
        })
    }
}

impl TryFrom<String> for HexColor {
    type Error = SyntaxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_case() {
        let color: HexColor = "#FFa500".parse().unwrap();
        assert_eq!(color, HexColor::new(255, 165, 0));
        assert_eq!(color.to_string(), "#ffa500");
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "#", "#fff", "ffa500", "#ffa50g", "#ffa5000", "#ffa5é"] {
            assert!(bad.parse::<HexColor>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_to_rgb_f32() {
        let (r, g, b) = HexColor::new(255, 0, 51).to_rgb_f32();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < f32::EPSILON);
    }
}
