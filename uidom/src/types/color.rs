use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// A color as understood by the host renderer.
///
/// Parsed from CSS-like strings: `transparent`, `#rgb`, `#rrggbb`, or a CSS
/// color keyword such as `orange`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum Color {
    Transparent,
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse color '{0}'")]
pub struct ParseColorError(pub String);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn hex(value: u32) -> Self {
        Self::Rgb {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Self::Transparent);
        }

        if trimmed.starts_with('#') {
            let srgb = palette::Srgb::<u8>::from_str(trimmed)
                .map_err(|_| ParseColorError(s.to_string()))?;
            return Ok(Self::rgb(srgb.red, srgb.green, srgb.blue));
        }

        palette::named::from_str(&trimmed.to_ascii_lowercase())
            .map(|named| Self::rgb(named.red, named.green, named.blue))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
