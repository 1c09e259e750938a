#![allow(clippy::many_single_char_names)]
use std::fmt::Display;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

lazy_static::lazy_static! {
    static ref ARGB_HEX_REGEX: Regex = Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
    static ref RGB_HEX_REGEX: Regex = Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// A color with four unsigned 8 bit channels (alpha, red, green, blue).
///
/// Equality is exact channel equality. The packed representation matches
/// the usual `0xAARRGGBB` integer layout.
#[derive(Debug, Clone, Copy, Default, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub(crate) a: u8,
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Color: a={:02X}, r={:02X}, g={:02X}, b={:02X}}}", self.a, self.r, self.g, self.b)
    }
}

impl Color {
    pub const TRANSPARENT: Color = Color::argb(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color::rgb(0xFF, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 0xFF, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 0xFF);

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color { a, r, g, b }
    }

    /// Opaque color from red/green/blue
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { a: 0xFF, r, g, b }
    }

    pub const fn from_argb(packed: u32) -> Self {
        Color {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    pub fn get_argb(&self) -> (u8, u8, u8, u8) {
        (self.a, self.r, self.g, self.b)
    }

    pub fn alpha(&self) -> u8 {
        self.a
    }

    /// Squared Euclidean distance across the four channels.
    ///
    /// The maximum value is `4 * 255^2 = 260100`, reached by two colors
    /// maximally far apart on every channel.
    pub fn distance_squared(self, other: Color) -> u32 {
        let da = (self.a as i32 - other.a as i32).unsigned_abs();
        let dr = (self.r as i32 - other.r as i32).unsigned_abs();
        let dg = (self.g as i32 - other.g as i32).unsigned_abs();
        let db = (self.b as i32 - other.b as i32).unsigned_abs();
        da * da + dr * dr + dg * dg + db * db
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
    }

    /// Parse `#AARRGGBB` or `#RRGGBB` (the latter is opaque).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidHexColor` if the string doesn't match
    /// either format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        if let Some(cap) = ARGB_HEX_REGEX.captures(hex) {
            let (_, [a, r, g, b]) = cap.extract();
            return Ok(Color::argb(parse_channel(a)?, parse_channel(r)?, parse_channel(g)?, parse_channel(b)?));
        }
        if let Some(cap) = RGB_HEX_REGEX.captures(hex) {
            let (_, [r, g, b]) = cap.extract();
            return Ok(Color::rgb(parse_channel(r)?, parse_channel(g)?, parse_channel(b)?));
        }
        Err(EngineError::invalid_hex_color(hex))
    }
}

fn parse_channel(value: &str) -> Result<u8> {
    u8::from_str_radix(value, 16).map_err(|_| EngineError::invalid_hex_color(value))
}

impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        self.a == other.a && self.r == other.r && self.g == other.g && self.b == other.b
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color::from_argb(value)
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> u32 {
        value.to_argb()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Color::rgb(value.0, value.1, value.2)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8, u8)) -> Self {
        Color::argb(value.0, value.1, value.2, value.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_round_trip() {
        let color = Color::from_argb(0xFFAA_EEAA);
        assert_eq!(color.get_argb(), (0xFF, 0xAA, 0xEE, 0xAA));
        assert_eq!(color.to_argb(), 0xFFAA_EEAA);
    }

    #[test]
    fn test_distance_squared_is_symmetric() {
        let a = Color::from_argb(0xFFAA_EEAA);
        let b = Color::WHITE;
        assert_eq!(a.distance_squared(b), b.distance_squared(a));
    }

    #[test]
    fn test_distance_squared_extremes() {
        assert_eq!(Color::WHITE.distance_squared(Color::WHITE), 0);
        // All four channels maximally apart
        assert_eq!(Color::TRANSPARENT.distance_squared(Color::WHITE), 4 * 255 * 255);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::RED);
        assert_eq!(Color::from_hex("#80ffffff").unwrap(), Color::argb(0x80, 0xFF, 0xFF, 0xFF));
        assert!(Color::from_hex("#ff00").is_err());
        assert!(Color::from_hex("not a color").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::RED.to_hex(), "#ffff0000");
    }
}
