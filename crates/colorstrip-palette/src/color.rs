//! Color utility functions for palettes.

use std::fmt;

use colorstrip_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// An opaque color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#RGB` or `#RRGGBB` (case-insensitive, leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidConfiguration(format!("invalid hex color {hex:?}"));
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Convert HSL to RGB.
///
/// `hue` in degrees, `sat` and `lum` in `[0, 1]`. Channels are rounded to
/// the nearest 8-bit value.
pub fn hsl_to_rgb(hue: f64, sat: f64, lum: f64) -> Rgb {
    let a = sat * lum.min(1.0 - lum);
    let channel = |n: f64| {
        let k = (n + hue / 30.0).rem_euclid(12.0);
        let value = lum - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * value).round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(channel(0.0), channel(8.0), channel(4.0))
}

/// Convert HSL to a `#rrggbb` string.
pub fn hsl_to_hex(hue: f64, sat: f64, lum: f64) -> String {
    hsl_to_rgb(hue, sat, lum).to_hex()
}
