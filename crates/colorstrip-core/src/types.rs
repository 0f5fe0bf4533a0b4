//! Theme, speed and geometry types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A 2D point, `[x, y]`.
pub type Point = [f64; 2];

/// A quadrilateral in vertex winding order.
pub type Polygon = [Point; 4];

/// Palette theme: background selection and luminosity/saturation adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Pastelle,
    Twilight,
    Dark,
}

impl Theme {
    /// All themes in cycling order.
    pub const ALL: [Theme; 4] = [Theme::Light, Theme::Pastelle, Theme::Twilight, Theme::Dark];

    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Pastelle,
            Theme::Pastelle => Theme::Twilight,
            Theme::Twilight => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Pastelle => "pastelle",
            Theme::Twilight => "twilight",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidConfiguration(format!("unknown theme {s:?}")))
    }
}

/// Interactive speed control applied on top of the elapsed frame time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Get the next speed in the cycle.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Multiplier turning elapsed milliseconds into a time increment.
    pub fn time_scale(self) -> f64 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Get the display name of this speed.
    pub fn name(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "Slow",
            AnimationSpeed::Medium => "Medium",
            AnimationSpeed::Fast => "Fast",
        }
    }
}
