//! Fully resolved settings.

use std::path::PathBuf;

use colorstrip_core::Theme;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Every option of the animation, with dependent defaults already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Number of quads, and of palette colors.
    pub strip_count: usize,
    /// Hue spread of the palette, in `[0, 1]`.
    pub diversity_ratio: f64,
    pub theme: Theme,
    /// Multiplier on the oscillators' random kicks.
    pub speed_factor: f64,
    /// Horizontal radius as a fraction of the largest circle fitting the surface.
    pub radius_factor: f64,
    /// Vertical radius factor; defaults to `radius_factor`.
    pub secondary_radius_factor: f64,
    pub seed: u64,
    /// Seed of the palette stream; defaults to `seed`.
    pub palette_seed: u64,
    /// Seed of the motion stream; defaults to `seed`.
    pub strip_circle_seed: u64,
    /// Base hue override, in `[0, 360)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue: Option<f64>,
    /// Bound of the sigma offset, in radians.
    pub sigma_bound: f64,
}

impl Settings {
    /// Check every range constraint.
    pub fn validate(&self) -> Result<()> {
        if self.strip_count == 0 {
            return Err(invalid("stripCount must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&self.diversity_ratio) {
            return Err(invalid("diversityRatio must be within [0, 1]"));
        }
        if !is_positive(self.speed_factor) {
            return Err(invalid("speedFactor must be positive"));
        }
        if !is_positive(self.radius_factor) || !is_positive(self.secondary_radius_factor) {
            return Err(invalid("radius factors must be positive"));
        }
        if !is_positive(self.sigma_bound) {
            return Err(invalid("sigmaBound must be positive"));
        }
        if let Some(hue) = self.hue
            && !(0.0..360.0).contains(&hue)
        {
            return Err(invalid("hue must be within [0, 360)"));
        }
        Ok(())
    }

    /// Serialize as a TOML config file.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Invalid(message.to_string())
}

/// Location of the user config file, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "colorstrip").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// A fresh 32-bit seed.
pub fn random_seed() -> u64 {
    u64::from(rand::random::<u32>())
}
