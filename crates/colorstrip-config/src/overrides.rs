//! Partial option sets and their layering.

use std::path::Path;
use std::str::FromStr;

use colorstrip_core::Theme;
use serde::Deserialize;
use tracing::debug;

use crate::settings::{Settings, default_config_path};
use crate::{ConfigError, Result};

const DEFAULT_STRIP_COUNT: usize = 10;
const DEFAULT_DIVERSITY_RATIO: f64 = 0.25;
const DEFAULT_SPEED_FACTOR: f64 = 1.0;
const DEFAULT_RADIUS_FACTOR: f64 = 1.0;
const DEFAULT_SIGMA_BOUND: f64 = std::f64::consts::PI / 24.0;

/// A partial set of options. Unset fields fall through to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Overrides {
    #[serde(alias = "strip_count")]
    pub strip_count: Option<usize>,
    #[serde(alias = "diversity_ratio")]
    pub diversity_ratio: Option<f64>,
    pub theme: Option<Theme>,
    #[serde(alias = "speed_factor")]
    pub speed_factor: Option<f64>,
    #[serde(alias = "radius_factor")]
    pub radius_factor: Option<f64>,
    #[serde(alias = "secondary_radius_factor")]
    pub secondary_radius_factor: Option<f64>,
    pub seed: Option<u64>,
    #[serde(alias = "palette_seed")]
    pub palette_seed: Option<u64>,
    #[serde(alias = "strip_circle_seed")]
    pub strip_circle_seed: Option<u64>,
    #[serde(alias = "base_hue", alias = "baseHue")]
    pub hue: Option<f64>,
    #[serde(alias = "sigma_bound")]
    pub sigma_bound: Option<f64>,
}

impl Overrides {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&source)
    }

    /// Read the user config file, or nothing when it does not exist.
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a parameter fragment such as `#theme=dark#stripCount=6` or
    /// `theme=dark&stripCount=6`.
    pub fn from_fragment(fragment: &str) -> Result<Self> {
        let mut overrides = Self::default();
        for piece in fragment
            .split(['#', '&', '?'])
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
        {
            let (key, value) = piece
                .split_once('=')
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: piece.to_string(),
                    value: String::new(),
                })?;
            overrides.set(key.trim(), value.trim())?;
        }
        Ok(overrides)
    }

    /// Set one option from its textual form.
    ///
    /// Keys are matched ignoring case, `_` and `-`, so `stripCount`,
    /// `strip_count` and `strip-count` are equivalent.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let normalized: String = key
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "stripcount" => self.strip_count = Some(parse(key, value)?),
            "diversityratio" => self.diversity_ratio = Some(parse(key, value)?),
            "theme" => self.theme = Some(parse(key, value)?),
            "speedfactor" => self.speed_factor = Some(parse(key, value)?),
            "radiusfactor" => self.radius_factor = Some(parse(key, value)?),
            "secondaryradiusfactor" => self.secondary_radius_factor = Some(parse(key, value)?),
            "seed" => self.seed = Some(parse(key, value)?),
            "paletteseed" => self.palette_seed = Some(parse(key, value)?),
            "stripcircleseed" => self.strip_circle_seed = Some(parse(key, value)?),
            "hue" | "basehue" => self.hue = Some(parse(key, value)?),
            "sigmabound" => self.sigma_bound = Some(parse(key, value)?),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Layer `higher` on top of `self`; set fields of `higher` win.
    pub fn merge(self, higher: Overrides) -> Overrides {
        Overrides {
            strip_count: higher.strip_count.or(self.strip_count),
            diversity_ratio: higher.diversity_ratio.or(self.diversity_ratio),
            theme: higher.theme.or(self.theme),
            speed_factor: higher.speed_factor.or(self.speed_factor),
            radius_factor: higher.radius_factor.or(self.radius_factor),
            secondary_radius_factor: higher
                .secondary_radius_factor
                .or(self.secondary_radius_factor),
            seed: higher.seed.or(self.seed),
            palette_seed: higher.palette_seed.or(self.palette_seed),
            strip_circle_seed: higher.strip_circle_seed.or(self.strip_circle_seed),
            hue: higher.hue.or(self.hue),
            sigma_bound: higher.sigma_bound.or(self.sigma_bound),
        }
    }

    /// Apply defaults and validate.
    ///
    /// `fallback_seed` is used when no seed is set; the palette and motion
    /// seeds default to the seed, the secondary radius to the primary one.
    pub fn resolve(self, fallback_seed: u64) -> Result<Settings> {
        let seed = self.seed.unwrap_or(fallback_seed);
        let radius_factor = self.radius_factor.unwrap_or(DEFAULT_RADIUS_FACTOR);
        let settings = Settings {
            strip_count: self.strip_count.unwrap_or(DEFAULT_STRIP_COUNT),
            diversity_ratio: self.diversity_ratio.unwrap_or(DEFAULT_DIVERSITY_RATIO),
            theme: self.theme.unwrap_or_default(),
            speed_factor: self.speed_factor.unwrap_or(DEFAULT_SPEED_FACTOR),
            radius_factor,
            secondary_radius_factor: self.secondary_radius_factor.unwrap_or(radius_factor),
            seed,
            palette_seed: self.palette_seed.unwrap_or(seed),
            strip_circle_seed: self.strip_circle_seed.unwrap_or(seed),
            hue: self.hue,
            sigma_bound: self.sigma_bound.unwrap_or(DEFAULT_SIGMA_BOUND),
        };
        settings.validate()?;
        Ok(settings)
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Overrides::default().resolve(1234).unwrap();
        assert_eq!(settings.strip_count, 10);
        assert_eq!(settings.diversity_ratio, 0.25);
        assert_eq!(settings.theme, Theme::Pastelle);
        assert_eq!(settings.speed_factor, 1.0);
        assert_eq!(settings.radius_factor, 1.0);
        assert_eq!(settings.secondary_radius_factor, 1.0);
        assert_eq!(settings.seed, 1234);
        assert_eq!(settings.palette_seed, 1234);
        assert_eq!(settings.strip_circle_seed, 1234);
        assert_eq!(settings.hue, None);
    }

    #[test]
    fn test_dependent_defaults_follow_their_source() {
        let overrides = Overrides {
            seed: Some(7),
            radius_factor: Some(0.8),
            palette_seed: Some(99),
            ..Default::default()
        };
        let settings = overrides.resolve(1).unwrap();
        assert_eq!(settings.secondary_radius_factor, 0.8);
        assert_eq!(settings.palette_seed, 99);
        assert_eq!(settings.strip_circle_seed, 7);
    }

    #[test]
    fn test_fragment_parsing() {
        let overrides =
            Overrides::from_fragment("#theme=dark#stripCount=6#diversity_ratio=0.4#hue=200")
                .unwrap();
        assert_eq!(overrides.theme, Some(Theme::Dark));
        assert_eq!(overrides.strip_count, Some(6));
        assert_eq!(overrides.diversity_ratio, Some(0.4));
        assert_eq!(overrides.hue, Some(200.0));

        let query = Overrides::from_fragment("?seed=42&speed-factor=2").unwrap();
        assert_eq!(query.seed, Some(42));
        assert_eq!(query.speed_factor, Some(2.0));
    }

    #[test]
    fn test_fragment_errors() {
        assert!(matches!(
            Overrides::from_fragment("#colour=red"),
            Err(ConfigError::UnknownKey(key)) if key == "colour"
        ));
        assert!(matches!(
            Overrides::from_fragment("#theme=sepia"),
            Err(ConfigError::InvalidValue { key, .. }) if key == "theme"
        ));
        assert!(matches!(
            Overrides::from_fragment("#stripCount"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(Overrides::from_fragment("#seed=-3").is_err());
    }

    #[test]
    fn test_empty_fragment() {
        assert_eq!(Overrides::from_fragment("").unwrap(), Overrides::default());
        assert_eq!(Overrides::from_fragment("##&").unwrap(), Overrides::default());
    }

    #[test]
    fn test_merge_priority() {
        let file = Overrides {
            theme: Some(Theme::Light),
            strip_count: Some(4),
            ..Default::default()
        };
        let flags = Overrides {
            theme: Some(Theme::Dark),
            ..Default::default()
        };
        let merged = file.merge(flags);
        assert_eq!(merged.theme, Some(Theme::Dark));
        assert_eq!(merged.strip_count, Some(4));
    }

    #[test]
    fn test_toml_layer() {
        let overrides = Overrides::from_toml_str(
            r#"
            theme = "twilight"
            stripCount = 12
            speed_factor = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(overrides.theme, Some(Theme::Twilight));
        assert_eq!(overrides.strip_count, Some(12));
        assert_eq!(overrides.speed_factor, Some(0.5));

        assert!(matches!(
            Overrides::from_toml_str("unknown = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation() {
        let cases = [
            Overrides {
                strip_count: Some(0),
                ..Default::default()
            },
            Overrides {
                diversity_ratio: Some(1.5),
                ..Default::default()
            },
            Overrides {
                speed_factor: Some(0.0),
                ..Default::default()
            },
            Overrides {
                hue: Some(360.0),
                ..Default::default()
            },
            Overrides {
                radius_factor: Some(f64::NAN),
                ..Default::default()
            },
        ];
        for overrides in cases {
            assert!(
                matches!(overrides.clone().resolve(1), Err(ConfigError::Invalid(_))),
                "{overrides:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_settings_toml_round_trip() {
        let settings = Overrides {
            hue: Some(42.0),
            ..Default::default()
        }
        .resolve(5)
        .unwrap();
        let text = settings.to_toml().unwrap();
        let reloaded = Overrides::from_toml_str(&text).unwrap().resolve(0).unwrap();
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Overrides::load(Path::new("/nonexistent/colorstrip/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
