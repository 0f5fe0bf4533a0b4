//! Palette generation from a seed, a diversity ratio and a theme.

use colorstrip_core::{Error, RandomSource, Result, Theme, draw};
use serde::Serialize;
use tracing::debug;

use crate::color::hsl_to_hex;

/// Inputs of [`create_palette`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteConfig {
    /// Number of colors in the palette.
    pub color_count: usize,
    /// Spread of the hues around the base hue, in `[0, 1]`. 0.25 is usually good.
    pub diversity_ratio: f64,
    pub theme: Theme,
    /// Center of the generated palette, in `[0, 360)`. Random when `None`.
    pub base_hue: Option<f64>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            color_count: 10,
            diversity_ratio: 0.25,
            theme: Theme::default(),
            base_hue: None,
        }
    }
}

impl PaletteConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.diversity_ratio) {
            return Err(Error::InvalidConfiguration(format!(
                "diversity ratio must be within [0, 1], got {}",
                self.diversity_ratio
            )));
        }
        if let Some(hue) = self.base_hue
            && !(0.0..360.0).contains(&hue)
        {
            return Err(Error::InvalidConfiguration(format!(
                "base hue must be within [0, 360), got {hue}"
            )));
        }
        Ok(())
    }
}

/// Hue regions perceived as clustered, with the boost widening their spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HueRange {
    Simple,
    LowGreen,
    HighGreen,
    Blue,
    Red,
}

impl HueRange {
    /// Classify a base hue in degrees.
    pub fn of(base_hue: f64) -> Self {
        match base_hue {
            h if (80.0..140.0).contains(&h) => HueRange::LowGreen,
            h if (140.0..180.0).contains(&h) => HueRange::HighGreen,
            h if (180.0..260.0).contains(&h) => HueRange::Blue,
            h if (300.0..360.0).contains(&h) => HueRange::Red,
            _ => HueRange::Simple,
        }
    }

    /// Multiplier applied to the hue spread.
    pub fn boost(self) -> f64 {
        match self {
            HueRange::Simple => 1.0,
            HueRange::LowGreen => 2.4,
            HueRange::HighGreen => 2.2,
            HueRange::Blue => 2.0,
            HueRange::Red => 1.8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HueRange::Simple => "simple",
            HueRange::LowGreen => "low green",
            HueRange::HighGreen => "high green",
            HueRange::Blue => "blue",
            HueRange::Red => "red",
        }
    }
}

/// Luminosity, spacing, saturation and background of a theme.
struct ThemeParams {
    base_luminosity: f64,
    spacing: f64,
    saturation: f64,
    background: &'static str,
}

impl ThemeParams {
    fn draw<R: RandomSource + ?Sized>(theme: Theme, source: &mut R) -> Result<Self> {
        Ok(match theme {
            Theme::Dark => Self {
                base_luminosity: 0.1 + 0.2 * draw(source)?,
                spacing: 0.06,
                saturation: 0.4,
                background: "#000",
            },
            Theme::Twilight => Self {
                base_luminosity: 0.15 + 0.2 * draw(source)?,
                spacing: 0.06,
                saturation: 1.0,
                background: "#111",
            },
            Theme::Light => Self {
                base_luminosity: 0.45,
                spacing: 0.04,
                saturation: 1.0,
                background: "#FFF",
            },
            Theme::Pastelle => Self {
                base_luminosity: 0.6,
                spacing: 0.1,
                saturation: 0.7,
                background: "#FFF",
            },
        })
    }
}

/// A generated palette. Immutable; regenerate to reseed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background_color: String,
    pub base_hue: f64,
    pub hue_range: HueRange,
    /// Colors index-aligned with the strip circle's quads.
    pub color_array: Vec<String>,
}

/// Generate a palette.
///
/// The base hue is always drawn from `source`, even when overridden, so the
/// luminosity draw of the dark and twilight themes stays at the same stream
/// position either way.
pub fn create_palette<R: RandomSource + ?Sized>(
    config: &PaletteConfig,
    source: &mut R,
) -> Result<Palette> {
    config.validate()?;

    let drawn_hue = (360.0 * draw(source)?).floor();
    let base_hue = config.base_hue.unwrap_or(drawn_hue);
    let hue_range = HueRange::of(base_hue);
    let theme = ThemeParams::draw(config.theme, source)?;
    debug!(base_hue, hue_range = hue_range.label(), theme = %config.theme, "palette base");

    // Alternate light and dark so adjacent strips stand apart
    let luminosity_duet = [
        theme.base_luminosity + theme.spacing,
        theme.base_luminosity - theme.spacing,
    ];
    let count = config.color_count;
    let spread = hue_range.boost() * config.diversity_ratio * 360.0;
    let color_array: Vec<String> = (0..count)
        .map(|k| {
            let relative_k = k as f64 - (count / 2) as f64;
            let hue = (base_hue + spread * relative_k / count as f64).rem_euclid(360.0);
            hsl_to_hex(hue, theme.saturation, luminosity_duet[k % 2])
        })
        .collect();
    debug!(colors = ?color_array, "palette colors");

    Ok(Palette {
        background_color: theme.background.to_string(),
        base_hue,
        hue_range,
        color_array,
    })
}

#[cfg(test)]
mod tests {
    use colorstrip_core::{SeededRandom, SequenceRandom};

    use super::*;
    use crate::color::Rgb;

    fn config(color_count: usize, theme: Theme, base_hue: Option<f64>) -> PaletteConfig {
        PaletteConfig {
            color_count,
            diversity_ratio: 0.25,
            theme,
            base_hue,
        }
    }

    #[test]
    fn test_hue_range_selection() {
        assert_eq!(HueRange::of(100.0), HueRange::LowGreen);
        assert_eq!(HueRange::of(100.0).boost(), 2.4);
        assert_eq!(HueRange::of(50.0), HueRange::Simple);
        assert_eq!(HueRange::of(50.0).boost(), 1.0);
        assert_eq!(HueRange::of(310.0), HueRange::Red);
        assert_eq!(HueRange::of(310.0).boost(), 1.8);
        assert_eq!(HueRange::of(150.0), HueRange::HighGreen);
        assert_eq!(HueRange::of(200.0), HueRange::Blue);
        assert_eq!(HueRange::of(280.0), HueRange::Simple);
    }

    #[test]
    fn test_hue_range_boundaries() {
        assert_eq!(HueRange::of(79.0), HueRange::Simple);
        assert_eq!(HueRange::of(80.0), HueRange::LowGreen);
        assert_eq!(HueRange::of(140.0), HueRange::HighGreen);
        assert_eq!(HueRange::of(180.0), HueRange::Blue);
        assert_eq!(HueRange::of(260.0), HueRange::Simple);
        assert_eq!(HueRange::of(300.0), HueRange::Red);
    }

    #[test]
    fn test_single_color_uses_base_hue() {
        let mut source = SeededRandom::new(4);
        let palette = create_palette(&config(1, Theme::Light, Some(120.0)), &mut source).unwrap();
        assert_eq!(palette.color_array, vec![hsl_to_hex(120.0, 1.0, 0.45 + 0.04)]);
    }

    #[test]
    fn test_empty_palette() {
        let mut source = SeededRandom::new(4);
        let palette = create_palette(&config(0, Theme::Dark, None), &mut source).unwrap();
        assert!(palette.color_array.is_empty());
        assert_eq!(palette.background_color, "#000");
    }

    #[test]
    fn test_drawn_base_hue() {
        let mut source = SequenceRandom::new(vec![0.5]);
        let palette = create_palette(&config(3, Theme::Pastelle, None), &mut source).unwrap();
        assert_eq!(palette.base_hue, 180.0);
        assert_eq!(palette.hue_range, HueRange::Blue);
        assert_eq!(source.consumed(), 1);
    }

    #[test]
    fn test_override_still_consumes_hue_draw() {
        let mut source = SequenceRandom::new(vec![0.9, 0.5]);
        let palette = create_palette(&config(2, Theme::Dark, Some(10.0)), &mut source).unwrap();
        assert_eq!(palette.base_hue, 10.0);
        assert_eq!(source.consumed(), 2);
    }

    #[test]
    fn test_spread_and_duet() {
        // base 50 (simple), 4 colors, ratio 0.25: steps of 22.5° around k = 2
        let palette = create_palette(
            &config(4, Theme::Pastelle, Some(50.0)),
            &mut SequenceRandom::new(vec![0.0]),
        )
        .unwrap();
        let (light, dark) = (0.6 + 0.1, 0.6 - 0.1);
        let expected: Vec<String> = [(5.0, light), (27.5, dark), (50.0, light), (72.5, dark)]
            .into_iter()
            .map(|(hue, lum)| hsl_to_hex(hue, 0.7, lum))
            .collect();
        assert_eq!(palette.color_array, expected);
    }

    #[test]
    fn test_negative_hues_wrap() {
        let palette = create_palette(
            &config(4, Theme::Light, Some(0.0)),
            &mut SequenceRandom::new(vec![0.0]),
        )
        .unwrap();
        // k = 0 lands at -45°, which wraps to 315°
        assert_eq!(palette.color_array[0], hsl_to_hex(315.0, 1.0, 0.45 + 0.04));
    }

    #[test]
    fn test_theme_backgrounds() {
        let expected = [
            (Theme::Light, Rgb::WHITE),
            (Theme::Pastelle, Rgb::WHITE),
            (Theme::Twilight, Rgb::new(0x11, 0x11, 0x11)),
            (Theme::Dark, Rgb::BLACK),
        ];
        for (theme, background) in expected {
            let palette =
                create_palette(&config(2, theme, None), &mut SeededRandom::new(1)).unwrap();
            assert_eq!(Rgb::from_hex(&palette.background_color), Ok(background));
        }
    }

    #[test]
    fn test_dark_luminosity_range() {
        // base luminosity 0.1 + 0.2 * 0.5 = 0.2, duet 0.26 / 0.14
        let mut source = SequenceRandom::new(vec![0.0, 0.5]);
        let palette = create_palette(&config(2, Theme::Dark, Some(30.0)), &mut source).unwrap();
        let base = 0.1 + 0.2 * 0.5;
        assert_eq!(palette.color_array[0], hsl_to_hex(345.0, 0.4, base + 0.06));
        assert_eq!(palette.color_array[1], hsl_to_hex(30.0, 0.4, base - 0.06));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut source = SeededRandom::new(1);
        let mut bad = config(3, Theme::Light, None);
        bad.diversity_ratio = 1.5;
        assert!(matches!(
            create_palette(&bad, &mut source),
            Err(Error::InvalidConfiguration(_))
        ));
        let bad = config(3, Theme::Light, Some(360.0));
        assert!(matches!(
            create_palette(&bad, &mut source),
            Err(Error::InvalidConfiguration(_))
        ));
        let mut bad = config(3, Theme::Light, None);
        bad.diversity_ratio = f64::NAN;
        assert!(create_palette(&bad, &mut source).is_err());
    }

    #[test]
    fn test_source_violation() {
        let mut source = SequenceRandom::new(vec![1.0]);
        assert_eq!(
            create_palette(&config(3, Theme::Light, None), &mut source),
            Err(Error::RandomSourceViolation(1.0))
        );
    }
}
