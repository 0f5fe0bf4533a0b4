//! Pairing of the motion engine with its palette.

use colorstrip_config::Settings;
use colorstrip_core::{Point, Polygon, Result, SeededRandom, Theme};
use colorstrip_engine::{MotionParams, StripCircle};
use colorstrip_palette::{Palette, PaletteConfig, Rgb, create_palette};
use tracing::info;

/// One animation: a strip circle, its palette and the motion stream.
///
/// The palette and the strip circle are seeded independently, so changing
/// the theme never disturbs the motion.
#[derive(Debug)]
pub struct Scene {
    settings: Settings,
    palette: Palette,
    background: Rgb,
    colors: Vec<Rgb>,
    strip: StripCircle,
    motion: SeededRandom,
}

impl Scene {
    pub fn new(settings: Settings) -> Result<Self> {
        let (palette, background, colors) = build_palette(&settings)?;
        let mut motion = SeededRandom::new(settings.strip_circle_seed);
        let params = MotionParams {
            speed_factor: settings.speed_factor,
            sigma_bound: settings.sigma_bound,
        };
        let strip = StripCircle::new(&mut motion, settings.strip_count, params)?;
        info!(
            seed = settings.seed,
            palette_seed = settings.palette_seed,
            strip_circle_seed = settings.strip_circle_seed,
            theme = %settings.theme,
            hue_range = palette.hue_range.label(),
            "scene ready"
        );
        Ok(Self {
            settings,
            palette,
            background,
            colors,
            strip,
            motion,
        })
    }

    /// Advance the animation by `time_increment`.
    pub fn update(&mut self, time_increment: f64) -> Result<()> {
        self.strip.update(&mut self.motion, time_increment)
    }

    /// Center and radii of the ring on a surface of the given size.
    pub fn layout(&self, width: f64, height: f64) -> (Point, [f64; 2]) {
        let base = width.min(height) / 2.0;
        (
            [width / 2.0, height / 2.0],
            [
                base * self.settings.radius_factor,
                base * self.settings.secondary_radius_factor,
            ],
        )
    }

    /// Polygons for the current frame, index-aligned with [`Scene::colors`].
    pub fn paths(&self, width: f64, height: f64) -> Vec<Polygon> {
        let (center, radii) = self.layout(width, height);
        self.strip.path_list_elliptic(center, radii)
    }

    /// Regenerate the palette with another theme, keeping the motion.
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        let mut settings = self.settings.clone();
        settings.theme = theme;
        let (palette, background, colors) = build_palette(&settings)?;
        self.settings = settings;
        self.palette = palette;
        self.background = background;
        self.colors = colors;
        Ok(())
    }

    /// Restart both streams from a new seed.
    pub fn reseed(&mut self, seed: u64) -> Result<()> {
        let settings = Settings {
            seed,
            palette_seed: seed,
            strip_circle_seed: seed,
            ..self.settings.clone()
        };
        *self = Self::new(settings)?;
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

fn build_palette(settings: &Settings) -> Result<(Palette, Rgb, Vec<Rgb>)> {
    let config = PaletteConfig {
        color_count: settings.strip_count,
        diversity_ratio: settings.diversity_ratio,
        theme: settings.theme,
        base_hue: settings.hue,
    };
    let palette = create_palette(&config, &mut SeededRandom::new(settings.palette_seed))?;
    let background = Rgb::from_hex(&palette.background_color)?;
    let colors = palette
        .color_array
        .iter()
        .map(|hex| Rgb::from_hex(hex))
        .collect::<Result<Vec<_>>>()?;
    Ok((palette, background, colors))
}

#[cfg(test)]
mod tests {
    use colorstrip_config::Overrides;

    use super::*;

    fn settings(seed: u64) -> Settings {
        Overrides {
            strip_count: Some(4),
            ..Default::default()
        }
        .resolve(seed)
        .unwrap()
    }

    #[test]
    fn test_colors_align_with_paths() {
        let scene = Scene::new(settings(3)).unwrap();
        assert_eq!(scene.colors().len(), 4);
        assert_eq!(scene.paths(80.0, 40.0).len(), 4);
    }

    #[test]
    fn test_layout_uses_radius_factors() {
        let mut s = settings(3);
        s.radius_factor = 0.5;
        s.secondary_radius_factor = 1.0;
        let scene = Scene::new(s).unwrap();
        let (center, radii) = scene.layout(100.0, 60.0);
        assert_eq!(center, [50.0, 30.0]);
        assert_eq!(radii, [15.0, 30.0]);
    }

    #[test]
    fn test_theme_change_keeps_motion() {
        let mut scene = Scene::new(settings(9)).unwrap();
        scene.update(16.0).unwrap();
        let before = scene.paths(100.0, 100.0);
        scene.set_theme(Theme::Dark).unwrap();
        assert_eq!(scene.settings().theme, Theme::Dark);
        assert_eq!(scene.background(), Rgb::BLACK);
        assert_eq!(scene.paths(100.0, 100.0), before);
    }

    #[test]
    fn test_reseed_matches_fresh_scene() {
        let mut scene = Scene::new(settings(1)).unwrap();
        scene.update(16.0).unwrap();
        scene.reseed(2).unwrap();
        let fresh = Scene::new(settings(2)).unwrap();
        assert_eq!(scene.palette(), fresh.palette());
        assert_eq!(scene.paths(50.0, 50.0), fresh.paths(50.0, 50.0));
    }

    #[test]
    fn test_identical_seeds_replay() {
        let mut a = Scene::new(settings(77)).unwrap();
        let mut b = Scene::new(settings(77)).unwrap();
        for _ in 0..30 {
            a.update(16.0).unwrap();
            b.update(16.0).unwrap();
        }
        assert_eq!(a.palette(), b.palette());
        assert_eq!(a.paths(120.0, 80.0), b.paths(120.0, 80.0));
    }
}
