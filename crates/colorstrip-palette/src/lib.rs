//! Color palette generation for the colorstrip animation.
//!
//! A palette is derived from a random source, a diversity ratio and a
//! [`Theme`](colorstrip_core::Theme): a background color plus an ordered list
//! of hex colors spread around a base hue.

mod color;
mod palette;

pub use color::{Rgb, hsl_to_hex, hsl_to_rgb};
pub use palette::{HueRange, Palette, PaletteConfig, create_palette};
