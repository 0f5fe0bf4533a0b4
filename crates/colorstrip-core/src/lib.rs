//! Core types shared by the colorstrip crates.
//!
//! Holds the randomness abstraction consumed by both the motion engine and
//! the palette generator, the theme and speed enums, the geometry aliases
//! handed to renderers and the error taxonomy.

mod error;
mod random;
mod types;

pub use error::{Error, Result};
pub use random::{RandomSource, SeededRandom, SequenceRandom, draw};
pub use types::{AnimationSpeed, Point, Polygon, Theme};
