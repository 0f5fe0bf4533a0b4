//! Procedural motion engine for the colorstrip animation.
//!
//! A [`StripCircle`] owns an ordered set of [`Quad`]s, each made of two
//! damped random-walk oscillators ([`Side`]s). Every frame the caller
//! advances the circle with an explicit time increment and a random source,
//! then asks for the quads projected onto a circle.

mod quad;
mod side;
mod strip;

pub use quad::Quad;
pub use side::{
    ACCELERATION_DAMPING, DEFAULT_SIGMA_BOUND, MotionParams, NOISE_AMPLITUDE, SIGMA_VELOCITY_DAMPING,
    Side, THETA_VELOCITY_DAMPING,
};
pub use strip::StripCircle;
