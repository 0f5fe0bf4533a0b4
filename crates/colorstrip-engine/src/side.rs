//! A single damped second-order angular oscillator.

use std::f64::consts::{PI, TAU};

use colorstrip_core::{Error, Point, RandomSource, Result, draw};

/// Per-step decay of both acceleration tracks.
pub const ACCELERATION_DAMPING: f64 = 0.999;
/// Per-step decay of the theta velocity.
pub const THETA_VELOCITY_DAMPING: f64 = 0.2;
/// Per-step decay of the sigma velocity.
pub const SIGMA_VELOCITY_DAMPING: f64 = 0.04;
/// Amplitude of the random kick applied to the accelerations.
pub const NOISE_AMPLITUDE: f64 = 0.001;
/// Default bound of the sigma offset, in radians (7.5°).
pub const DEFAULT_SIGMA_BOUND: f64 = PI / 24.0;

/// Parameters shared by every side of a strip circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    /// Multiplier on the random acceleration kicks. Must be positive.
    pub speed_factor: f64,
    /// Sigma stays within `[-sigma_bound, sigma_bound]`. Must be positive.
    pub sigma_bound: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            speed_factor: 1.0,
            sigma_bound: DEFAULT_SIGMA_BOUND,
        }
    }
}

impl MotionParams {
    /// Parameters with the given speed factor and the default sigma bound.
    pub fn with_speed_factor(speed_factor: f64) -> Self {
        Self {
            speed_factor,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.speed_factor.is_finite() || self.speed_factor <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "speed factor must be positive, got {}",
                self.speed_factor
            )));
        }
        if !self.sigma_bound.is_finite() || self.sigma_bound <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "sigma bound must be positive, got {}",
                self.sigma_bound
            )));
        }
        Ok(())
    }
}

/// Position with its first and second derivatives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Track {
    position: f64,
    velocity: f64,
    acceleration: f64,
}

impl Track {
    fn at(position: f64) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    fn step(&mut self, kick: f64, velocity_damping: f64, time_increment: f64) {
        self.acceleration += kick;
        self.acceleration *= ACCELERATION_DAMPING;
        self.velocity += self.acceleration;
        self.velocity *= velocity_damping;
        self.position += self.velocity * time_increment;
    }
}

/// One side of a quad: a theta angle that rotates freely around the circle
/// and a small sigma offset splitting it into two vertices.
///
/// Both values are angles in radians. Theta always lies in `[0, 2π)` and
/// sigma in `[-sigma_bound, sigma_bound]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Side {
    params: MotionParams,
    theta: Track,
    sigma: Track,
}

impl Side {
    /// Create a side at rest at the given angles.
    pub fn new(params: MotionParams, tx: f64, sx: f64) -> Self {
        Self {
            params,
            theta: Track::at(wrap_angle(tx)),
            sigma: Track::at(sx.clamp(-params.sigma_bound, params.sigma_bound)),
        }
    }

    /// Create a side at a random angle. Draws theta, then sigma.
    pub fn random<R: RandomSource + ?Sized>(source: &mut R, params: MotionParams) -> Result<Self> {
        let tx = draw(source)? * TAU;
        let sx = random_sigma(source)?;
        Ok(Self::new(params, tx, sx))
    }

    /// Create a side roughly opposite to `other`, so the two never collapse
    /// into a degenerate quad. Draws the phase offset, then sigma.
    pub fn opposite<R: RandomSource + ?Sized>(
        source: &mut R,
        params: MotionParams,
        other: &Side,
    ) -> Result<Self> {
        let offset = (1.5 + draw(source)? / 2.0) * PI;
        let tx = (other.tx() + offset) % PI;
        let sx = random_sigma(source)?;
        Ok(Self::new(params, tx, sx))
    }

    /// Advance both tracks by one step.
    ///
    /// Both random kicks are drawn before any state changes, so a failing
    /// source leaves the side untouched.
    pub fn random_update<R: RandomSource + ?Sized>(
        &mut self,
        source: &mut R,
        time_increment: f64,
    ) -> Result<()> {
        let theta_kick = (draw(source)? - 0.5) * NOISE_AMPLITUDE * self.params.speed_factor;
        let sigma_kick = (draw(source)? - 0.5) * NOISE_AMPLITUDE * self.params.speed_factor;

        self.theta
            .step(theta_kick, THETA_VELOCITY_DAMPING, time_increment);
        self.theta.position = wrap_angle(self.theta.position);

        self.sigma
            .step(sigma_kick, SIGMA_VELOCITY_DAMPING, time_increment);
        let bound = self.params.sigma_bound;
        self.sigma.position = self.sigma.position.clamp(-bound, bound);
        Ok(())
    }

    /// Unit-circle points at `tx + sx` and `tx - sx`.
    pub fn trigonometry(&self) -> [Point; 2] {
        [
            cossin(self.tx() + self.sx()),
            cossin(self.tx() - self.sx()),
        ]
    }

    /// Theta position.
    pub fn tx(&self) -> f64 {
        self.theta.position
    }

    /// Theta velocity.
    pub fn tv(&self) -> f64 {
        self.theta.velocity
    }

    /// Theta acceleration.
    pub fn ta(&self) -> f64 {
        self.theta.acceleration
    }

    /// Sigma position.
    pub fn sx(&self) -> f64 {
        self.sigma.position
    }

    /// Sigma velocity.
    pub fn sv(&self) -> f64 {
        self.sigma.velocity
    }

    /// Sigma acceleration.
    pub fn sa(&self) -> f64 {
        self.sigma.acceleration
    }

    pub fn params(&self) -> MotionParams {
        self.params
    }
}

fn random_sigma<R: RandomSource + ?Sized>(source: &mut R) -> Result<f64> {
    Ok((2.0 * draw(source)? - 1.0) * PI / 6.0)
}

/// Wrap an angle into `[0, 2π)`.
fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative angles up to exactly 2π
    if wrapped >= TAU { 0.0 } else { wrapped }
}

fn cossin(angle: f64) -> Point {
    [angle.cos(), angle.sin()]
}
