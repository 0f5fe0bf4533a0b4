//! The ordered ensemble of quads projected onto a circle.

use colorstrip_core::{Error, Point, Polygon, RandomSource, Result};
use tracing::{debug, trace};

use crate::quad::Quad;
use crate::side::MotionParams;

/// A set of quads advanced in lockstep.
///
/// Quad order is significant: the quad at index `k` pairs with the palette
/// color at index `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct StripCircle {
    params: MotionParams,
    quads: Vec<Quad>,
}

impl StripCircle {
    /// Build `strip_count` quads, drawing from `source` in construction order.
    pub fn new<R: RandomSource + ?Sized>(
        source: &mut R,
        strip_count: usize,
        params: MotionParams,
    ) -> Result<Self> {
        params.validate()?;
        let quads = (0..strip_count)
            .map(|_| Quad::random(source, params))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            strip_count,
            speed_factor = params.speed_factor,
            sigma_bound = params.sigma_bound,
            "created strip circle"
        );
        Ok(Self { params, quads })
    }

    /// Advance every quad by one frame.
    ///
    /// Quads are updated in construction order, side `a` before side `b`,
    /// so a given source always replays the same trajectory.
    pub fn update<R: RandomSource + ?Sized>(
        &mut self,
        source: &mut R,
        time_increment: f64,
    ) -> Result<()> {
        if !time_increment.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "time increment must be finite, got {time_increment}"
            )));
        }
        trace!(time_increment, quads = self.quads.len(), "update");
        for quad in &mut self.quads {
            quad.random_update(source, time_increment)?;
        }
        Ok(())
    }

    /// Quads projected onto the circle of the given center and radius.
    pub fn path_list(&self, center: Point, radius: f64) -> Vec<Polygon> {
        self.path_list_elliptic(center, [radius, radius])
    }

    /// Quads projected onto an axis-aligned ellipse with radii `[rx, ry]`.
    pub fn path_list_elliptic(&self, center: Point, radii: [f64; 2]) -> Vec<Polygon> {
        self.quads
            .iter()
            .map(|quad| {
                quad.trigonometry().map(|[cos, sin]| {
                    [center[0] + cos * radii[0], center[1] + sin * radii[1]]
                })
            })
            .collect()
    }

    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    pub fn params(&self) -> MotionParams {
        self.params
    }
}
