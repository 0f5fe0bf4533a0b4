//! Quadrilaterals built from two sides.

use colorstrip_core::{Polygon, RandomSource, Result};

use crate::side::{MotionParams, Side};

/// A four-sided polygon generator made of two anti-phased sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    a: Side,
    b: Side,
}

impl Quad {
    pub fn new(a: Side, b: Side) -> Self {
        Self { a, b }
    }

    /// Create a quad whose second side is placed opposite the first.
    pub fn random<R: RandomSource + ?Sized>(source: &mut R, params: MotionParams) -> Result<Self> {
        let a = Side::random(source, params)?;
        let b = Side::opposite(source, params, &a)?;
        Ok(Self { a, b })
    }

    /// Advance side `a`, then side `b`.
    pub fn random_update<R: RandomSource + ?Sized>(
        &mut self,
        source: &mut R,
        time_increment: f64,
    ) -> Result<()> {
        self.a.random_update(source, time_increment)?;
        self.b.random_update(source, time_increment)
    }

    /// Unit-circle vertices in winding order `[a+, a-, b+, b-]`.
    pub fn trigonometry(&self) -> Polygon {
        let [a_plus, a_minus] = self.a.trigonometry();
        let [b_plus, b_minus] = self.b.trigonometry();
        [a_plus, a_minus, b_plus, b_minus]
    }

    pub fn a(&self) -> &Side {
        &self.a
    }

    pub fn b(&self) -> &Side {
        &self.b
    }
}
