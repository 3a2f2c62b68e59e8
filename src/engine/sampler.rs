//! Uniform point sampling in the square [-1, 1]².
//!
//! # Governing Equation
//!
//! ```text
//! Estimator:  π̂ = (4/n) Σ I(x² + y² ≤ 1)
//! ```

use super::rng::SampleRng;
use crate::error::{PiError, PiResult};

/// A sampled point. Both coordinates lie in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Abscissa.
    pub x: f64,
    /// Ordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Whether `point` falls in the closed unit disk.
#[must_use]
pub fn is_in_circle(point: Point) -> bool {
    point.x * point.x + point.y * point.y <= 1.0
}

/// Draws points and classifies them against the unit circle.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: SampleRng,
}

impl Sampler {
    /// Create a sampler with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SampleRng::new(seed))
    }

    /// Create a sampler around an existing RNG.
    #[must_use]
    pub const fn with_rng(rng: SampleRng) -> Self {
        Self { rng }
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Draw one point and its classification.
    pub fn draw_point(&mut self) -> (Point, bool) {
        let x = self.rng.gen_range_f64(-1.0, 1.0);
        let y = self.rng.gen_range_f64(-1.0, 1.0);
        let point = Point::new(x, y);
        (point, is_in_circle(point))
    }

    /// Estimate π from `n` fresh points.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::Division`] if `n` is zero.
    pub fn estimate(&mut self, n: u64) -> PiResult<f64> {
        if n == 0 {
            return Err(PiError::division("cannot estimate π from 0 points"));
        }

        let inside = (0..n).filter(|_| self.draw_point().1).count() as u64;
        Ok(inside as f64 / n as f64 * 4.0)
    }
}
