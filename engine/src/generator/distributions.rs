//! Continuous distributions built on [`Rand::float64`]
//!
//! Neither sampler keeps a cached value, so the generator state stays fully
//! described by the engine and the byte cursor.
//!
//! Unlike the rest of the API these are not stream-compatible with other SFC64
//! generators: ziggurat-based implementations return different values for the
//! same seed and consume a different number of words.

use super::Rand;
use std::f64::consts::PI;

impl Rand {
    /// Returns an exponentially distributed `f64` with rate 1 (mean 1)
    ///
    /// Inversion sampling: `-ln(1 - u)`. Since `u < 1.0` the argument of the
    /// logarithm is in `(0, 1]` and the result is finite and non-negative.
    /// Scale by `1 / lambda` for another rate.
    ///
    /// Not stream-compatible with ziggurat samplers; consumes exactly one word.
    pub fn exp_float64(&mut self) -> f64 {
        -(1.0 - self.float64()).ln()
    }

    /// Returns a standard normally distributed `f64` (mean 0, stddev 1)
    ///
    /// Box-Muller transform over two uniform draws. Adjust with
    /// `sample * stddev + mean`.
    ///
    /// Not stream-compatible with ziggurat samplers; consumes exactly two words.
    pub fn norm_float64(&mut self) -> f64 {
        let u1 = 1.0 - self.float64();
        let u2 = self.float64();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}
