//! Escape-time iteration shared by the Mandelbrot and Julia algorithms.

use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::FractalParams;

/// `|z|²` above which an orbit counts as escaped. Large enough that the
/// smoothing logarithms below stay well conditioned.
pub const ESCAPE_RADIUS_SQUARED: f32 = 16.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeResult {
    /// Smoothed (continuous) iteration count, never negative.
    Escaped(f32),
    /// Hit the iteration cap, or the orbit degenerated before escaping.
    BoundedOrUnknown,
}

impl EscapeResult {
    #[must_use]
    pub fn escaped(&self) -> Option<f32> {
        match self {
            Self::Escaped(smoothed) => Some(*smoothed),
            Self::BoundedOrUnknown => None,
        }
    }
}

/// Iterates `z <- z^exponent + c` from `z0` for at most `max_iterations` steps.
///
/// Mandelbrot points call this with `z0 = 0` and `c` the point under test;
/// Julia points with `z0` the point under test and `c` the seed.
#[must_use]
pub fn iterate(z0: Complex, c: Complex, params: &FractalParams) -> EscapeResult {
    let exponent = params.exponent();
    let mut z = z0;

    for iteration in 0..params.max_iterations() {
        z = z.powc(exponent) + c;

        let magnitude_squared = z.magnitude_squared();

        // zero or NaN: log2 below is undefined
        if !(magnitude_squared > 0.0) {
            return EscapeResult::BoundedOrUnknown;
        }

        if magnitude_squared > ESCAPE_RADIUS_SQUARED {
            let nu = (magnitude_squared.log2() / 2.0).log2();
            let smoothed = (iteration as f32 + 1.0 - nu).max(0.0);

            return EscapeResult::Escaped(smoothed);
        }
    }

    EscapeResult::BoundedOrUnknown
}
