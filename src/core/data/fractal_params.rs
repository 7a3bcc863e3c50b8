use crate::core::data::complex::Complex;
use std::{error::Error, fmt};

pub const DEFAULT_EXPONENT: Complex = Complex::new(2.0, 0.0);
pub const DEFAULT_MAX_ITERATIONS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalParamsError {
    ZeroMaxIterations,
}

impl fmt::Display for FractalParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for FractalParamsError {}

/// Exponent and iteration cap shared by both panes. Built once at startup and
/// read-only afterwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParams {
    exponent: Complex,
    max_iterations: u32,
}

impl FractalParams {
    pub fn new(exponent: Complex, max_iterations: u32) -> Result<Self, FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        Ok(Self {
            exponent,
            max_iterations,
        })
    }

    #[must_use]
    pub fn exponent(&self) -> Complex {
        self.exponent
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_EXPONENT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quadratic_with_twenty_iterations() {
        let params = FractalParams::default();

        assert_eq!(params.exponent(), Complex::new(2.0, 0.0));
        assert_eq!(params.max_iterations(), 20);
    }

    #[test]
    fn zero_max_iterations_is_rejected() {
        assert_eq!(
            FractalParams::new(DEFAULT_EXPONENT, 0),
            Err(FractalParamsError::ZeroMaxIterations)
        );
    }

    #[test]
    fn new_keeps_values() {
        let params = FractalParams::new(Complex::new(1.5, -0.25), 64).unwrap();

        assert_eq!(params.exponent(), Complex::new(1.5, -0.25));
        assert_eq!(params.max_iterations(), 64);
    }
}
