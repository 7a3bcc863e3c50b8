use std::ops::{Add, Mul};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f32,
    pub imag: f32,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f32, imag: f32) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f32 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn argument(&self) -> f32 {
        self.imag.atan2(self.real)
    }

    /// Principal-branch power `self^exponent = exp(exponent * ln(self))`.
    ///
    /// The logarithm is undefined at the origin, so `0^w` is taken to be `0`
    /// for every exponent.
    #[must_use]
    pub fn powc(self, exponent: Self) -> Self {
        if self == Self::ZERO {
            return Self::ZERO;
        }

        let ln_modulus = 0.5 * self.magnitude_squared().ln();
        let argument = self.argument();

        let real = exponent.real * ln_modulus - exponent.imag * argument;
        let imag = exponent.real * argument + exponent.imag * ln_modulus;
        let scale = real.exp();

        Self {
            real: scale * imag.cos(),
            imag: scale * imag.sin(),
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_approx_eq(actual: Complex, expected: Complex) {
        assert!(
            (actual.real - expected.real).abs() <= EPSILON
                && (actual.imag - expected.imag).abs() <= EPSILON,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_negative_real_and_imag() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_magnitude_squared_zero() {
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);
        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_powc_square_matches_multiplication() {
        let c = Complex::new(2.0, 3.0);
        let result = c.powc(Complex::new(2.0, 0.0));
        assert_approx_eq(result, c * c); // -5 + 12i
    }

    #[test]
    fn test_powc_cube_of_negative_real() {
        let c = Complex::new(-1.5, 0.0);
        let result = c.powc(Complex::new(3.0, 0.0));
        assert_approx_eq(result, Complex::new(-3.375, 0.0));
    }

    #[test]
    fn test_powc_half_is_square_root() {
        let result = Complex::new(0.0, 2.0).powc(Complex::new(0.5, 0.0));
        assert_approx_eq(result, Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_powc_imaginary_exponent() {
        // i^i = e^(-pi/2)
        let result = Complex::new(0.0, 1.0).powc(Complex::new(0.0, 1.0));
        assert_approx_eq(result, Complex::new((-std::f32::consts::FRAC_PI_2).exp(), 0.0));
    }

    #[test]
    fn test_powc_of_zero_is_zero() {
        assert_eq!(Complex::ZERO.powc(Complex::new(2.0, 0.0)), Complex::ZERO);
        assert_eq!(Complex::ZERO.powc(Complex::new(-1.0, 0.5)), Complex::ZERO);
    }

    #[test]
    fn test_powc_zero_exponent_is_one() {
        let result = Complex::new(0.3, -0.7).powc(Complex::ZERO);
        assert_approx_eq(result, Complex::new(1.0, 0.0));
    }
}
