use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f32, height: f32 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// The plane window both panes are rendered over.
pub const PLANE_X_START: f32 = -2.5;
pub const PLANE_X_END: f32 = 1.0;
pub const PLANE_Y_START: f32 = -1.0;
pub const PLANE_Y_END: f32 = 1.0;

/// A rectangle of the complex plane. `top_left` holds the start of both axes
/// and `bottom_right` their end, so the imaginary axis grows downwards with
/// pixel rows.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// The fixed `[-2.5, 1.0] x [-1.0, 1.0]` viewing window.
    #[must_use]
    pub const fn plane_window() -> Self {
        Self {
            top_left: Complex::new(PLANE_X_START, PLANE_Y_START),
            bottom_right: Complex::new(PLANE_X_END, PLANE_Y_END),
        }
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom_right.imag - self.top_left.imag
    }

}

impl Default for ComplexRect {
    fn default() -> Self {
        Self::plane_window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_new_valid() {
        let top_left = Complex::new(-2.0, -1.0);
        let bottom_right = Complex::new(1.0, 1.0);

        let rect = ComplexRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        let zero_width = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(0.0, 100.0));
        let negative_height = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(100.0, -10.0));
        let inverted = ComplexRect::new(Complex::new(2.0, 2.0), Complex::new(-2.0, -2.0));

        assert_eq!(
            zero_width,
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            negative_height,
            Err(ComplexRectError::InvalidSize {
                width: 100.0,
                height: -10.0
            })
        );
        assert_eq!(
            inverted,
            Err(ComplexRectError::InvalidSize {
                width: -4.0,
                height: -4.0
            })
        );
    }

    #[test]
    fn test_complex_rect_rejects_nan_extent() {
        let rect = ComplexRect::new(Complex::new(f32::NAN, 0.0), Complex::new(1.0, 1.0));

        assert!(rect.is_err());
    }

    #[test]
    fn test_plane_window_dimensions() {
        let rect = ComplexRect::plane_window();

        assert_eq!(rect.top_left(), Complex::new(-2.5, -1.0));
        assert_eq!(rect.bottom_right(), Complex::new(1.0, 1.0));
        assert_eq!(rect.width(), 3.5);
        assert_eq!(rect.height(), 2.0);
        assert_eq!(ComplexRect::default(), rect);
    }

    #[test]
    fn test_plane_window_is_valid_rect() {
        let window = ComplexRect::plane_window();
        let rebuilt = ComplexRect::new(window.top_left(), window.bottom_right());

        assert_eq!(rebuilt, Ok(window));
    }
}
