use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::{EscapeResult, iterate};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    params: FractalParams,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(iterate(Complex::ZERO, c, &self.params))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, complex_rect: ComplexRect, params: FractalParams) -> Self {
        Self {
            pixel_rect,
            complex_rect,
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm(width: u32, height: u32) -> MandelbrotAlgorithm {
        let pixel_rect = PixelRect::from_size(Point { x: 0, y: 0 }, width, height).unwrap();

        MandelbrotAlgorithm::new(pixel_rect, ComplexRect::plane_window(), FractalParams::default())
    }

    #[test]
    fn compute_maps_pixel_before_iterating() {
        // 350x200 over -2.5..1.0 gives one pixel per 0.01, so (250, 100) is the origin
        let algorithm = algorithm(350, 200);

        assert_eq!(
            algorithm.compute(Point { x: 250, y: 100 }),
            Ok(EscapeResult::BoundedOrUnknown)
        );
    }

    #[test]
    fn top_left_corner_escapes() {
        let algorithm = algorithm(300, 200);

        let result = algorithm.compute(Point { x: 0, y: 0 }).unwrap();

        assert!(result.escaped().is_some());
    }

    #[test]
    fn compute_returns_error_for_pixel_outside_pixel_rect() {
        let algorithm = algorithm(11, 11);
        let point = Point { x: 11, y: 0 };

        assert_eq!(
            algorithm.compute(point),
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point,
                pixel_rect: algorithm.pixel_rect()
            })
        );
    }
}
