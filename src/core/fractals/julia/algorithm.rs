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

/// Filled Julia set for `seed`: each pixel is the starting point `z0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    params: FractalParams,
    seed: Complex,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = EscapeResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let z0 = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(iterate(z0, self.seed, &self.params))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(
        pixel_rect: PixelRect,
        complex_rect: ComplexRect,
        params: FractalParams,
        seed: Complex,
    ) -> Self {
        Self {
            pixel_rect,
            complex_rect,
            params,
            seed,
        }
    }
}
