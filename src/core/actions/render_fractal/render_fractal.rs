use crate::core::actions::generate_fractal::generate_fractal::generate_fractal_into;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, write_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::fractals::colour_map::{GreyEscapeColourMap, IntensityPolicy};
use crate::core::fractals::escape_time::EscapeResult;
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderFractalError {
    PixelRect(PixelRectError),
    Algorithm(PixelToComplexCoordsError),
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelRect(err) => write!(f, "invalid render size: {}", err),
            Self::Algorithm(err) => write!(f, "fractal algorithm error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFractalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelRect(err) => Some(err),
            Self::Algorithm(err) => Some(err),
            Self::ColourMap(err) => err.source(),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelRectError> for RenderFractalError {
    fn from(err: PixelRectError) -> Self {
        Self::PixelRect(err)
    }
}

impl From<PixelToComplexCoordsError> for RenderFractalError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<GeneratePixelBufferError> for RenderFractalError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::ColourMap(err) => Self::ColourMap(err),
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

/// Renders panes over the fixed plane window, keeping its per-pixel scratch
/// space between calls.
#[derive(Debug, Default)]
pub struct FractalRenderer {
    escapes: Vec<EscapeResult>,
}

impl FractalRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites every pixel of `target`. The plane window is spread over
    /// `target`'s own rect, wherever that rect sits.
    pub fn render_into<CMap>(
        &mut self,
        target: &mut PixelBuffer,
        mode: FractalMode,
        params: &FractalParams,
        colour_map: &CMap,
    ) -> Result<(), RenderFractalError>
    where
        CMap: ColourMap<T = EscapeResult>,
        CMap::Failure: 'static,
    {
        let pixel_rect = target.pixel_rect();
        let complex_rect = ComplexRect::plane_window();

        match mode {
            FractalMode::Mandelbrot => {
                let algorithm = MandelbrotAlgorithm::new(pixel_rect, complex_rect, *params);
                generate_fractal_into(&algorithm, &mut self.escapes)?;
            }
            FractalMode::Julia { seed } => {
                let algorithm = JuliaAlgorithm::new(pixel_rect, complex_rect, *params, seed);
                generate_fractal_into(&algorithm, &mut self.escapes)?;
            }
        }

        write_pixel_buffer(&self.escapes, colour_map, target)?;

        Ok(())
    }
}

/// One-shot render of a `width` x `height` image with the grey escape colours.
pub fn render(
    width: u32,
    height: u32,
    mode: FractalMode,
    params: &FractalParams,
) -> Result<PixelBuffer, RenderFractalError> {
    let pixel_rect = PixelRect::from_size(Point { x: 0, y: 0 }, width, height)?;
    let mut target = PixelBuffer::new(pixel_rect);
    let colour_map = GreyEscapeColourMap::new(params.max_iterations(), IntensityPolicy::Clamp);

    FractalRenderer::new().render_into(&mut target, mode, params, &colour_map)?;

    Ok(target)
}
