use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel of `pixel_rect` onto `complex_rect`.
///
/// Column `x` of a `width`-pixel rect lands at `x / width` of the way across,
/// so the left edge maps exactly onto the window start and the last column
/// stops one pixel short of the window end.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    Ok(pixel_to_complex_coords_unchecked(
        pixel_position,
        pixel_rect,
        complex_rect,
    ))
}

/// Same mapping without the bounds check. Used for the probe, which may sit
/// on the pane's far edge.
#[must_use]
pub fn pixel_to_complex_coords_unchecked(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Complex {
    let relative_pixel_x = (pixel_position.x - pixel_rect.top_left().x) as f32;
    let relative_pixel_y = (pixel_position.y - pixel_rect.top_left().y) as f32;

    let real = (relative_pixel_x / pixel_rect.width() as f32) * complex_rect.width()
        + complex_rect.top_left().real;
    let imag = (relative_pixel_y / pixel_rect.height() as f32) * complex_rect.height()
        + complex_rect.top_left().imag;

    Complex { real, imag }
}
