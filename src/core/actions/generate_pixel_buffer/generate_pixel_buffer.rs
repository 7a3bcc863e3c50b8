use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => err.source(),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps `input` through `mapper` over every pixel of `target`, row-major.
/// `input` must hold exactly one value per pixel.
pub fn write_pixel_buffer<CMap>(
    input: &[CMap::T],
    mapper: &CMap,
    target: &mut PixelBuffer,
) -> Result<(), GeneratePixelBufferError>
where
    CMap: ColourMap,
    CMap::T: Copy,
    CMap::Failure: 'static,
{
    let pixel_count = target.pixel_rect().size() as usize;

    if input.len() != pixel_count {
        return Err(GeneratePixelBufferError::PixelBuffer(
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: pixel_count * BYTES_PER_PIXEL,
                buffer_size: input.len() * BYTES_PER_PIXEL,
            },
        ));
    }

    let mut failure = None;
    let colours = input.iter().map_while(|value| match mapper.map(*value) {
        Ok(colour) => Some(colour),
        Err(err) => {
            failure = Some(err);
            None
        }
    });

    let written = target.write_row_major(colours);

    if let Some(err) = failure {
        return Err(GeneratePixelBufferError::ColourMap(Box::new(err)));
    }

    written?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;
    use std::convert::Infallible;

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap for StubColourMapSuccess {
        type T = u8;
        type Failure = Infallible;

        fn map(&self, value: u8) -> Result<Colour, Self::Failure> {
            Ok(Colour::grey(value))
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapError;

    impl fmt::Display for StubColourMapError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubColourMapError")
        }
    }

    impl Error for StubColourMapError {}

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap for StubColourMapFailure {
        type T = u8;
        type Failure = StubColourMapError;

        fn map(&self, _: u8) -> Result<Colour, Self::Failure> {
            Err(StubColourMapError)
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    #[test]
    fn test_writes_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 2, y: 1 }).unwrap();
        let mut results = PixelBuffer::new(pixel_rect);

        write_pixel_buffer(&input, &mapper, &mut results).unwrap();

        assert_eq!(results.pixel_rect(), pixel_rect);
        assert_eq!(results.buffer_size(), 24);
        assert_eq!(results.pixel(Point { x: 0, y: 0 }), Ok(Colour::grey(1)));
        assert_eq!(results.pixel(Point { x: 2, y: 0 }), Ok(Colour::grey(3)));
        assert_eq!(results.pixel(Point { x: 0, y: 1 }), Ok(Colour::grey(4)));
        assert_eq!(results.pixel(Point { x: 2, y: 1 }), Ok(Colour::grey(6)));
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapFailure {};
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 2, y: 1 }).unwrap();
        let mut target = PixelBuffer::new(pixel_rect);

        let results = write_pixel_buffer(&input, &mapper, &mut target);

        assert!(matches!(results, Err(GeneratePixelBufferError::ColourMap(_))));
    }

    #[test]
    fn test_pixel_rect_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 1, y: 1 }).unwrap();
        let mut target = PixelBuffer::new(pixel_rect);

        let results = write_pixel_buffer(&input, &mapper, &mut target);

        assert!(matches!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    pixel_rect_size: 16,
                    buffer_size: 24
                }
            ))
        ));
    }

    #[test]
    fn test_write_overwrites_existing_buffer_in_place() {
        let pixel_rect = PixelRect::new(Point { x: 4, y: 0 }, Point { x: 5, y: 0 }).unwrap();
        let mut target = PixelBuffer::new(pixel_rect);
        target.fill(Colour::RED);

        write_pixel_buffer(&[7, 9], &StubColourMapSuccess {}, &mut target).unwrap();

        assert_eq!(target.pixel(Point { x: 4, y: 0 }), Ok(Colour::grey(7)));
        assert_eq!(target.pixel(Point { x: 5, y: 0 }), Ok(Colour::grey(9)));
    }

    #[test]
    fn test_error_displays_colour_map_error() {
        let err = GeneratePixelBufferError::ColourMap(Box::new(StubColourMapError));

        assert_eq!(format!("{}", err), "colour map error: StubColourMapError");
    }
}
