use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect
    },
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of PixelRect bounds top:{}, left:{}, bottom:{}, right:{}",
                    pixel.x,
                    pixel.y,
                    pixel_rect.top_left().y,
                    pixel_rect.top_left().x,
                    pixel_rect.bottom_right().y,
                    pixel_rect.bottom_right().x
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// An RGBA8 raster covering `pixel_rect`, addressed in the rect's own
/// coordinates so a pane buffer can be placed anywhere in a larger frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let total_bytes = pixel_rect_to_buffer_size(pixel_rect);

        Self {
            pixel_rect,
            buffer: vec![0; total_bytes],
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Re-targets the buffer at `pixel_rect`, keeping the allocation when it
    /// is already large enough. Contents are unspecified afterwards.
    pub fn resize(&mut self, pixel_rect: PixelRect) {
        self.pixel_rect = pixel_rect;
        self.buffer.resize(pixel_rect_to_buffer_size(pixel_rect), 0);
    }

    pub fn fill(&mut self, colour: Colour) {
        let rgba = colour.to_rgba();

        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&rgba);
        }
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Ok((relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;
        let rgba = &self.buffer[index..index + BYTES_PER_PIXEL];

        Ok(Colour {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        })
    }

    /// Writes `colours` row-major over the whole rect.
    pub fn write_row_major<I>(&mut self, colours: I) -> Result<(), PixelBufferError>
    where
        I: IntoIterator<Item = Colour>,
    {
        let mut written = 0;

        for (pixel, colour) in self
            .buffer
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(colours)
        {
            pixel.copy_from_slice(&colour.to_rgba());
            written += BYTES_PER_PIXEL;
        }

        if written != self.buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: self.buffer.len(),
                buffer_size: written,
            });
        }

        Ok(())
    }

    /// Copies `source` into this buffer at the position of its own rect,
    /// dropping whatever falls outside.
    pub fn blit(&mut self, source: &PixelBuffer) {
        let src_rect = source.pixel_rect();
        let dst_rect = self.pixel_rect;

        let left = src_rect.top_left().x.max(dst_rect.top_left().x);
        let right = src_rect.bottom_right().x.min(dst_rect.bottom_right().x);
        let top = src_rect.top_left().y.max(dst_rect.top_left().y);
        let bottom = src_rect.bottom_right().y.min(dst_rect.bottom_right().y);

        if left > right || top > bottom {
            return;
        }

        let row_bytes = (right - left + 1) as usize * BYTES_PER_PIXEL;

        for y in top..=bottom {
            let (Ok(src_index), Ok(dst_index)) = (
                source.index_of(Point { x: left, y }),
                self.index_of(Point { x: left, y }),
            ) else {
                continue;
            };

            self.buffer[dst_index..dst_index + row_bytes]
                .copy_from_slice(&source.buffer[src_index..src_index + row_bytes]);
        }
    }
}
