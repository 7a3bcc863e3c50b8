use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use log::debug;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Copies finished frames into a `pixels` surface, one frame pixel per
/// physical window pixel.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let surface_texture = SurfaceTexture::new(width, height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    fn resize_buffer(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        if (width, height) != (self.width, self.height) {
            debug!("resizing pixels buffer to {}x{}", width, height);
            self.pixels.resize_buffer(width, height)?;
            self.width = width;
            self.height = height;
        }

        Ok(())
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.pixels.resize_surface(width, height)?;
        self.resize_buffer(width, height)
    }

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), GuiError> {
        let rect = frame.pixel_rect();

        self.resize_buffer(rect.width(), rect.height())?;
        self.pixels.frame_mut().copy_from_slice(frame.buffer());
        self.pixels.render()?;

        Ok(())
    }
}
