use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterPort {
    /// Called with the new physical window size.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;

    /// Shows `frame`, which covers the whole window.
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), GuiError>;
}
