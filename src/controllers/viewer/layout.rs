use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

pub const WINDOW_TITLE: &str = "Mandelbrot and Julia Set viewer";
pub const INITIAL_WINDOW_WIDTH: u32 = 600;
pub const INITIAL_WINDOW_HEIGHT: u32 = 200;

/// Where the composite frame and its two panes sit in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub frame: PixelRect,
    pub mandelbrot: PixelRect,
    pub julia: PixelRect,
}

impl PaneLayout {
    /// Splits the window into two `floor(width / 2)` x `height` panes. `None`
    /// when the window is too small to hold a pixel in each.
    #[must_use]
    pub fn for_window(window_width: u32, window_height: u32) -> Option<Self> {
        let pane_width = window_width / 2;

        let frame = PixelRect::from_size(Point { x: 0, y: 0 }, window_width, window_height).ok()?;
        let mandelbrot =
            PixelRect::from_size(Point { x: 0, y: 0 }, pane_width, window_height).ok()?;
        let julia = PixelRect::from_size(
            Point {
                x: pane_width as i32,
                y: 0,
            },
            pane_width,
            window_height,
        )
        .ok()?;

        Some(Self {
            frame,
            mandelbrot,
            julia,
        })
    }
}
