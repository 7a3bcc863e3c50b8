use crate::core::data::point::Point;

/// Input gathered for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProbeControlsSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Window pixel position of a mouse press this frame, if any.
    pub click: Option<Point>,
}
