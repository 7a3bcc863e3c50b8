/// Inclusive upper limits of the probe. The lower limits are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeBounds {
    pub max_x: i32,
    pub max_y: i32,
}

impl ProbeBounds {
    /// The probe may range over the left pane, including its far edge. The
    /// pane is `window_width / 2` pixels wide, the spare column of an odd
    /// width belongs to neither pane.
    #[must_use]
    pub fn for_window(window_width: u32, window_height: u32) -> Self {
        Self {
            max_x: (window_width / 2).min(i32::MAX as u32) as i32,
            max_y: window_height.min(i32::MAX as u32) as i32,
        }
    }
}
