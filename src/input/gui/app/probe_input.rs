use crate::core::data::point::Point;
use crate::core::probe::ProbeControlsSnapshot;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Held arrow keys, last cursor position and a pending click, gathered from
/// window events between frames.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProbeInputState {
    up_held: bool,
    down_held: bool,
    left_held: bool,
    right_held: bool,
    cursor: Option<Point>,
    pending_click: Option<Point>,
}

impl ProbeInputState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::ArrowUp => self.up_held = pressed,
            KeyCode::ArrowDown => self.down_held = pressed,
            KeyCode::ArrowLeft => self.left_held = pressed,
            KeyCode::ArrowRight => self.right_held = pressed,
            _ => {}
        }
    }

    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Some(Point {
            x: x.floor() as i32,
            y: y.floor() as i32,
        });
    }

    pub fn handle_cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Any button press records a click at the last known cursor position.
    pub fn handle_mouse_input(&mut self, state: ElementState) {
        if state == ElementState::Pressed {
            if let Some(cursor) = self.cursor {
                self.pending_click = Some(cursor);
            }
        }
    }

    /// Current controls. A pending click is handed out once.
    pub fn snapshot(&mut self) -> ProbeControlsSnapshot {
        ProbeControlsSnapshot {
            up: self.up_held,
            down: self.down_held,
            left: self.left_held,
            right: self.right_held,
            click: self.pending_click.take(),
        }
    }

    /// Releases every held key, e.g. when the window loses focus.
    pub fn release_keys(&mut self) {
        *self = Self {
            cursor: self.cursor,
            ..Self::default()
        };
    }
}
