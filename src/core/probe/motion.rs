use crate::core::data::point::Point;
use crate::core::probe::bounds::ProbeBounds;
use crate::core::probe::controls::ProbeControlsSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProbeUpdateReport {
    pub moved: bool,
    pub clamped: bool,
}

/// Probe position for a freshly opened window: a quarter across, half down.
#[must_use]
pub fn initial_probe(window_width: u32, window_height: u32) -> Point {
    Point {
        x: (window_width / 4).min(i32::MAX as u32) as i32,
        y: (window_height / 2).min(i32::MAX as u32) as i32,
    }
}

/// Advances the probe by one frame of input.
///
/// A click places the probe directly and the arrow keys are ignored for that
/// frame. Otherwise each held arrow moves it one pixel. The result is always
/// clamped to `bounds`.
pub fn update_probe(
    probe: &mut Point,
    controls: ProbeControlsSnapshot,
    bounds: ProbeBounds,
) -> ProbeUpdateReport {
    let previous = *probe;

    let target = match controls.click {
        Some(click) => click,
        None => Point {
            x: probe.x.saturating_add(axis_from_pair(controls.right, controls.left)),
            y: probe.y.saturating_add(axis_from_pair(controls.down, controls.up)),
        },
    };

    let clamped_target = Point {
        x: target.x.clamp(0, bounds.max_x.max(0)),
        y: target.y.clamp(0, bounds.max_y.max(0)),
    };

    *probe = clamped_target;

    ProbeUpdateReport {
        moved: *probe != previous,
        clamped: clamped_target != target,
    }
}

fn axis_from_pair(positive: bool, negative: bool) -> i32 {
    match (positive, negative) {
        (true, false) => 1,
        (false, true) => -1,
        _ => 0,
    }
}
