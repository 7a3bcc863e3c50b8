pub mod bounds;
pub mod controls;
pub mod motion;

pub use bounds::ProbeBounds;
pub use controls::ProbeControlsSnapshot;
pub use motion::{ProbeUpdateReport, initial_probe, update_probe};
