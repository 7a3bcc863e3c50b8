//! Input adapters for the viewer.
//!
//! Startup arguments come in through `cli`; window, keyboard and mouse input
//! through `gui`.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
