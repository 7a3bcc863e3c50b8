//! Windowed front end: winit for the window and events, pixels for the
//! framebuffer surface.

pub mod app;
pub mod commands;
pub mod errors;
