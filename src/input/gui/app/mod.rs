pub mod frame_limiter;
pub mod gui_app;
pub mod ports;
pub mod probe_input;
