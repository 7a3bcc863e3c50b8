pub mod colour_map;
pub mod escape_time;
pub mod fractal_mode;
pub mod julia;
pub mod mandelbrot;
