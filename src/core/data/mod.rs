pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod fractal_params;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
