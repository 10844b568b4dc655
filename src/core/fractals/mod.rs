pub mod escape_time;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
pub mod view_algorithm;
