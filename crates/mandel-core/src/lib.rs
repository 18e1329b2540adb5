pub mod clock;
pub mod constants;
pub mod controller;
pub mod error;
pub mod input;
pub mod uniforms;
pub mod view;
pub static MANDELBROT_WGSL: &str = include_str!("../shaders/mandelbrot.wgsl");

pub use clock::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use input::*;
pub use uniforms::*;
pub use view::*;
