//! GPU-side packing of the view transform.
//!
//! The layout matches `ViewUniforms` in `shaders/mandelbrot.wgsl`. A WGSL
//! `mat3x3<f32>` in a uniform buffer stores each column in a 16-byte slot,
//! so the matrix travels as three padded columns.

use glam::DMat3;

use crate::constants::{ESCAPE_RADIUS, INSIDE_COLOR, MAX_ITERATIONS, OUTSIDE_COLOR};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniforms {
    pub view: [[f32; 4]; 3],
    pub outside_color: [f32; 4],
    pub inside_color: [f32; 4],
    pub max_iterations: u32,
    pub escape_radius: f32,
    pub _pad: [u32; 2],
}

impl ViewUniforms {
    /// Pack a column-major screen→complex transform with the default palette and iteration budget.
    pub fn from_transform(transform: &DMat3) -> Self {
        Self {
            view: pack_columns(transform),
            outside_color: OUTSIDE_COLOR,
            inside_color: INSIDE_COLOR,
            max_iterations: MAX_ITERATIONS,
            escape_radius: ESCAPE_RADIUS,
            _pad: [0; 2],
        }
    }

    pub fn set_transform(&mut self, transform: &DMat3) {
        self.view = pack_columns(transform);
    }
}

impl Default for ViewUniforms {
    fn default() -> Self {
        Self::from_transform(&DMat3::IDENTITY)
    }
}

fn pack_columns(m: &DMat3) -> [[f32; 4]; 3] {
    [m.x_axis, m.y_axis, m.z_axis].map(|c| {
        let c = c.as_vec3();
        [c.x, c.y, c.z, 0.0]
    })
}
