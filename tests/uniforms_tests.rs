// Host-side tests for GPU uniform packing and the bundled shader.

use glam::{DMat3, DVec2};
use mandel_core::{
    AffineView, ViewUniforms, ESCAPE_RADIUS, INSIDE_COLOR, MANDELBROT_WGSL, MAX_ITERATIONS,
    OUTSIDE_COLOR,
};

#[test]
fn uniform_block_has_wgsl_layout_size() {
    // mat3x3<f32> (3 x 16) + 2 x vec4<f32> + u32 + f32 + vec2<u32>
    assert_eq!(std::mem::size_of::<ViewUniforms>(), 96);
    assert_eq!(std::mem::size_of::<ViewUniforms>() % 16, 0);
    let u = ViewUniforms::default();
    assert_eq!(bytemuck::bytes_of(&u).len(), 96);
}

#[test]
fn default_uniforms_use_identity_and_tuning_constants() {
    let u = ViewUniforms::default();
    assert_eq!(
        u.view,
        [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]]
    );
    assert_eq!(u.max_iterations, MAX_ITERATIONS);
    assert_eq!(u.escape_radius, ESCAPE_RADIUS);
    assert_eq!(u.outside_color, OUTSIDE_COLOR);
    assert_eq!(u.inside_color, INSIDE_COLOR);
}

#[test]
fn exported_transform_packs_as_padded_columns() {
    let mut view = AffineView::new(2.0);
    view.pan(DVec2::new(-0.5, 0.25)).unwrap();
    view.zoom_at(DVec2::new(-0.5, 0.25), 0.5).unwrap();

    let u = ViewUniforms::from_transform(&view.export_transform());
    assert_eq!(u.view[0], [1.0, 0.0, 0.0, 0.0]);
    assert_eq!(u.view[1], [0.0, 0.5, 0.0, 0.0]);
    assert_eq!(u.view[2], [-0.5, 0.25, 1.0, 0.0]);
}

#[test]
fn packed_matrix_reproduces_forward_map_in_f32() {
    let mut view = AffineView::new(16.0 / 9.0);
    view.zoom_at(DVec2::new(-0.75, 0.1), 0.3).unwrap();
    let u = ViewUniforms::from_transform(&view.export_transform());

    for (x, y) in [(-1.0f32, -1.0f32), (0.0, 0.0), (0.5, -0.25), (1.0, 1.0)] {
        // same arithmetic the vertex stage does: view * vec3(pos, 1)
        let cx = u.view[0][0] * x + u.view[1][0] * y + u.view[2][0];
        let cy = u.view[0][1] * x + u.view[1][1] * y + u.view[2][1];
        let expected = view.forward(DVec2::new(x as f64, y as f64));
        assert!((cx as f64 - expected.x).abs() < 1e-5);
        assert!((cy as f64 - expected.y).abs() < 1e-5);
    }
}

#[test]
fn set_transform_only_touches_matrix() {
    let mut u = ViewUniforms::default();
    u.max_iterations = 500;
    u.set_transform(&DMat3::from_scale(glam::DVec2::new(3.0, 2.0)));
    assert_eq!(u.view[0], [3.0, 0.0, 0.0, 0.0]);
    assert_eq!(u.view[1], [0.0, 2.0, 0.0, 0.0]);
    assert_eq!(u.max_iterations, 500);
}

#[test]
fn shader_declares_expected_entry_points_and_block() {
    assert!(MANDELBROT_WGSL.contains("fn vs_fullscreen"));
    assert!(MANDELBROT_WGSL.contains("fn fs_mandelbrot"));
    assert!(MANDELBROT_WGSL.contains("view: mat3x3<f32>"));
    assert!(MANDELBROT_WGSL.contains("max_iterations: u32"));
    assert!(MANDELBROT_WGSL.contains("@group(0) @binding(0)"));
}
