// Host-side tests for pointer normalization and wheel mapping.

use glam::DVec2;
use mandel_core::{wheel_zoom_factor, CursorTracker, SurfaceRect};

#[test]
fn corners_map_to_unit_square_with_y_up() {
    let rect = SurfaceRect::from_size(800.0, 600.0);
    assert_eq!(rect.normalize(0.0, 0.0), Some(DVec2::new(-1.0, 1.0)));
    assert_eq!(rect.normalize(800.0, 600.0), Some(DVec2::new(1.0, -1.0)));
    assert_eq!(rect.normalize(400.0, 300.0), Some(DVec2::new(0.0, 0.0)));
    assert_eq!(rect.normalize(600.0, 150.0), Some(DVec2::new(0.5, 0.5)));
}

#[test]
fn offset_rect_is_subtracted_first() {
    let rect = SurfaceRect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };
    assert_eq!(rect.normalize(100.0, 50.0), Some(DVec2::new(-1.0, 1.0)));
    assert_eq!(rect.normalize(200.0, 100.0), Some(DVec2::new(0.0, 0.0)));
    // outside the surface extrapolates rather than clamping
    assert_eq!(rect.normalize(350.0, 200.0), Some(DVec2::new(1.5, -2.0)));
}

#[test]
fn empty_surface_has_no_mapping() {
    assert_eq!(SurfaceRect::from_size(0.0, 600.0).normalize(1.0, 1.0), None);
    assert_eq!(SurfaceRect::from_size(800.0, 0.0).normalize(1.0, 1.0), None);
    assert_eq!(SurfaceRect::from_size(0.0, 600.0).aspect_ratio(), None);
}

#[test]
fn aspect_ratio_is_width_over_height() {
    assert_eq!(SurfaceRect::from_size(1920.0, 1080.0).aspect_ratio(), Some(1920.0 / 1080.0));
}

#[test]
fn wheel_factor_uses_sign_only() {
    assert_eq!(wheel_zoom_factor(1.0, 0.2), Some(1.2));
    assert_eq!(wheel_zoom_factor(120.0, 0.2), Some(1.2));
    assert_eq!(wheel_zoom_factor(0.01, 0.2), Some(1.2));
    assert_eq!(wheel_zoom_factor(-1.0, 0.2), Some(0.8));
    assert_eq!(wheel_zoom_factor(-53.0, 0.2), Some(0.8));
}

#[test]
fn wheel_factor_ignores_zero_and_nan() {
    assert_eq!(wheel_zoom_factor(0.0, 0.2), None);
    assert_eq!(wheel_zoom_factor(-0.0, 0.2), None);
    assert_eq!(wheel_zoom_factor(f64::NAN, 0.2), None);
}

#[test]
fn press_before_any_motion_has_no_position() {
    let rect = SurfaceRect::from_size(800.0, 600.0);
    let cursor = CursorTracker::new();
    assert_eq!(cursor.pressed(&rect), None);
}

#[test]
fn press_uses_last_motion_position() {
    let rect = SurfaceRect::from_size(800.0, 600.0);
    let mut cursor = CursorTracker::default();
    assert_eq!(cursor.moved(&rect, 200.0, 450.0), Some(DVec2::new(-0.5, -0.5)));
    assert_eq!(cursor.moved(&rect, 600.0, 150.0), Some(DVec2::new(0.5, 0.5)));
    assert_eq!(cursor.pressed(&rect), Some(DVec2::new(0.5, 0.5)));
}

#[test]
fn motion_outside_surface_is_still_tracked() {
    // a drag that leaves the window keeps reporting extrapolated positions
    let rect = SurfaceRect::from_size(800.0, 600.0);
    let mut cursor = CursorTracker::new();
    assert_eq!(cursor.moved(&rect, 1200.0, -300.0), Some(DVec2::new(2.0, 2.0)));
    assert_eq!(cursor.pressed(&rect), Some(DVec2::new(2.0, 2.0)));
}

#[test]
fn press_is_normalized_against_current_surface() {
    let mut cursor = CursorTracker::new();
    cursor.moved(&SurfaceRect::from_size(800.0, 600.0), 400.0, 300.0);
    let resized = SurfaceRect::from_size(1600.0, 600.0);
    assert_eq!(cursor.pressed(&resized), Some(DVec2::new(-0.5, 0.0)));
    assert_eq!(cursor.pressed(&SurfaceRect::from_size(0.0, 0.0)), None);
}
