// Host-side tests for tuning constants and their relationships.

use mandel_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_constants_are_within_reasonable_bounds() {
    assert!(DEFAULT_DAMPING_PER_MS > 0.0);
    // zoom-in notch must stay positive
    assert!(DEFAULT_ZOOM_SPEED > 0.0 && DEFAULT_ZOOM_SPEED < 1.0);
    assert!(MIN_MOVE_INTERVAL_MS > 0.0);
    assert!(REST_SPEED > 0.0 && REST_SPEED < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn initial_view_is_unit_scale_at_origin() {
    assert_eq!(INITIAL_SCALE, 1.0);
    assert_eq!(INITIAL_TRANSLATION, [0.0, 0.0]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn escape_time_constants_are_sane() {
    assert!(MAX_ITERATIONS > 0);
    assert_eq!(ESCAPE_RADIUS, 2.0);
    for c in OUTSIDE_COLOR.iter().chain(INSIDE_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
    assert_eq!(OUTSIDE_COLOR[3], 1.0);
    assert_eq!(INSIDE_COLOR[3], 1.0);
}

#[test]
fn zoom_notches_are_not_reciprocal() {
    // one notch out then one in lands slightly below the start (1.2 * 0.8 = 0.96)
    let out = 1.0 + DEFAULT_ZOOM_SPEED;
    let back = 1.0 - DEFAULT_ZOOM_SPEED;
    assert!(out * back < 1.0);
}
