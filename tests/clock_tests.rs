// Host-side tests for frame/event timing. On native targets `instant::Instant`
// is `std::time::Instant`, so samples can be constructed directly.

use mandel_core::{EventTimer, FrameClock};
use std::time::{Duration, Instant};

#[test]
fn first_sample_yields_zero() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.sample(Instant::now()), Duration::ZERO);
}

#[test]
fn successive_samples_yield_elapsed_time() {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();
    clock.sample(t0);
    assert_eq!(clock.sample(t0 + Duration::from_millis(16)), Duration::from_millis(16));
    assert_eq!(clock.sample(t0 + Duration::from_millis(50)), Duration::from_millis(34));
}

#[test]
fn repeated_or_backwards_samples_yield_zero() {
    let mut clock = FrameClock::new();
    let t0 = Instant::now() + Duration::from_secs(1);
    clock.sample(t0);
    assert_eq!(clock.sample(t0), Duration::ZERO);
    assert_eq!(clock.sample(t0 - Duration::from_millis(5)), Duration::ZERO);
    // the backwards sample becomes the new reference
    assert_eq!(
        clock.sample(t0 + Duration::from_millis(5)),
        Duration::from_millis(10)
    );
}

#[test]
fn reset_forgets_last_sample() {
    let mut clock = FrameClock::new();
    let t0 = Instant::now();
    clock.sample(t0);
    clock.reset();
    assert_eq!(clock.sample(t0 + Duration::from_millis(100)), Duration::ZERO);
}

#[test]
fn tick_ms_starts_at_zero_then_is_non_negative() {
    let mut clock = FrameClock::default();
    assert_eq!(clock.tick_ms(), 0.0);
    std::thread::sleep(Duration::from_millis(2));
    let dt = clock.tick_ms();
    assert!(dt >= 2.0, "expected at least 2ms, got {dt}");
}

#[test]
fn event_timer_is_monotonic_in_milliseconds() {
    let timer = EventTimer::new();
    let now = Instant::now();
    let a = timer.at_ms(now);
    let b = timer.at_ms(now + Duration::from_millis(250));
    assert!(a >= 0.0);
    assert!((b - a - 250.0).abs() < 1e-6);
    assert!(timer.now_ms() >= a);
}
