//! Frame and event timing.
//!
//! `instant::Instant` is `std::time::Instant` on native targets and wraps
//! `performance.now()` on the web, so the same code drives both front ends.

use instant::Instant;
use std::time::Duration;

/// Measures the time between successive frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Time since the previous call, measured now.
    pub fn tick(&mut self) -> Duration {
        self.sample(Instant::now())
    }

    /// Same as [`tick`](Self::tick) but in milliseconds, the unit the controller integrates in.
    pub fn tick_ms(&mut self) -> f64 {
        self.tick().as_secs_f64() * 1000.0
    }

    /// Time since the previous sample. The first sample yields zero, and so does
    /// a sample that is not later than the previous one.
    pub fn sample(&mut self, now: Instant) -> Duration {
        let dt = match self.last {
            Some(last) if now > last => now - last,
            _ => Duration::ZERO,
        };
        self.last = Some(now);
        dt
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Millisecond timestamps for pointer events, relative to a fixed origin.
#[derive(Clone, Copy, Debug)]
pub struct EventTimer {
    origin: Instant,
}

impl EventTimer {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.at_ms(Instant::now())
    }

    pub fn at_ms(&self, t: Instant) -> f64 {
        if t > self.origin {
            (t - self.origin).as_secs_f64() * 1000.0
        } else {
            0.0
        }
    }
}

impl Default for EventTimer {
    fn default() -> Self {
        Self::new()
    }
}
