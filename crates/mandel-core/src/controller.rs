//! Pointer-driven pan/zoom with inertial drift.
//!
//! The controller is the only writer of its [`AffineView`] and [`PointerState`].
//! Front ends translate platform events into calls on it (or into
//! [`InputEvent`]s for [`PointerInertiaController::handle`]) and call
//! [`PointerInertiaController::advance`] once per frame before reading the
//! transform.

use glam::{DMat3, DVec2};

use crate::constants::{
    DEFAULT_DAMPING_PER_MS, DEFAULT_ZOOM_SPEED, MIN_MOVE_INTERVAL_MS, REST_SPEED,
};
use crate::error::{ConfigError, ViewError};
use crate::input::{wheel_zoom_factor, SurfaceRect};
use crate::view::AffineView;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Fraction of fling velocity removed per millisecond (continuous rate).
    pub damping: f64,
    /// Fractional scale change per wheel notch.
    pub zoom_speed: f64,
    /// Lower bound on the interval between pointer samples.
    pub min_move_interval_ms: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING_PER_MS,
            zoom_speed: DEFAULT_ZOOM_SPEED,
            min_move_interval_ms: MIN_MOVE_INTERVAL_MS,
        }
    }
}

impl ControllerConfig {
    pub fn new(damping: f64, zoom_speed: f64) -> Result<Self, ConfigError> {
        let config = Self {
            damping,
            zoom_speed,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_min_move_interval(mut self, interval_ms: f64) -> Result<Self, ConfigError> {
        self.min_move_interval_ms = interval_ms;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ConfigError::Damping(self.damping));
        }
        // zoom_speed >= 1 would make a zoom-in notch non-positive
        if !(self.zoom_speed >= 0.0 && self.zoom_speed < 1.0) {
            return Err(ConfigError::ZoomSpeed(self.zoom_speed));
        }
        if !(self.min_move_interval_ms.is_finite() && self.min_move_interval_ms > 0.0) {
            return Err(ConfigError::MinMoveInterval(self.min_move_interval_ms));
        }
        Ok(())
    }
}

/// Last known pointer position and motion, in both coordinate spaces.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub screen_pos: DVec2,
    pub prev_screen_pos: DVec2,
    /// `view.forward(screen_pos)` under the current view.
    pub complex_pos: DVec2,
    /// Complex point that was under the pointer when the drag started.
    pub click_complex_pos: DVec2,
    /// Screen units per millisecond.
    pub velocity: DVec2,
    pub dragging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// A pointer position in normalized screen coordinates with a monotonic timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pos: DVec2,
    pub time_ms: f64,
}

impl PointerSample {
    pub fn new(pos: DVec2, time_ms: f64) -> Self {
        Self { pos, time_ms }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerSample),
    PointerMove(PointerSample),
    PointerUp,
    Wheel { delta_y: f64 },
    Resize { width: u32, height: u32 },
}

#[derive(Clone, Debug)]
pub struct PointerInertiaController {
    config: ControllerConfig,
    view: AffineView,
    pointer: PointerState,
    last_sample_ms: Option<f64>,
}

impl PointerInertiaController {
    /// Build a controller for a surface with the given aspect ratio.
    ///
    /// Fails with [`ConfigError`] when `config` does not pass [`ControllerConfig::validate`].
    pub fn new(config: ControllerConfig, aspect_ratio: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config, aspect_ratio))
    }

    fn from_valid(config: ControllerConfig, aspect_ratio: f64) -> Self {
        Self {
            config,
            view: AffineView::new(aspect_ratio),
            pointer: PointerState::default(),
            last_sample_ms: None,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn view(&self) -> &AffineView {
        &self.view
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn phase(&self) -> DragPhase {
        if self.pointer.dragging {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    /// Snapshot of the forward screen→complex transform for the renderer.
    pub fn export_transform(&self) -> DMat3 {
        self.view.export_transform()
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(sample) => self.on_pointer_down(sample),
            InputEvent::PointerMove(sample) => self.on_pointer_move(sample),
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::Wheel { delta_y } => self.on_wheel(delta_y),
            InputEvent::Resize { width, height } => self.on_resize(width, height),
        }
    }

    pub fn on_pointer_down(&mut self, sample: PointerSample) {
        if self.track(sample).is_none() {
            return;
        }
        self.pointer.click_complex_pos = self.pointer.complex_pos;
        self.pointer.dragging = true;
        log::debug!(
            "[pointer] press at ({:.4}, {:.4})",
            self.pointer.click_complex_pos.x,
            self.pointer.click_complex_pos.y
        );
    }

    pub fn on_pointer_up(&mut self) {
        if !self.pointer.dragging {
            return;
        }
        self.pointer.dragging = false;
        log::debug!(
            "[pointer] release, fling velocity ({:.5}, {:.5})/ms",
            self.pointer.velocity.x,
            self.pointer.velocity.y
        );
    }

    pub fn on_pointer_move(&mut self, sample: PointerSample) {
        let Some(elapsed_ms) = self.track(sample) else {
            return;
        };
        if !self.pointer.dragging {
            return;
        }
        let dt = elapsed_ms.max(self.config.min_move_interval_ms);
        self.pointer.velocity = (self.pointer.screen_pos - self.pointer.prev_screen_pos) / dt;

        // Re-anchor: the complex point grabbed at press goes back under the pointer.
        let anchor_delta = self.pointer.click_complex_pos - self.pointer.complex_pos;
        let result = self.view.pan(anchor_delta);
        self.settle(result);
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        let Some(factor) = wheel_zoom_factor(delta_y, self.config.zoom_speed) else {
            return;
        };
        let result = self.view.zoom_at(self.pointer.complex_pos, factor);
        if result.is_ok() {
            log::debug!("[view] zoom x{factor} -> scale {:e}", self.view.scale());
        }
        self.settle(result);
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        let Some(ratio) = SurfaceRect::from_size(width as f64, height as f64).aspect_ratio() else {
            return;
        };
        let result = self.view.set_aspect_ratio(ratio);
        self.settle(result);
    }

    /// Step the fling simulation by `dt_ms`. Does nothing while dragging.
    ///
    /// Velocity decays as `v * exp(-damping * dt)` and the view moves by the
    /// integral of that velocity over the step, mapped through the view's linear
    /// part and negated. Both are exact for any step length, so splitting a
    /// step into smaller ones changes neither velocity nor position.
    pub fn advance(&mut self, dt_ms: f64) {
        if self.pointer.dragging || !(dt_ms.is_finite() && dt_ms > 0.0) {
            return;
        }
        if self.pointer.velocity == DVec2::ZERO {
            return;
        }
        let damping = self.config.damping;
        // integral of exp(-damping * t) over [0, dt]
        let travel_ms = if damping > 0.0 {
            -(-damping * dt_ms).exp_m1() / damping
        } else {
            dt_ms
        };
        let complex_velocity = self.view.forward_vector(self.pointer.velocity);
        let result = self.view.pan(-travel_ms * complex_velocity);

        let decayed = self.pointer.velocity * (-damping * dt_ms).exp();
        self.pointer.velocity = if decayed.length() < REST_SPEED {
            DVec2::ZERO
        } else {
            decayed
        };
        self.settle(result);
    }

    /// Record a pointer sample. Returns the time since the previous sample, or
    /// `None` when the sample is unusable and was ignored.
    fn track(&mut self, sample: PointerSample) -> Option<f64> {
        if !(sample.pos.is_finite() && sample.time_ms.is_finite()) {
            log::warn!("[pointer] ignoring non-finite sample {:?}", sample);
            return None;
        }
        self.pointer.prev_screen_pos = self.pointer.screen_pos;
        self.pointer.screen_pos = sample.pos;
        self.pointer.complex_pos = self.view.forward(sample.pos);
        let elapsed = self
            .last_sample_ms
            .map_or(0.0, |last| sample.time_ms - last);
        self.last_sample_ms = Some(sample.time_ms);
        Some(elapsed)
    }

    /// Log a rejected mutation and bring `complex_pos` in line with the current view.
    fn settle(&mut self, result: Result<(), ViewError>) {
        if let Err(e) = result {
            log::warn!("[view] mutation skipped: {e}");
        }
        self.pointer.complex_pos = self.view.forward(self.pointer.screen_pos);
    }
}

impl Default for PointerInertiaController {
    fn default() -> Self {
        Self::from_valid(ControllerConfig::default(), 1.0)
    }
}
