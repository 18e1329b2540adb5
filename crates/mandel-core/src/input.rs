use glam::DVec2;

/// Placement of the render surface in the coordinate space pointer events arrive in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    /// Surface anchored at the origin, e.g. a native window's client area.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    #[inline]
    pub fn aspect_ratio(&self) -> Option<f64> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }

    /// Convert a device position into normalized `[-1, 1]` coordinates with +Y up.
    ///
    /// Returns `None` for an empty surface.
    #[inline]
    pub fn normalize(&self, px: f64, py: f64) -> Option<DVec2> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let x = 2.0 * (px - self.left) / self.width - 1.0;
        let y = 1.0 - 2.0 * (py - self.top) / self.height;
        Some(DVec2::new(x, y))
    }
}

/// Last cursor position in device pixels, for platforms whose button events
/// carry no coordinates (winit reports them separately from motion).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorTracker {
    last_px: Option<DVec2>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self { last_px: None }
    }

    /// Record a motion event and return its normalized position.
    pub fn moved(&mut self, rect: &SurfaceRect, px: f64, py: f64) -> Option<DVec2> {
        self.last_px = Some(DVec2::new(px, py));
        rect.normalize(px, py)
    }

    /// Normalized position for a button press. `None` until the cursor has moved.
    pub fn pressed(&self, rect: &SurfaceRect) -> Option<DVec2> {
        let p = self.last_px?;
        rect.normalize(p.x, p.y)
    }
}

/// Zoom multiplier for one wheel event. Only the sign of `delta_y` matters.
///
/// Positive `delta_y` (wheel rolled toward the user) zooms out by `1 + zoom_speed`,
/// negative zooms in by `1 - zoom_speed`. Zero or NaN deltas produce no zoom.
#[inline]
pub fn wheel_zoom_factor(delta_y: f64, zoom_speed: f64) -> Option<f64> {
    if delta_y == 0.0 || delta_y.is_nan() {
        return None;
    }
    Some(1.0 + zoom_speed * delta_y.signum())
}
