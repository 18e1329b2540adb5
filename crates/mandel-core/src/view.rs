//! Screen ↔ complex-plane mapping.
//!
//! Screen space is the normalized `[-1, 1] x [-1, 1]` square with +Y up. The
//! forward map is a non-rotating scale followed by a translation:
//!
//! ```text
//! complex.x = scale * aspect_ratio * screen.x + translation.x
//! complex.y = scale                * screen.y + translation.y
//! ```
//!
//! Both directions are cached and rebuilt from `(scale, aspect_ratio,
//! translation)` on every successful mutation, so the inverse never drifts away
//! from the forward map.

use glam::{DAffine2, DMat2, DMat3, DVec2};

use crate::constants::{INITIAL_SCALE, INITIAL_TRANSLATION};
use crate::error::ViewError;

#[derive(Clone, Debug, PartialEq)]
pub struct AffineView {
    scale: f64,
    aspect_ratio: f64,
    translation: DVec2,
    forward: DAffine2,
    inverse: DAffine2,
}

impl AffineView {
    /// Create the startup view: scale 1, no translation.
    ///
    /// A non-positive or non-finite `aspect_ratio` falls back to a square surface.
    pub fn new(aspect_ratio: f64) -> Self {
        let aspect_ratio = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            aspect_ratio
        } else {
            1.0
        };
        let translation = DVec2::from(INITIAL_TRANSLATION);
        let (forward, inverse) = build_maps(INITIAL_SCALE, aspect_ratio, translation);
        Self {
            scale: INITIAL_SCALE,
            aspect_ratio,
            translation,
            forward,
            inverse,
        }
    }

    /// Complex-plane units per normalized screen unit along Y.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Complex-plane units per normalized screen unit along X.
    pub fn x_scale(&self) -> f64 {
        self.scale * self.aspect_ratio
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Complex coordinate shown at the screen origin.
    pub fn translation(&self) -> DVec2 {
        self.translation
    }

    pub fn set_aspect_ratio(&mut self, ratio: f64) -> Result<(), ViewError> {
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(ViewError::InvalidAspectRatio(ratio));
        }
        self.commit(self.scale, ratio, self.translation)
    }

    /// Map a normalized screen point to the complex plane.
    #[inline]
    pub fn forward(&self, screen: DVec2) -> DVec2 {
        self.forward.transform_point2(screen)
    }

    /// Map a complex-plane point back to normalized screen space.
    #[inline]
    pub fn inverse(&self, complex: DVec2) -> DVec2 {
        self.inverse.transform_point2(complex)
    }

    /// Apply only the linear (scale) part of the forward map; for velocities and deltas.
    #[inline]
    pub fn forward_vector(&self, screen_delta: DVec2) -> DVec2 {
        self.forward.transform_vector2(screen_delta)
    }

    /// Shift the view by a complex-plane delta.
    pub fn pan(&mut self, delta: DVec2) -> Result<(), ViewError> {
        self.commit(self.scale, self.aspect_ratio, self.translation + delta)
    }

    /// Multiply the scale by `factor` while keeping `pivot` at the same screen position.
    ///
    /// `factor > 1` widens the visible region (zoom out), `factor < 1` magnifies.
    pub fn zoom_at(&mut self, pivot: DVec2, factor: f64) -> Result<(), ViewError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(ViewError::InvalidZoomFactor(factor));
        }
        let translation = pivot + (self.translation - pivot) * factor;
        self.commit(self.scale * factor, self.aspect_ratio, translation)
    }

    /// Homogeneous forward matrix, column-major: columns `(sx, 0, 0)`, `(0, sy, 0)`, `(tx, ty, 1)`.
    pub fn export_transform(&self) -> DMat3 {
        DMat3::from(self.forward)
    }

    pub fn inverse_transform(&self) -> DMat3 {
        DMat3::from(self.inverse)
    }

    fn commit(&mut self, scale: f64, aspect_ratio: f64, translation: DVec2) -> Result<(), ViewError> {
        let (forward, inverse) = build_maps(scale, aspect_ratio, translation);
        if !(scale > 0.0 && forward.is_finite() && inverse.is_finite()) {
            return Err(ViewError::NonFinite {
                scale,
                tx: translation.x,
                ty: translation.y,
            });
        }
        self.scale = scale;
        self.aspect_ratio = aspect_ratio;
        self.translation = translation;
        self.forward = forward;
        self.inverse = inverse;
        Ok(())
    }
}

impl Default for AffineView {
    fn default() -> Self {
        Self::new(1.0)
    }
}

fn build_maps(scale: f64, aspect_ratio: f64, translation: DVec2) -> (DAffine2, DAffine2) {
    let s = DVec2::new(scale * aspect_ratio, scale);
    let forward = DAffine2::from_mat2_translation(DMat2::from_diagonal(s), translation);
    let inverse = DAffine2::from_mat2_translation(DMat2::from_diagonal(s.recip()), -translation / s);
    (forward, inverse)
}
