use thiserror::Error;

/// Reasons a view mutation was rejected. The view is left untouched in every case.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("zoom factor must be positive and finite, got {0}")]
    InvalidZoomFactor(f64),
    #[error("aspect ratio must be positive and finite, got {0}")]
    InvalidAspectRatio(f64),
    #[error("mutation would produce a non-finite view (scale={scale}, translation=({tx}, {ty}))")]
    NonFinite { scale: f64, tx: f64, ty: f64 },
}

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("damping must be finite and non-negative, got {0}")]
    Damping(f64),
    #[error("zoom speed must be in [0, 1), got {0}")]
    ZoomSpeed(f64),
    #[error("minimum move interval must be positive, got {0} ms")]
    MinMoveInterval(f64),
}
