// Shared view/interaction tuning constants used by both web and native frontends.

// Interaction
pub const DEFAULT_DAMPING_PER_MS: f64 = 0.02; // fraction of fling velocity removed per ms
pub const DEFAULT_ZOOM_SPEED: f64 = 0.2; // fractional scale change per wheel notch
pub const MIN_MOVE_INTERVAL_MS: f64 = 1.0; // floor for the pointer move interval
pub const REST_SPEED: f64 = 1e-9; // screen units per ms; slower fling velocity snaps to zero

// Initial view
pub const INITIAL_SCALE: f64 = 1.0;
pub const INITIAL_TRANSLATION: [f64; 2] = [0.0, 0.0];

// Escape-time evaluation
pub const MAX_ITERATIONS: u32 = 100;
pub const ESCAPE_RADIUS: f32 = 2.0;

// Palette
pub const OUTSIDE_COLOR: [f32; 4] = [0.3, 0.3, 0.7, 1.0]; // escaped points
pub const INSIDE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0]; // bounded points
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
