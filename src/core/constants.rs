// Scene geometry and animation defaults. `RendererConfig::default()` is built
// from these; pages can override any of them through `data-config`.

// Projection
pub const FOCAL_DISTANCE: f64 = 300.0; // eye distance in scene units
pub const PARALLAX_FACTOR: f64 = 0.1; // screen-space y shift per unit of rotated depth
pub const MIN_DEPTH_RATIO: f64 = 0.05; // D + z' is clamped to at least this fraction of D

// Tower sizing (before per-institution scale)
pub const BASE_TOWER_HEIGHT: f64 = 100.0;
pub const BASE_TOWER_WIDTH: f64 = 40.0;

// Highlight window around the predicted rank, inclusive
pub const HIGHLIGHT_TOLERANCE: u32 = 100;

// Background reference grid
pub const GRID_DIVISIONS: u32 = 10;

// Auto-rotation
pub const TICK_INTERVAL_MS: u32 = 50;
pub const ROTATION_STEP_RAD: f64 = 0.02;

// Overlay banners, in CSS pixels from the top-left corner
pub const BANNER_LEFT: f64 = 20.0;
pub const BANNER_TOP: f64 = 20.0;
pub const BANNER_WIDTH: f64 = 180.0;
pub const BANNER_HEIGHT: f64 = 30.0;
pub const BANNER_GAP: f64 = 10.0;

// Highlight decorations
pub const HIGHLIGHT_PADDING: f64 = 4.0;
pub const BADGE_RADIUS: f64 = 12.0;
pub const BADGE_GAP: f64 = 8.0; // between tower edge and badge rim
