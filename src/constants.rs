/// Page wiring and paint palette.
///
/// Geometry and timing defaults live in `core::constants`; this file keeps
/// the DOM ids the front-end expects and the colors/fonts the painter uses.
// DOM element ids
pub const CANVAS_ID: &str = "rank-tower-canvas";
pub const DATA_SCRIPT_ID: &str = "rank-tower-data";
pub const STATUS_ID: &str = "rank-tower-status";
pub const DETAILS_ID: &str = "rank-tower-details";
pub const TOGGLE_BUTTON_ID: &str = "rank-tower-toggle";
pub const CONFIG_ATTRIBUTE: &str = "data-config";

// Background
pub const BG_INNER: &str = "rgba(30, 41, 59, 1)";
pub const BG_OUTER: &str = "rgba(2, 6, 23, 1)";
pub const BG_RADIUS_FACTOR: f64 = 0.7; // of the larger viewport side
pub const GRID_COLOR: &str = "rgba(148, 163, 184, 0.08)";

// Tower shading
pub const SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.35)";
pub const SHADOW_OFFSET: f64 = 6.0;
pub const SHADOW_HEIGHT: f64 = 10.0;
pub const BASE_ALPHA: f64 = 0.3;
pub const BASE_HALF_HEIGHT: f64 = 4.0;
pub const BODY_TOP_BRIGHTEN: f64 = 1.25;
pub const BODY_BOTTOM_DARKEN: f64 = 0.6;
pub const BORDER_WIDTH: f64 = 2.0;

// Labels (sizes before tower scale)
pub const RANK_FONT_PX: f64 = 12.0;
pub const NAME_FONT_PX: f64 = 11.0;
pub const LABEL_COLOR: &str = "rgba(255, 255, 255, 0.95)";
pub const NAME_COLOR: &str = "rgba(203, 213, 225, 0.9)";

// Highlight and selection
pub const HIGHLIGHT_COLOR: &str = "rgba(250, 204, 21, 1)";
pub const HIGHLIGHT_WIDTH: f64 = 3.0;
pub const BADGE_TEXT_COLOR: &str = "rgba(15, 23, 42, 1)";
pub const SELECTED_COLOR: &str = "rgba(255, 255, 255, 0.8)";
pub const SELECTED_DASH: [f64; 2] = [6.0, 4.0];

// Banners
pub const CURRENT_BANNER_COLOR: &str = "rgba(220, 38, 38, 0.85)";
pub const PREDICTED_BANNER_COLOR: &str = "rgba(22, 163, 74, 0.85)";
pub const BANNER_FONT: &str = "bold 14px system-ui";
pub const BANNER_TEXT_INSET: f64 = 10.0;
pub const PAUSED_FONT: &str = "bold 12px system-ui";
pub const PAUSED_COLOR: &str = "rgba(148, 163, 184, 0.9)";
