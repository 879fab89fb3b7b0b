use super::constants::*;
use serde::Deserialize;
use std::time::Duration;

/// Tuning knobs for projection, highlighting and rotation.
///
/// Every field is optional in JSON; missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RendererConfig {
    pub focal_distance: f64,
    pub parallax_factor: f64,
    pub highlight_tolerance: u32,
    pub base_tower_height: f64,
    pub base_tower_width: f64,
    pub grid_divisions: u32,
    pub tick_interval_ms: u32,
    pub rotation_step: f64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            focal_distance: FOCAL_DISTANCE,
            parallax_factor: PARALLAX_FACTOR,
            highlight_tolerance: HIGHLIGHT_TOLERANCE,
            base_tower_height: BASE_TOWER_HEIGHT,
            base_tower_width: BASE_TOWER_WIDTH,
            grid_divisions: GRID_DIVISIONS,
            tick_interval_ms: TICK_INTERVAL_MS,
            rotation_step: ROTATION_STEP_RAD,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("renderer config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

impl RendererConfig {
    /// Parse overrides and sanitize them against the defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: RendererConfig = serde_json::from_str(text)?;
        Ok(cfg.sanitized())
    }

    /// Replace values that would break the render loop with defaults.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            focal_distance: positive_or(self.focal_distance, d.focal_distance),
            parallax_factor: if self.parallax_factor.is_finite() {
                self.parallax_factor
            } else {
                d.parallax_factor
            },
            highlight_tolerance: self.highlight_tolerance,
            base_tower_height: positive_or(self.base_tower_height, d.base_tower_height),
            base_tower_width: positive_or(self.base_tower_width, d.base_tower_width),
            grid_divisions: if self.grid_divisions == 0 {
                d.grid_divisions
            } else {
                self.grid_divisions
            },
            tick_interval_ms: if self.tick_interval_ms == 0 {
                d.tick_interval_ms
            } else {
                self.tick_interval_ms
            },
            rotation_step: if self.rotation_step.is_finite() {
                self.rotation_step
            } else {
                d.rotation_step
            },
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }
}
