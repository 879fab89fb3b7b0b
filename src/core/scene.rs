// Per-frame layout of the tower scene.
//
// Everything the painter needs is computed here from plain inputs, so the
// geometry can be checked without a canvas.

use super::config::RendererConfig;
use super::constants::*;
use super::model::{Institution, Prediction};
use super::projection::{depth, depth_order, in_target_range, project, rotate_y};
use glam::DVec2;

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn inflate(&self, by: f64) -> Rect {
        Rect {
            x: self.x - by,
            y: self.y - by,
            w: self.w + 2.0 * by,
            h: self.h + 2.0 * by,
        }
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TowerLayout {
    /// Index into the institution slice the scene was built from.
    pub index: usize,
    /// Projected foot of the tower (bottom-center of the body).
    pub base: DVec2,
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub depth: f64,
    pub highlighted: bool,
    pub selected: bool,
}

impl TowerLayout {
    pub fn body(&self) -> Rect {
        Rect {
            x: self.base.x - self.width * 0.5,
            y: self.base.y - self.height,
            w: self.width,
            h: self.height,
        }
    }

    pub fn highlight_outline(&self) -> Rect {
        self.body().inflate(HIGHLIGHT_PADDING)
    }

    pub fn badge_center(&self) -> DVec2 {
        DVec2::new(
            self.base.x + self.width * 0.5 + BADGE_GAP + BADGE_RADIUS,
            self.base.y - self.height + BADGE_RADIUS,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    CurrentRank,
    PredictedRank,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub rect: Rect,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneLayout {
    pub viewport: Viewport,
    pub grid_divisions: u32,
    /// Towers in painting order, farthest first.
    pub towers: Vec<TowerLayout>,
    pub banners: [Banner; 2],
    pub paused: bool,
}

pub struct SceneInput<'a> {
    pub institutions: &'a [Institution],
    pub prediction: &'a Prediction,
    pub angle: f64,
    pub rotating: bool,
    pub selected: Option<usize>,
    pub config: &'a RendererConfig,
}

fn banners(prediction: &Prediction) -> [Banner; 2] {
    let rect_at = |row: f64| Rect {
        x: BANNER_LEFT,
        y: BANNER_TOP + row * (BANNER_HEIGHT + BANNER_GAP),
        w: BANNER_WIDTH,
        h: BANNER_HEIGHT,
    };
    [
        Banner {
            kind: BannerKind::CurrentRank,
            rect: rect_at(0.0),
            text: format!("Current Rank: #{}", prediction.current_rank),
        },
        Banner {
            kind: BannerKind::PredictedRank,
            rect: rect_at(1.0),
            text: format!("Predicted: #{}", prediction.predicted_rank),
        },
    ]
}

/// Lay out one frame. `None` when the viewport has no drawable area.
pub fn layout_scene(input: &SceneInput<'_>, viewport: Viewport) -> Option<SceneLayout> {
    if !viewport.is_drawable() {
        return None;
    }
    let cfg = input.config;
    let center = viewport.center();
    let towers = depth_order(input.institutions, input.angle)
        .into_iter()
        .map(|index| {
            let inst = &input.institutions[index];
            let scale = inst.effective_scale();
            let rotated = rotate_y(inst.position, input.angle);
            TowerLayout {
                index,
                base: project(rotated, center, cfg),
                width: cfg.base_tower_width * scale,
                height: cfg.base_tower_height * scale,
                scale,
                depth: depth(inst.position, input.angle),
                highlighted: in_target_range(
                    inst.rank_cutoff,
                    input.prediction.predicted_rank,
                    cfg.highlight_tolerance,
                ),
                selected: input.selected == Some(index),
            }
        })
        .collect();
    Some(SceneLayout {
        viewport,
        grid_divisions: cfg.grid_divisions,
        towers,
        banners: banners(input.prediction),
        paused: !input.rotating,
    })
}

/// Everything a repaint depends on. A frame is only painted when this changes.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RedrawKey {
    pub angle: f64,
    pub rotating: bool,
    pub prediction: Prediction,
    pub viewport: Viewport,
    pub device_pixel_ratio: f64,
    pub selected: Option<usize>,
}

impl RedrawKey {
    /// True unless `last` was painted from exactly these inputs.
    pub fn needs_paint(&self, last: Option<&RedrawKey>) -> bool {
        last != Some(self)
    }
}

impl SceneLayout {
    /// Topmost tower under `point`, as an institution index.
    pub fn hit_test(&self, point: DVec2) -> Option<usize> {
        self.towers
            .iter()
            .rev()
            .find(|t| t.body().contains(point))
            .map(|t| t.index)
    }
}
