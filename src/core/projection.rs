// Rotation about the vertical axis and the fixed-eye perspective projection.
//
// The eye looks down +z from `z = -focal_distance`; larger rotated depth
// means farther away, so painting goes from largest `z'` to smallest.

use super::config::RendererConfig;
use super::constants::MIN_DEPTH_RATIO;
use super::model::Institution;
use glam::{DVec2, DVec3};
use std::cmp::Ordering;

/// Rotate `(x, z)` by `angle` around the y axis. `y` is carried through.
#[inline]
pub fn rotate_y(p: DVec3, angle: f64) -> DVec3 {
    let (s, c) = angle.sin_cos();
    DVec3::new(c * p.x - s * p.z, p.y, s * p.x + c * p.z)
}

/// Rotated depth of a point; the sort key for painting.
#[inline]
pub fn depth(p: DVec3, angle: f64) -> f64 {
    let (s, c) = angle.sin_cos();
    s * p.x + c * p.z
}

/// Project an already rotated point to screen space around `center`.
#[inline]
pub fn project(rotated: DVec3, center: DVec2, cfg: &RendererConfig) -> DVec2 {
    let d = cfg.focal_distance;
    let denom = (d + rotated.z).max(d * MIN_DEPTH_RATIO);
    DVec2::new(
        center.x + rotated.x * d / denom,
        center.y - rotated.y + rotated.z * cfg.parallax_factor,
    )
}

/// Back-to-front comparison of two positions at `angle`.
pub fn compare_depth(a: DVec3, b: DVec3, angle: f64) -> Ordering {
    depth(b, angle).total_cmp(&depth(a, angle))
}

/// Indices into `towers` in painting order (farthest first).
///
/// Equal depths keep input order, so the result is a deterministic total order.
pub fn depth_order(towers: &[Institution], angle: f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..towers.len()).collect();
    order.sort_by(|&a, &b| {
        compare_depth(towers[a].position, towers[b].position, angle).then(a.cmp(&b))
    });
    order
}

/// True when `rank_cutoff` is within `tolerance` of the predicted rank (inclusive).
#[inline]
pub fn in_target_range(rank_cutoff: u32, predicted_rank: u32, tolerance: u32) -> bool {
    rank_cutoff.abs_diff(predicted_rank) <= tolerance
}
