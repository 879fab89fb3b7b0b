// Host-side tests for rotation, projection, depth ordering and highlighting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "support/core.rs"]
mod core;

use crate::core::projection::*;
use crate::core::*;
use glam::{DVec2, DVec3};
use std::f64::consts::TAU;

fn tower(name: &str, rank_cutoff: u32, position: [f64; 3], scale: f64) -> Institution {
    Institution {
        name: name.to_string(),
        short_name: None,
        rank_cutoff,
        seat_count: 100,
        difficulty_tier: DifficultyTier::Medium,
        color: Rgb::new(200, 100, 50),
        position: DVec3::from_array(position),
        scale,
    }
}

fn sample_angles() -> impl Iterator<Item = f64> {
    (0..360).map(|i| i as f64 / 360.0 * TAU)
}

#[test]
fn zero_angle_is_identity_rotation() {
    let p = DVec3::new(100.0, 42.0, -35.0);
    let r = rotate_y(p, 0.0);
    assert!((r - p).length() < 1e-12);
}

#[test]
fn quarter_turn_maps_x_onto_depth() {
    let r = rotate_y(DVec3::new(100.0, 0.0, 0.0), TAU / 4.0);
    assert!(r.x.abs() < 1e-9);
    assert!((r.z - 100.0).abs() < 1e-9);
}

#[test]
fn rotation_preserves_height_and_radius() {
    let p = DVec3::new(-80.0, 180.0, 40.0);
    for a in sample_angles() {
        let r = rotate_y(p, a);
        assert_eq!(r.y, p.y);
        let before = (p.x * p.x + p.z * p.z).sqrt();
        let after = (r.x * r.x + r.z * r.z).sqrt();
        assert!((before - after).abs() < 1e-9, "radius changed at {a}");
    }
}

#[test]
fn depth_matches_rotated_z() {
    let p = DVec3::new(120.0, 10.0, -40.0);
    for a in sample_angles() {
        assert!((depth(p, a) - rotate_y(p, a).z).abs() < 1e-9);
    }
}

#[test]
fn projection_at_origin_lands_on_center_shifted_by_height() {
    let cfg = RendererConfig::default();
    let center = DVec2::new(400.0, 300.0);
    let s = project(DVec3::new(0.0, 200.0, 0.0), center, &cfg);
    assert_eq!(s, DVec2::new(400.0, 100.0));
}

#[test]
fn projection_uses_focal_distance_and_parallax() {
    let cfg = RendererConfig::default();
    let center = DVec2::new(0.0, 0.0);
    // z' = 300 halves the horizontal offset at D = 300.
    let s = project(DVec3::new(100.0, 0.0, 300.0), center, &cfg);
    assert!((s.x - 50.0).abs() < 1e-9);
    assert!((s.y - 30.0).abs() < 1e-9);
}

#[test]
fn projection_stays_finite_at_and_behind_the_eye() {
    let cfg = RendererConfig::default();
    let center = DVec2::new(0.0, 0.0);
    for z in [-300.0, -450.0, -1.0e6] {
        let s = project(DVec3::new(10.0, 0.0, z), center, &cfg);
        assert!(s.x.is_finite() && s.y.is_finite(), "z = {z}");
        assert!(s.x > 0.0, "point flipped sides at z = {z}");
    }
}

#[test]
fn projection_is_continuous_in_angle() {
    let cfg = RendererConfig::default();
    let center = DVec2::new(400.0, 300.0);
    let d_theta = 1e-4;
    for inst in default_institutions() {
        for a in sample_angles() {
            let s0 = project(rotate_y(inst.position, a), center, &cfg);
            let s1 = project(rotate_y(inst.position, a + d_theta), center, &cfg);
            assert!(
                (s1 - s0).length() < 0.1,
                "{} jumped {:?} -> {:?} at {a}",
                inst.name,
                s0,
                s1
            );
        }
    }
}

#[test]
fn depth_order_draws_farthest_first_for_all_angles() {
    let towers = default_institutions();
    for a in sample_angles() {
        let order = depth_order(&towers, a);
        assert_eq!(order.len(), towers.len());
        for pair in order.windows(2) {
            let d0 = depth(towers[pair[0]].position, a);
            let d1 = depth(towers[pair[1]].position, a);
            assert!(d0 >= d1, "order not back-to-front at {a}: {d0} then {d1}");
        }
    }
}

#[test]
fn depth_order_is_a_permutation() {
    let towers = default_institutions();
    for a in [0.0, 1.0, 2.5, 4.0] {
        let mut order = depth_order(&towers, a);
        order.sort_unstable();
        assert_eq!(order, (0..towers.len()).collect::<Vec<_>>());
    }
}

#[test]
fn equal_depth_keeps_input_order() {
    let towers = vec![
        tower("A", 1, [0.0, 50.0, 10.0], 1.0),
        tower("B", 2, [0.0, 90.0, 10.0], 1.0),
        tower("C", 3, [0.0, 70.0, 10.0], 1.0),
    ];
    assert_eq!(depth_order(&towers, 0.0), vec![0, 1, 2]);
}

#[test]
fn depth_comparison_is_antisymmetric() {
    let towers = default_institutions();
    for a in sample_angles().step_by(15) {
        for x in &towers {
            for y in &towers {
                let xy = compare_depth(x.position, y.position, a);
                let yx = compare_depth(y.position, x.position, a);
                assert_eq!(xy, yx.reverse());
            }
        }
    }
}

#[test]
fn highlight_window_is_inclusive() {
    assert!(in_target_range(756, 756, 100));
    assert!(in_target_range(656, 756, 100));
    assert!(in_target_range(856, 756, 100));
    assert!(!in_target_range(655, 756, 100));
    assert!(!in_target_range(857, 756, 100));
    assert!(!in_target_range(99, 756, 100));
}

#[test]
fn highlight_window_handles_small_ranks() {
    assert!(in_target_range(1, 50, 100));
    assert!(in_target_range(0, 100, 100));
    assert!(!in_target_range(0, 101, 100));
}
