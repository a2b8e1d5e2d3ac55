// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broad-phase pair pipeline.
//!
//! Step a tiny scene a few frames and print the candidate pairs the broad
//! phase reports for each step.
//!
//! Run:
//! - `cargo run -p canopy_examples --example broadphase_pairs`

use canopy_broadphase::{BroadPhase, InteractionGroups};
use canopy_bvh::Aabb;
use glam::Vec3;

fn main() {
    let mut bp: BroadPhase<&str> = BroadPhase::new();

    let _floor = bp.add_proxy(
        "floor",
        Aabb::new(Vec3::new(-20.0, -1.0, -20.0), Vec3::new(20.0, 0.0, 20.0)),
        InteractionGroups::default(),
    );
    let ball = bp.add_proxy(
        "ball",
        Aabb::from_center_half_extents(Vec3::new(0.0, 10.0, 0.0), Vec3::splat(0.5)),
        InteractionGroups::default(),
    );

    // Fresh proxies count as moved: the first pass reports the initial set.
    let pairs = bp.compute_pairs();
    println!("initial pairs: {}", pairs.len());

    // Drop the ball toward the floor; pairs appear once the fat boxes meet.
    let mut y = 10.0_f32;
    for frame in 0..6 {
        let dy = -2.0;
        y += dy;
        let reinserted = bp.move_proxy(
            ball,
            Aabb::from_center_half_extents(Vec3::new(0.0, y, 0.0), Vec3::splat(0.5)),
            Vec3::new(0.0, dy, 0.0),
        );
        let pairs = bp.compute_pairs();
        println!(
            "frame {frame}: y={y:5.1} reinserted={reinserted} candidates={}",
            pairs.len()
        );
        for (a, b) in &pairs {
            println!("  {} <-> {}", bp.payload(*a), bp.payload(*b));
        }
    }

    // By the last frame the ball's box overlaps the floor slab.
    let pairs = bp.compute_pairs();
    assert!(pairs.is_empty(), "no motion, no pairs");
}
