// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ray probes with interaction groups.
//!
//! Cast a picking ray through a small scene, first against everything, then
//! filtered to a single group.
//!
//! Run:
//! - `cargo run -p canopy_examples --example ray_probe`

use canopy_broadphase::{BroadPhase, Groups, InteractionGroups, Ray};
use canopy_bvh::Aabb;
use glam::Vec3;

fn main() {
    let mut bp: BroadPhase<&str> = BroadPhase::new();

    let scenery = InteractionGroups::new(Groups::GROUP_1, Groups::ALL);
    let gameplay = InteractionGroups::new(Groups::GROUP_2, Groups::ALL);

    bp.add_proxy(
        "statue",
        Aabb::new(Vec3::new(3.0, 0.0, -0.5), Vec3::new(4.0, 2.0, 0.5)),
        scenery,
    );
    bp.add_proxy(
        "door",
        Aabb::new(Vec3::new(8.0, 0.0, -1.0), Vec3::new(8.5, 2.5, 1.0)),
        gameplay,
    );
    bp.add_proxy(
        "lamp",
        Aabb::new(Vec3::new(5.0, 4.0, -0.5), Vec3::new(6.0, 5.0, 0.5)),
        scenery,
    );

    let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X, 20.0);

    println!("all candidates:");
    for (_, name) in bp.ray_cast_all(ray, InteractionGroups::default()) {
        println!("  {name}");
    }

    // Pick only gameplay objects: the statue is skipped even though the ray
    // passes through its box first.
    let picker = InteractionGroups::new(Groups::ALL, Groups::GROUP_2);
    let picked = bp.ray_cast_all(ray, picker);
    println!("gameplay candidates:");
    for (_, name) in &picked {
        println!("  {name}");
    }
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].1, "door");
}
