// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree basics.
//!
//! Insert a few leaves, nudge one, teleport it, and walk the structure.
//!
//! Run:
//! - `cargo run -p canopy_examples --example tree_basics`

use canopy_bvh::{Aabb, NodeIndex, Tree};
use glam::Vec3;

fn main() {
    let mut tree: Tree<&str> = Tree::new();

    let crate_box = tree.insert(
        "crate",
        Aabb::new(Vec3::ZERO, Vec3::ONE),
    );
    let barrel = tree.insert(
        "barrel",
        Aabb::new(Vec3::new(4.0, 0.0, 0.0), Vec3::new(5.0, 1.5, 1.0)),
    );
    let wall = tree.insert(
        "wall",
        Aabb::new(Vec3::new(-10.0, 0.0, -1.0), Vec3::new(10.0, 3.0, -0.5)),
    );
    println!("{tree:?}");

    // A small slide stays inside the fat box: the tree is untouched.
    let nudged = Aabb::new(Vec3::new(0.03, 0.0, 0.0), Vec3::new(1.03, 1.0, 1.0));
    let moved = tree.update(crate_box, nudged, Vec3::new(0.03, 0.0, 0.0));
    println!("nudge reinserted: {moved}");
    assert!(!moved);

    // A long shove forces a reinsertion; the handle and payload survive.
    let shoved = Aabb::new(Vec3::new(7.0, 0.0, 0.0), Vec3::new(8.0, 1.0, 1.0));
    let moved = tree.update(crate_box, shoved, Vec3::new(7.0, 0.0, 0.0));
    println!("shove reinserted: {moved}");
    assert!(moved);
    assert_eq!(tree.payload(crate_box), Some("crate"));

    // Walk the structure through the accessors.
    fn walk(tree: &Tree<&str>, node: NodeIndex, depth: usize) {
        let indent = "  ".repeat(depth);
        match tree.children(node) {
            Some((left, right)) => {
                println!("{indent}node {:?}", tree.aabb(node));
                walk(tree, left, depth + 1);
                walk(tree, right, depth + 1);
            }
            None => println!(
                "{indent}leaf {:?} {:?}",
                tree.payload(node).unwrap(),
                tree.aabb(node)
            ),
        }
    }
    walk(&tree, tree.root().unwrap(), 0);

    tree.remove(barrel);
    tree.remove(wall);
    tree.remove(crate_box);
    assert!(tree.is_empty());
    println!("drained: {tree:?}");
}
