// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy BVH: a dynamic bounding-volume tree for 3D broad-phase collision detection.
//!
//! Canopy BVH indexes a changing population of fat axis-aligned bounding boxes,
//! each carrying an opaque payload, so that spatial queries can skip the
//! quadratic all-pairs test.
//!
//! - Insert, remove, and update leaves in O(log n) with a volume-cost insertion
//!   heuristic and AVL-style rotations along the ancestor chain.
//! - Leaves store a *fat* AABB, padded on every side and biased toward recent
//!   motion, so small per-frame movement rarely touches the structure.
//! - Nodes live in a contiguous pool with an embedded free list; leaf indices
//!   handed out by [`Tree::insert`] stay valid until that leaf is removed.
//!
//! The tree itself answers no geometric queries. It exposes its shape through
//! structural accessors ([`Tree::root`], [`Tree::children`], [`Tree::aabb`],
//! [`Tree::payload`]) and leaves traversal to higher layers such as
//! `canopy_broadphase`.
//!
//! # Example
//!
//! ```rust
//! use canopy_bvh::{Aabb, Tree};
//! use glam::Vec3;
//!
//! let mut tree: Tree<u32> = Tree::new();
//!
//! // Register two objects by their tight bounds.
//! let a = tree.insert(1, Aabb::new(Vec3::ZERO, Vec3::ONE));
//! let b = tree.insert(2, Aabb::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(11.0, 1.0, 1.0)));
//!
//! // A small drift stays inside the fat box: no structural change.
//! let moved = tree.update(
//!     a,
//!     Aabb::new(Vec3::new(0.02, 0.0, 0.0), Vec3::new(1.02, 1.0, 1.0)),
//!     Vec3::ZERO,
//! );
//! assert!(!moved);
//!
//! // A long hop forces a reinsertion; the handle survives it.
//! let moved = tree.update(
//!     a,
//!     Aabb::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(6.0, 1.0, 1.0)),
//!     Vec3::new(5.0, 0.0, 0.0),
//! );
//! assert!(moved);
//! assert_eq!(tree.payload(a), Some(1));
//!
//! tree.remove(b);
//! tree.remove(a);
//! assert!(tree.is_empty());
//! ```
//!
//! ## Error model
//!
//! The tree is a trusted in-process structure: passing a removed or non-leaf
//! index to [`Tree::remove`] or [`Tree::update`] is a programmer error and
//! panics. No operation returns a recoverable error.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod tree;
pub mod types;

pub use tree::Tree;
pub use types::{Aabb, DEFAULT_AABB_GAP, DEFAULT_DISPLACEMENT_MULTIPLIER, NodeIndex};
