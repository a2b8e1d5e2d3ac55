// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Broadphase: pair generation, overlap queries, and ray probes over
//! the Canopy dynamic bounding-volume tree.
//!
//! The tree in `canopy_bvh` only maintains structure; this crate walks it.
//!
//! - Register proxies (a payload, a tight AABB, and interaction groups) and
//!   move them frame to frame.
//! - [`BroadPhase::compute_pairs`] enumerates candidate overlap pairs
//!   involving proxies that actually moved since the previous call.
//! - [`BroadPhase::query_aabb`] and [`BroadPhase::ray_cast`] answer one-off
//!   probes against the fat boxes.
//!
//! Results are *candidates*: the broad phase tests fat AABBs only, and a
//! narrow phase is expected to refine them against real shape geometry.
//!
//! # Example
//!
//! ```rust
//! use canopy_broadphase::{BroadPhase, InteractionGroups};
//! use canopy_bvh::Aabb;
//! use glam::Vec3;
//!
//! let mut broad_phase: BroadPhase<u32> = BroadPhase::new();
//!
//! let a = broad_phase.add_proxy(
//!     1,
//!     Aabb::new(Vec3::ZERO, Vec3::ONE),
//!     InteractionGroups::default(),
//! );
//! let b = broad_phase.add_proxy(
//!     2,
//!     Aabb::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(1.5, 1.0, 1.0)),
//!     InteractionGroups::default(),
//! );
//!
//! let pairs = broad_phase.compute_pairs();
//! assert_eq!(pairs, vec![(a, b)]);
//!
//! // Nothing moved since, so there is nothing new to report.
//! assert!(broad_phase.compute_pairs().is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod broad_phase;
pub mod types;

pub use broad_phase::{BroadPhase, ProxyId};
pub use types::{Groups, InteractionGroups, Ray};
