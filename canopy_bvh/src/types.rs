// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and tree handles.

use glam::Vec3;

/// Default padding applied on every side of a leaf's stored AABB.
pub const DEFAULT_AABB_GAP: f32 = 0.1;

/// Default multiplier applied to a leaf's displacement when padding it toward
/// its direction of motion.
pub const DEFAULT_DISPLACEMENT_MULTIPLIER: f32 = 2.0;

/// Axis-aligned bounding box in 3D.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// A degenerate box at the origin.
    pub const ZERO: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    /// Create a new AABB from min/max corners.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from a center point and half-extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Extents along each axis.
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        0.5 * (self.min + self.max)
    }

    /// Volume: the product of the three extents.
    pub fn volume(&self) -> f32 {
        self.extents().element_product()
    }

    /// The smallest box enclosing both `a` and `b`.
    pub fn merge(a: &Self, b: &Self) -> Self {
        Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    /// The smallest box enclosing `self` and `other`.
    pub fn merged(&self, other: &Self) -> Self {
        Self::merge(self, other)
    }

    /// Whether `other` lies fully inside `self` (closed on all six faces).
    pub fn contains(&self, other: &Self) -> bool {
        self.min.cmple(other.min).all() && other.max.cmple(self.max).all()
    }

    /// Whether the two boxes overlap (closed intervals on each axis).
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }

    /// This box grown by `gap` on all six sides.
    pub fn fattened(&self, gap: f32) -> Self {
        let gap = Vec3::splat(gap);
        Self {
            min: self.min - gap,
            max: self.max + gap,
        }
    }

    /// Slab test: whether a ray starting at `origin` hits the box within the
    /// parameter range `[0, max_t]`.
    ///
    /// `inv_dir` is the componentwise reciprocal of the ray direction; axes
    /// with zero direction resolve through the resulting infinities.
    pub fn ray_hit(&self, origin: Vec3, inv_dir: Vec3, max_t: f32) -> bool {
        let t1 = (self.min - origin) * inv_dir;
        let t2 = (self.max - origin) * inv_dir;
        let near = t1.min(t2).max_element().max(0.0);
        let far = t1.max(t2).min_element().min(max_t);
        near <= far
    }
}

/// Index of a node slot in a [`Tree`](crate::Tree) pool.
///
/// This is a small, copyable handle. A leaf index returned by
/// [`Tree::insert`](crate::Tree::insert) keeps naming the same leaf, with the
/// same payload, across every other operation; the pool never relocates a
/// live node when it grows or shrinks. Only removing that leaf frees the
/// slot, after which the index must not be used again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Sentinel for "no node" in internal links. Never escapes the public API.
    pub(crate) const NIL: Self = Self(u32::MAX);

    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// The underlying slot index, usable as a key into caller-side tables.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn is_nil(self) -> bool {
        self.0 == u32::MAX
    }
}
