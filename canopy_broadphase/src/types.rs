// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the broad phase: interaction groups and rays.

use glam::Vec3;

bitflags::bitflags! {
    /// Membership bits for broad-phase filtering.
    ///
    /// Eight groups are named here; the remaining bits of the backing `u32`
    /// are free for callers via [`Groups::from_bits_retain`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Groups: u32 {
        /// Group 1.
        const GROUP_1 = 1 << 0;
        /// Group 2.
        const GROUP_2 = 1 << 1;
        /// Group 3.
        const GROUP_3 = 1 << 2;
        /// Group 4.
        const GROUP_4 = 1 << 3;
        /// Group 5.
        const GROUP_5 = 1 << 4;
        /// Group 6.
        const GROUP_6 = 1 << 5;
        /// Group 7.
        const GROUP_7 = 1 << 6;
        /// Group 8.
        const GROUP_8 = 1 << 7;
        /// Every group.
        const ALL = u32::MAX;
    }
}

impl Default for Groups {
    fn default() -> Self {
        Self::ALL
    }
}

/// Pairwise filter deciding which proxies may interact.
///
/// Two proxies interact when each one's memberships intersect the other's
/// filter; the test is symmetric, so a pair is either reported to both sides
/// or to neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InteractionGroups {
    /// Groups this proxy belongs to.
    pub memberships: Groups,
    /// Groups this proxy is willing to interact with.
    pub filter: Groups,
}

impl InteractionGroups {
    /// Create a filter from memberships and a filter mask.
    pub const fn new(memberships: Groups, filter: Groups) -> Self {
        Self {
            memberships,
            filter,
        }
    }

    /// A proxy that belongs to every group and interacts with everything.
    pub const fn all() -> Self {
        Self::new(Groups::ALL, Groups::ALL)
    }

    /// A proxy that interacts with nothing.
    pub const fn none() -> Self {
        Self::new(Groups::empty(), Groups::empty())
    }

    /// Whether two filtered proxies interact.
    pub fn test(self, other: Self) -> bool {
        self.memberships.intersects(other.filter) && other.memberships.intersects(self.filter)
    }
}

impl Default for InteractionGroups {
    fn default() -> Self {
        Self::all()
    }
}

/// A ray for broad-phase probes.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Direction; need not be normalized.
    pub dir: Vec3,
    /// Largest ray parameter considered, in units of `dir`.
    pub max_t: f32,
}

impl Ray {
    /// Create a ray from an origin, a direction, and a parameter cap.
    pub const fn new(origin: Vec3, dir: Vec3, max_t: f32) -> Self {
        Self { origin, dir, max_t }
    }

    /// The point at parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}
