// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proxy management and queries over the dynamic tree.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use canopy_bvh::{Aabb, NodeIndex, Tree};
use glam::Vec3;

use crate::types::{InteractionGroups, Ray};

/// Identifier of a proxy registered with a [`BroadPhase`].
///
/// This is the underlying tree leaf index; it stays valid until the proxy is
/// removed.
pub type ProxyId = NodeIndex;

/// The broad phase: a dynamic tree of fat proxy boxes plus the bookkeeping
/// needed to turn motion into candidate collision pairs.
///
/// Proxies that were added or actually reinserted by
/// [`move_proxy`](Self::move_proxy) are *moved*; [`compute_pairs`](Self::compute_pairs)
/// only enumerates pairs touching the moved set, so a mostly-static world
/// costs next to nothing per frame.
pub struct BroadPhase<P: Copy + Debug> {
    tree: Tree<P>,
    /// Interaction groups per pool slot; `None` for slots without a proxy.
    groups: Vec<Option<InteractionGroups>>,
    /// Proxies added or reinserted since the last pair computation.
    moved: Vec<ProxyId>,
    proxy_count: usize,
}

impl<P: Copy + Debug> Default for BroadPhase<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Copy + Debug> Debug for BroadPhase<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BroadPhase")
            .field("proxies", &self.proxy_count)
            .field("moved", &self.moved.len())
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

impl<P: Copy + Debug> BroadPhase<P> {
    /// Create an empty broad phase with the tree's default padding.
    pub fn new() -> Self {
        Self {
            tree: Tree::new(),
            groups: Vec::new(),
            moved: Vec::new(),
            proxy_count: 0,
        }
    }

    /// Create an empty broad phase with explicit fat-AABB padding.
    pub fn with_padding(gap: f32, displacement_multiplier: f32) -> Self {
        Self {
            tree: Tree::with_padding(gap, displacement_multiplier),
            groups: Vec::new(),
            moved: Vec::new(),
            proxy_count: 0,
        }
    }

    /// Register a proxy. The new proxy counts as moved for the next
    /// [`compute_pairs`](Self::compute_pairs).
    pub fn add_proxy(&mut self, payload: P, aabb: Aabb, groups: InteractionGroups) -> ProxyId {
        let id = self.tree.insert(payload, aabb);
        if self.groups.len() <= id.index() {
            self.groups.resize(id.index() + 1, None);
        }
        self.groups[id.index()] = Some(groups);
        self.proxy_count += 1;
        self.mark_moved(id);
        id
    }

    /// Remove a proxy. Its id becomes invalid.
    pub fn remove_proxy(&mut self, id: ProxyId) {
        self.tree.remove(id);
        self.groups[id.index()] = None;
        self.proxy_count -= 1;
        self.moved.retain(|&m| m != id);
    }

    /// Reconcile a moved proxy with its new tight AABB.
    ///
    /// Returns `true` iff the tree was structurally modified, in which case
    /// the proxy joins the moved set.
    pub fn move_proxy(&mut self, id: ProxyId, aabb: Aabb, displacement: Vec3) -> bool {
        let reinserted = self.tree.update(id, aabb, displacement);
        if reinserted {
            self.mark_moved(id);
        }
        reinserted
    }

    /// Candidate overlap pairs involving at least one proxy that moved since
    /// the previous call, filtered by interaction groups.
    ///
    /// Pairs come back deduplicated, each ordered smaller id first, and the
    /// moved set is cleared.
    pub fn compute_pairs(&mut self) -> Vec<(ProxyId, ProxyId)> {
        let mut pairs = Vec::new();
        let moved = core::mem::take(&mut self.moved);

        for &proxy in &moved {
            let fat = self.tree.aabb(proxy);
            let proxy_groups = self.proxy_groups(proxy);
            let root = self.tree.root().expect("moved proxy in an empty tree");

            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                if !self.tree.aabb(id).intersects(&fat) {
                    continue;
                }
                if let Some((left, right)) = self.tree.children(id) {
                    stack.push(left);
                    stack.push(right);
                } else if id != proxy && proxy_groups.test(self.proxy_groups(id)) {
                    pairs.push(if id < proxy { (id, proxy) } else { (proxy, id) });
                }
            }
        }

        pairs.sort_unstable();
        pairs.dedup();
        pairs
    }

    /// Proxies whose fat box intersects `aabb`, filtered against `filter`.
    pub fn query_aabb(
        &self,
        aabb: Aabb,
        filter: InteractionGroups,
    ) -> impl Iterator<Item = (ProxyId, P)> + '_ {
        let mut out = Vec::new();
        if let Some(root) = self.tree.root() {
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                if !self.tree.aabb(id).intersects(&aabb) {
                    continue;
                }
                if let Some((left, right)) = self.tree.children(id) {
                    stack.push(left);
                    stack.push(right);
                } else if filter.test(self.proxy_groups(id)) {
                    out.push((id, self.payload(id)));
                }
            }
        }
        out.into_iter()
    }

    /// Walk every proxy whose fat box the ray hits, in traversal order.
    ///
    /// The visitor returns the new maximum ray parameter: `ray.max_t` to
    /// continue unchanged, a smaller value to clamp the rest of the
    /// traversal, or `0.0` to stop. Candidates are fat-box hits; narrow-phase
    /// refinement is the visitor's business.
    pub fn ray_cast<F>(&self, ray: Ray, filter: InteractionGroups, mut visitor: F)
    where
        F: FnMut(ProxyId, P) -> f32,
    {
        let Some(root) = self.tree.root() else {
            return;
        };
        let inv_dir = ray.dir.recip();
        let mut max_t = ray.max_t;

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !self.tree.aabb(id).ray_hit(ray.origin, inv_dir, max_t) {
                continue;
            }
            if let Some((left, right)) = self.tree.children(id) {
                stack.push(left);
                stack.push(right);
            } else if filter.test(self.proxy_groups(id)) {
                let t = visitor(id, self.payload(id));
                if t <= 0.0 {
                    return;
                }
                max_t = max_t.min(t);
            }
        }
    }

    /// Collect every candidate the ray reaches, in traversal order.
    pub fn ray_cast_all(&self, ray: Ray, filter: InteractionGroups) -> Vec<(ProxyId, P)> {
        let mut out = Vec::new();
        self.ray_cast(ray, filter, |id, payload| {
            out.push((id, payload));
            ray.max_t
        });
        out
    }

    /// Remove every proxy.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.groups.clear();
        self.moved.clear();
        self.proxy_count = 0;
    }

    // --- accessors ---

    /// The proxy's fat box as stored in the tree.
    pub fn proxy_aabb(&self, id: ProxyId) -> Aabb {
        self.tree.aabb(id)
    }

    /// The proxy's payload.
    pub fn payload(&self, id: ProxyId) -> P {
        self.tree.payload(id).expect("proxy id names an internal node")
    }

    /// The proxy's interaction groups.
    pub fn proxy_groups(&self, id: ProxyId) -> InteractionGroups {
        self.groups[id.index()].expect("no proxy at this id")
    }

    /// The tree the proxies live in, for custom traversals.
    pub fn tree(&self) -> &Tree<P> {
        &self.tree
    }

    /// Number of registered proxies.
    pub fn len(&self) -> usize {
        self.proxy_count
    }

    /// Whether no proxies are registered.
    pub fn is_empty(&self) -> bool {
        self.proxy_count == 0
    }

    fn mark_moved(&mut self, id: ProxyId) {
        if !self.moved.contains(&id) {
            self.moved.push(id);
        }
    }
}
