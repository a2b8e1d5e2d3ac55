// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

//! External baseline: build and box-query throughput against `rstar`.
//!
//! Run with `cargo bench -p canopy_benches --features compare_rstar`.
//!
//! The comparison is indicative only. `rstar` bulk-loads a static R-tree,
//! while the dynamic tree pays per-insert for cheap incremental updates;
//! queries run over whatever structure each one builds.

use canopy_broadphase::{BroadPhase, InteractionGroups};
use canopy_bvh::Aabb;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::Vec3;
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{AABB as RstarAabb, RTree};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        (v as f32) / ((1u64 << 24) as f32)
    }
}

type RstarEntry = GeomWithData<Rectangle<[f32; 3]>, u32>;

fn gen_random_boxes(count: usize, world: f32, seed: u64) -> Vec<Aabb> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let center = Vec3::new(
            rng.next_f32() * world,
            rng.next_f32() * world,
            rng.next_f32() * world,
        );
        let half = Vec3::splat(0.25 + rng.next_f32());
        out.push(Aabb::from_center_half_extents(center, half));
    }
    out
}

fn to_rstar(boxes: &[Aabb]) -> Vec<RstarEntry> {
    boxes
        .iter()
        .enumerate()
        .map(|(i, b)| {
            GeomWithData::new(
                Rectangle::from_corners(b.min.to_array(), b.max.to_array()),
                i as u32,
            )
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_10k");
    let boxes = gen_random_boxes(10_000, 200.0, 0x0dd_ba11);
    group.throughput(Throughput::Elements(boxes.len() as u64));

    group.bench_function("canopy_incremental", |b| {
        b.iter(|| {
            let mut bp: BroadPhase<u32> = BroadPhase::new();
            for (i, aabb) in boxes.iter().enumerate() {
                bp.add_proxy(i as u32, *aabb, InteractionGroups::default());
            }
            bp
        });
    });

    group.bench_function("rstar_bulk", |b| {
        b.iter(|| RTree::bulk_load(to_rstar(&boxes)));
    });
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_10k");
    let boxes = gen_random_boxes(10_000, 200.0, 0xca11_ab1e);

    let mut bp: BroadPhase<u32> = BroadPhase::new();
    for (i, aabb) in boxes.iter().enumerate() {
        bp.add_proxy(i as u32, *aabb, InteractionGroups::default());
    }
    let rtree: RTree<RstarEntry> = RTree::bulk_load(to_rstar(&boxes));

    let probes = gen_random_boxes(256, 200.0, 0xdead_beef);
    group.throughput(Throughput::Elements(probes.len() as u64));

    group.bench_function("canopy_query_aabb", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for probe in &probes {
                hits += bp
                    .query_aabb(black_box(*probe), InteractionGroups::default())
                    .count();
            }
            hits
        });
    });

    group.bench_function("rstar_locate_in_envelope", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for probe in &probes {
                let envelope =
                    RstarAabb::from_corners(probe.min.to_array(), probe.max.to_array());
                hits += rtree.locate_in_envelope_intersecting(&envelope).count();
            }
            hits
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
