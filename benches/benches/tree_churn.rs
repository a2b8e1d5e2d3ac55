// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_bvh::{Aabb, Tree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::Vec3;

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

fn gen_random_boxes(count: usize, world: f32, max_half: f32, seed: u64) -> Vec<Aabb> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let center = Vec3::new(
            rng.next_f32() * world,
            rng.next_f32() * world,
            rng.next_f32() * world,
        );
        let half = Vec3::splat(0.25 + rng.next_f32() * max_half);
        out.push(Aabb::from_center_half_extents(center, half));
    }
    out
}

fn build_tree(boxes: &[Aabb]) -> (Tree<u32>, Vec<canopy_bvh::NodeIndex>) {
    let mut tree = Tree::new();
    let leaves = boxes
        .iter()
        .enumerate()
        .map(|(i, aabb)| tree.insert(i as u32, *aabb))
        .collect();
    (tree, leaves)
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_insert");
    for &n in &[1_000usize, 10_000] {
        let boxes = gen_random_boxes(n, 100.0, 1.0, 0x1234_5678);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_{n}"), |b| {
            b.iter_batched(
                || boxes.clone(),
                |boxes| {
                    let mut tree: Tree<u32> = Tree::new();
                    for (i, aabb) in boxes.iter().enumerate() {
                        black_box(tree.insert(i as u32, *aabb));
                    }
                    tree
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_update");
    for &n in &[1_000usize, 10_000] {
        let boxes = gen_random_boxes(n, 100.0, 1.0, 0x9e37_79b9);
        let (tree, leaves) = build_tree(&boxes);

        // Small jitter: most updates land inside the fat box and do nothing.
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("jitter_{n}"), |b| {
            b.iter_batched(
                || (tree.clone(), leaves.clone(), Rng::new(0xfeed)),
                |(mut tree, leaves, mut rng)| {
                    for (i, &leaf) in leaves.iter().enumerate() {
                        let d = Vec3::new(rng.next_f32() * 0.05, 0.0, 0.0);
                        let tight = Aabb::new(boxes[i].min + d, boxes[i].max + d);
                        black_box(tree.update(leaf, tight, d));
                    }
                    tree
                },
                BatchSize::SmallInput,
            );
        });

        // Long hops: every update forces a remove/reinsert.
        group.bench_function(format!("teleport_{n}"), |b| {
            b.iter_batched(
                || (tree.clone(), leaves.clone(), Rng::new(0xbeef)),
                |(mut tree, leaves, mut rng)| {
                    for (i, &leaf) in leaves.iter().enumerate() {
                        let d = Vec3::new(20.0 + rng.next_f32() * 20.0, 0.0, 0.0);
                        let tight = Aabb::new(boxes[i].min + d, boxes[i].max + d);
                        black_box(tree.update(leaf, tight, d));
                    }
                    tree
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_remove");
    for &n in &[1_000usize, 10_000] {
        let boxes = gen_random_boxes(n, 100.0, 1.0, 0x5555_aaaa);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("drain_{n}"), |b| {
            b.iter_batched(
                || build_tree(&boxes),
                |(mut tree, leaves)| {
                    for leaf in leaves {
                        tree.remove(leaf);
                    }
                    tree
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_update, bench_remove);
criterion_main!(benches);
