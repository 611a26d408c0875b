//! Octree build and traversal benchmarks.
//!
//! Scenarios:
//! - **uniform**: points scattered over the whole root cube
//! - **clustered**: most points packed into one corner (deep, narrow tree)
//!
//! Each scenario is built at several entity counts and depth limits, then
//! walked with the depth-bounded iterators.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use octree_index::{EntityRetention, OctreeBuilder, OctreeConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SPACE_RANGE: f32 = 100.0;

// =============================================================================
// Point sets
// =============================================================================

fn uniform(count: usize, seed: u64) -> Vec<Vec3> {
  let mut rng = StdRng::seed_from_u64(seed);
  let half = SPACE_RANGE * 0.5;
  (0..count)
    .map(|_| {
      Vec3::new(
        rng.random_range(-half..half),
        rng.random_range(-half..half),
        rng.random_range(-half..half),
      )
    })
    .collect()
}

/// 90% of points inside a 5-unit cube near one corner.
fn clustered(count: usize, seed: u64) -> Vec<Vec3> {
  let mut rng = StdRng::seed_from_u64(seed);
  let half = SPACE_RANGE * 0.5;
  (0..count)
    .map(|i| {
      if i % 10 == 0 {
        Vec3::new(
          rng.random_range(-half..half),
          rng.random_range(-half..half),
          rng.random_range(-half..half),
        )
      } else {
        Vec3::new(
          rng.random_range(30.0..35.0),
          rng.random_range(30.0..35.0),
          rng.random_range(30.0..35.0),
        )
      }
    })
    .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_build(c: &mut Criterion) {
  let mut group = c.benchmark_group("build");

  for &count in &[100usize, 1_000, 10_000] {
    for &depth in &[3, 6] {
      let config = OctreeConfig::new(Vec3::ZERO, SPACE_RANGE, depth);

      let points = uniform(count, 42);
      group.bench_with_input(
        BenchmarkId::new(format!("uniform_d{}", depth), count),
        &points,
        |b, points| {
          let builder = OctreeBuilder::new(config.clone());
          b.iter(|| black_box(builder.build(points.iter().copied())))
        },
      );

      let points = clustered(count, 42);
      group.bench_with_input(
        BenchmarkId::new(format!("clustered_d{}", depth), count),
        &points,
        |b, points| {
          let builder = OctreeBuilder::new(config.clone());
          b.iter(|| black_box(builder.build(points.iter().copied())))
        },
      );
    }
  }

  group.finish();
}

fn bench_retention(c: &mut Criterion) {
  let mut group = c.benchmark_group("retention");
  let points = uniform(10_000, 7);

  for retention in [EntityRetention::Retain, EntityRetention::LeavesOnly] {
    let builder = OctreeBuilder::new(
      OctreeConfig::new(Vec3::ZERO, SPACE_RANGE, 6).with_retention(retention),
    );
    group.bench_function(format!("{:?}", retention), |b| {
      b.iter(|| black_box(builder.build(points.iter().copied())))
    });
  }

  group.finish();
}

fn bench_traversal(c: &mut Criterion) {
  let mut group = c.benchmark_group("traversal");
  let root = OctreeBuilder::new(OctreeConfig::new(Vec3::ZERO, SPACE_RANGE, 6))
    .build(uniform(10_000, 9));

  for depth in [1u32, 3, 5] {
    group.bench_with_input(BenchmarkId::new("nodes_at_depth", depth), &depth, |b, &d| {
      b.iter(|| black_box(root.nodes_at_depth(d).count()))
    });
    group.bench_with_input(BenchmarkId::new("nodes_up_to_depth", depth), &depth, |b, &d| {
      b.iter(|| black_box(root.nodes_up_to_depth(d).count()))
    });
  }

  let probes = uniform(1_000, 11);
  group.bench_function("locate_1000", |b| {
    b.iter(|| {
      probes
        .iter()
        .filter_map(|&p| root.locate(p))
        .map(|node| node.entity_count())
        .sum::<usize>()
    })
  });

  group.finish();
}

criterion_group!(benches, bench_build, bench_retention, bench_traversal);
criterion_main!(benches);
