use glam::Vec3;

use super::*;
use crate::entity::Positioned;

struct Crate {
  at: Vec3,
}

impl Positioned for Crate {
  fn position(&self) -> Vec3 {
    self.at
  }
}

// =========================================================================
// Module surface
// =========================================================================

/// The threshold is fixed at 2 and the validated depth range tops out at 8.
#[test]
fn test_policy_constants() {
  assert_eq!(POPULATION_THRESHOLD, 2);
  assert_eq!(MAX_DEPTH, 8);
}

/// Borrowed entities: the tree stores references, the caller keeps
/// ownership.
#[test]
fn test_build_over_borrowed_entities() {
  let crates: Vec<Crate> = (0..16)
    .map(|i| Crate {
      at: Vec3::new(i as f32 - 7.5, (i % 4) as f32 - 1.5, -(i as f32) * 0.5 + 3.7),
    })
    .collect();

  let builder = OctreeBuilder::new(OctreeConfig::new(Vec3::ZERO, 20.0, 3));
  let root = builder.build(crates.iter());

  assert_eq!(root.entity_count(), crates.len());
  assert!(std::ptr::eq(root.entities()[0], &crates[0]));
  assert_eq!(builder.config().max_depth, 3);

  // Every entity is inside the root, so locate always lands somewhere
  for c in &crates {
    assert!(root.locate(c.at).is_some());
  }
}

/// Root bounds match the configured cube.
#[test]
fn test_root_bounds() {
  let config = OctreeConfig::new(Vec3::new(1.0, 2.0, 3.0), 10.0, 2);
  let root = OctreeBuilder::new(config).build(vec![Vec3::ONE, Vec3::splat(2.5)]);

  assert_eq!(root.bounds(), Aabb3::from_center_size(Vec3::new(1.0, 2.0, 3.0), 10.0));
  assert_eq!(root.half_size(), 5.0);
}
