use super::*;

// =========================================================================
// Octant Tests - canonical ordering
// =========================================================================

/// Slot index must match the enum's position in ALL.
#[test]
fn test_index_matches_canonical_position() {
  for (i, octant) in Octant::ALL.iter().enumerate() {
    assert_eq!(octant.index(), i, "{:?} should sit at slot {}", octant, i);
    assert_eq!(Octant::from_index(i), Some(*octant));
  }
  assert_eq!(Octant::from_index(8), None);
}

/// Slots 0-3 are above the parent, 4-7 below.
#[test]
fn test_top_bottom_split() {
  for octant in Octant::ALL {
    let above = octant.sign().y > 0.0;
    assert_eq!(octant.is_top(), above, "{:?} top/bottom mismatch", octant);
    assert_eq!(octant.is_top(), octant.index() < 4);
  }
}

/// Within each group the (x, z) signs cycle (-,-), (+,-), (+,+), (-,+).
#[test]
fn test_xz_sign_cycle() {
  let expected = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

  for (i, octant) in Octant::ALL.iter().enumerate() {
    let sign = octant.sign();
    let (ex, ez) = expected[i % 4];
    assert_eq!((sign.x, sign.z), (ex, ez), "{:?} xz sign mismatch", octant);
  }
}

/// All eight sign combinations appear exactly once.
#[test]
fn test_signs_are_distinct() {
  for a in 0..8 {
    for b in (a + 1)..8 {
      assert_ne!(
        Octant::ALL[a].sign(),
        Octant::ALL[b].sign(),
        "Slots {} and {} share a sign",
        a,
        b
      );
    }
  }
}

/// Child center = parent center + sign * size / 4.
#[test]
fn test_child_center_offsets() {
  let parent = Vec3::new(10.0, 20.0, 30.0);
  let size = 8.0;

  assert_eq!(
    Octant::Top0.child_center(parent, size),
    Vec3::new(8.0, 22.0, 28.0)
  );
  assert_eq!(
    Octant::Bottom2.child_center(parent, size),
    Vec3::new(12.0, 18.0, 32.0)
  );
}
