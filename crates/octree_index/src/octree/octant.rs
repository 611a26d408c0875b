//! Octant - the canonical index-to-octant mapping.
//!
//! The order is fixed: it decides child slot layout, first-match partition
//! priority, and traversal order. Changing it changes which child wins an
//! entity sitting exactly on a shared face.

use glam::Vec3;

/// One of the eight child octants of a cube, in canonical order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Octant {
  /// y+, x-, z-
  Top0 = 0,
  /// y+, x+, z-
  Top1 = 1,
  /// y+, x+, z+
  Top2 = 2,
  /// y+, x-, z+
  Top3 = 3,
  /// y-, x-, z-
  Bottom0 = 4,
  /// y-, x+, z-
  Bottom1 = 5,
  /// y-, x+, z+
  Bottom2 = 6,
  /// y-, x-, z+
  Bottom3 = 7,
}

/// Per-slot (x, y, z) sign of the child center offset.
const SIGNS: [[f32; 3]; 8] = [
  [-1.0, 1.0, -1.0],
  [1.0, 1.0, -1.0],
  [1.0, 1.0, 1.0],
  [-1.0, 1.0, 1.0],
  [-1.0, -1.0, -1.0],
  [1.0, -1.0, -1.0],
  [1.0, -1.0, 1.0],
  [-1.0, -1.0, 1.0],
];

impl Octant {
  /// Number of octants per node.
  pub const COUNT: usize = 8;

  /// All octants in canonical order.
  pub const ALL: [Octant; 8] = [
    Octant::Top0,
    Octant::Top1,
    Octant::Top2,
    Octant::Top3,
    Octant::Bottom0,
    Octant::Bottom1,
    Octant::Bottom2,
    Octant::Bottom3,
  ];

  /// Slot index (0-7).
  #[inline]
  pub const fn index(self) -> usize {
    self as usize
  }

  /// Octant for a slot index, or None if `index >= 8`.
  #[inline]
  pub fn from_index(index: usize) -> Option<Self> {
    Self::ALL.get(index).copied()
  }

  /// Sign of the child center offset along each axis (components are ±1).
  #[inline]
  pub fn sign(self) -> Vec3 {
    Vec3::from_array(SIGNS[self.index()])
  }

  /// True for slots 0-3 (child center above the parent).
  #[inline]
  pub const fn is_top(self) -> bool {
    (self as u8) < 4
  }

  /// Center of this octant's child cube for a parent cube of edge `size`.
  ///
  /// child_center = parent_center + sign * size / 4
  #[inline]
  pub fn child_center(self, parent_center: Vec3, size: f32) -> Vec3 {
    parent_center + self.sign() * (size * 0.25)
  }
}

#[cfg(test)]
#[path = "octant_test.rs"]
mod octant_test;
