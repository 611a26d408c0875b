//! Positioned - the only thing the octree needs to know about an entity.
//!
//! Nodes store handles, never the entities themselves. A handle is anything
//! cheap to clone that can report a world-space position: a shared
//! reference, an `Rc`/`Arc`, or a bare `Vec3` when the position is all the
//! caller cares about.

use std::rc::Rc;
use std::sync::Arc;

use glam::Vec3;

/// An entity handle with a 3D position.
pub trait Positioned {
  /// World-space position of the entity.
  fn position(&self) -> Vec3;
}

impl Positioned for Vec3 {
  #[inline]
  fn position(&self) -> Vec3 {
    *self
  }
}

impl Positioned for [f32; 3] {
  #[inline]
  fn position(&self) -> Vec3 {
    Vec3::from_array(*self)
  }
}

impl<T: Positioned + ?Sized> Positioned for &T {
  #[inline]
  fn position(&self) -> Vec3 {
    (**self).position()
  }
}

impl<T: Positioned + ?Sized> Positioned for Rc<T> {
  #[inline]
  fn position(&self) -> Vec3 {
    (**self).position()
  }
}

impl<T: Positioned + ?Sized> Positioned for Arc<T> {
  #[inline]
  fn position(&self) -> Vec3 {
    (**self).position()
  }
}
