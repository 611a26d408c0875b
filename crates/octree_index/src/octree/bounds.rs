//! Axis-aligned bounding box for octree regions and extent checks.

use glam::Vec3;

/// Single-precision axis-aligned bounding box.
///
/// Used to describe a node's cube and to pre-validate entity positions
/// against the root extent before building.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
	/// Minimum corner.
	pub min: Vec3,
	/// Maximum corner.
	pub max: Vec3,
}

impl Aabb3 {
	/// Create a new AABB from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: Vec3, max: Vec3) -> Self {
		debug_assert!(
			min.x <= max.x && min.y <= max.y && min.z <= max.z,
			"AABB min must be <= max on all axes"
		);
		Self { min, max }
	}

	/// Create the AABB of a cube from its center and full edge length.
	pub fn from_center_size(center: Vec3, size: f32) -> Self {
		let half = Vec3::splat(size * 0.5);
		Self {
			min: center - half,
			max: center + half,
		}
	}

	/// Check if this AABB overlaps with another.
	///
	/// Two AABBs overlap if they share any interior or boundary points.
	#[inline]
	pub fn overlaps(&self, other: &Aabb3) -> bool {
		self.min.x <= other.max.x
			&& self.max.x >= other.min.x
			&& self.min.y <= other.max.y
			&& self.max.y >= other.min.y
			&& self.min.z <= other.max.z
			&& self.max.z >= other.min.z
	}

	/// Check if this AABB contains a point, boundary included.
	#[inline]
	pub fn contains_point(&self, point: Vec3) -> bool {
		point.cmpge(self.min).all() && point.cmple(self.max).all()
	}

	/// Check if a point lies strictly inside, boundary excluded.
	///
	/// This is the octree node policy: a point on a face belongs to neither
	/// side of it.
	#[inline]
	pub fn contains_point_strict(&self, point: Vec3) -> bool {
		point.cmpgt(self.min).all() && point.cmplt(self.max).all()
	}

	/// Get the size of the AABB (max - min).
	#[inline]
	pub fn size(&self) -> Vec3 {
		self.max - self.min
	}

	/// Get the center of the AABB.
	#[inline]
	pub fn center(&self) -> Vec3 {
		(self.min + self.max) * 0.5
	}
}
