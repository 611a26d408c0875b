//! Statistics from one octree build.

/// Counters gathered while building an octree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
	/// Nodes allocated, root included.
	pub nodes_created: usize,
	/// Nodes that received their 8 children.
	pub subdivisions_performed: usize,
	/// Entities that matched no child during a partition step.
	/// Counted once per partition that lost them.
	pub entities_dropped: usize,
	/// Deepest level that holds a node (root = 0).
	pub max_depth_reached: u32,
}

impl BuildStats {
	/// Number of nodes without children.
	///
	/// Every subdivision turns one leaf into an internal node and adds 8 leaves.
	#[inline]
	pub fn leaves(&self) -> usize {
		self.nodes_created - self.subdivisions_performed
	}

	/// Number of nodes with children.
	#[inline]
	pub fn internal_nodes(&self) -> usize {
		self.subdivisions_performed
	}

	/// Record a freshly subdivided node whose children sit at `child_depth`.
	#[inline]
	pub(crate) fn record_subdivision(&mut self, child_depth: u32) {
		self.subdivisions_performed += 1;
		self.nodes_created += 8;
		self.max_depth_reached = self.max_depth_reached.max(child_depth);
	}
}
