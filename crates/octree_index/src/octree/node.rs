//! OctreeNode - one cubic region, its entity handles, and 8 child slots.
//!
//! Children are populated only by [`OctreeBuilder`](super::OctreeBuilder),
//! at most once per node. After a build every node is either a leaf or an
//! internal node; the `Unbuilt` state only exists for nodes the builder has
//! not reached yet.

use glam::Vec3;

use super::{Aabb3, Octant};

/// Lifecycle state of a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeState {
  /// Just created; the builder has not decided on it yet.
  Unbuilt,
  /// Settled without children (depth budget or population threshold hit).
  Leaf,
  /// Children populated.
  Internal,
}

/// Octree node over entity handles of type `E`.
///
/// `size` is the full edge length of the cube, not the half-extent.
#[derive(Clone, Debug)]
pub struct OctreeNode<E> {
  center: Vec3,
  size: f32,
  entities: Vec<E>,
  children: [Option<Box<OctreeNode<E>>>; 8],
  settled: bool,
}

impl<E> OctreeNode<E> {
  /// Create an unbuilt node with no entities and no children.
  pub fn new(center: Vec3, size: f32) -> Self {
    Self {
      center,
      size,
      entities: Vec::new(),
      children: Default::default(),
      settled: false,
    }
  }

  /// Geometric center of the cube.
  #[inline]
  pub fn center(&self) -> Vec3 {
    self.center
  }

  /// Full edge length of the cube.
  #[inline]
  pub fn size(&self) -> f32 {
    self.size
  }

  /// Half the edge length.
  #[inline]
  pub fn half_size(&self) -> f32 {
    self.size * 0.5
  }

  /// The cube as an axis-aligned box.
  #[inline]
  pub fn bounds(&self) -> Aabb3 {
    Aabb3::from_center_size(self.center, self.size)
  }

  /// True iff `|position - center| < size / 2` on every axis.
  ///
  /// Strict: a point exactly on a face is outside. Entities on a dividing
  /// plane that no earlier child claims are therefore lost at that level.
  #[inline]
  pub fn contains(&self, position: Vec3) -> bool {
    (position - self.center)
      .abs()
      .cmplt(Vec3::splat(self.half_size()))
      .all()
  }

  /// Append an entity handle. No dedup and no bounds check.
  #[inline]
  pub fn add_entity(&mut self, entity: E) {
    self.entities.push(entity);
  }

  /// Drop all entity handles; children are untouched.
  #[inline]
  pub fn clear_entities(&mut self) {
    self.entities.clear();
  }

  /// Number of entity handles held by this node.
  #[inline]
  pub fn entity_count(&self) -> usize {
    self.entities.len()
  }

  /// Entity handles held by this node, in arrival order.
  #[inline]
  pub fn entities(&self) -> &[E] {
    &self.entities
  }

  /// Child in the given octant, if subdivided.
  #[inline]
  pub fn child(&self, octant: Octant) -> Option<&OctreeNode<E>> {
    self.children[octant.index()].as_deref()
  }

  /// Present children in canonical order.
  pub fn children(&self) -> impl Iterator<Item = &OctreeNode<E>> {
    self.children.iter().filter_map(|slot| slot.as_deref())
  }

  /// Present children paired with their octant, in canonical order.
  pub fn children_with_octant(&self) -> impl Iterator<Item = (Octant, &OctreeNode<E>)> {
    Octant::ALL
      .into_iter()
      .zip(self.children.iter())
      .filter_map(|(octant, slot)| slot.as_deref().map(|child| (octant, child)))
  }

  /// True if no child slot is populated.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.children.iter().all(Option::is_none)
  }

  /// True once children have been attached.
  #[inline]
  pub fn is_subdivided(&self) -> bool {
    !self.is_leaf()
  }

  /// Current lifecycle state.
  pub fn state(&self) -> NodeState {
    if self.is_subdivided() {
      NodeState::Internal
    } else if self.settled {
      NodeState::Leaf
    } else {
      NodeState::Unbuilt
    }
  }

  /// Deepest node at or below this one whose cube contains `position`.
  ///
  /// Descends through the first containing child in canonical order.
  /// Returns None if this node does not contain the point.
  pub fn locate(&self, position: Vec3) -> Option<&OctreeNode<E>> {
    if !self.contains(position) {
      return None;
    }
    let mut node = self;
    while let Some(child) = node.children().find(|child| child.contains(position)) {
      node = child;
    }
    Some(node)
  }

  /// Total nodes in this subtree, this node included.
  pub fn node_count(&self) -> usize {
    1 + self.children().map(OctreeNode::node_count).sum::<usize>()
  }

  /// Nodes without children in this subtree.
  pub fn leaf_count(&self) -> usize {
    if self.is_leaf() {
      1
    } else {
      self.children().map(OctreeNode::leaf_count).sum()
    }
  }

  /// Height of this subtree (0 for a leaf).
  pub fn depth(&self) -> u32 {
    self
      .children()
      .map(|child| child.depth() + 1)
      .max()
      .unwrap_or(0)
  }

  pub(crate) fn attach_children(&mut self, children: [Box<OctreeNode<E>>; 8]) {
    debug_assert!(self.is_leaf(), "octree nodes subdivide at most once");
    for (slot, child) in self.children.iter_mut().zip(children) {
      *slot = Some(child);
    }
  }

  pub(crate) fn take_entities(&mut self) -> Vec<E> {
    std::mem::take(&mut self.entities)
  }

  pub(crate) fn children_mut(&mut self) -> impl Iterator<Item = &mut OctreeNode<E>> {
    self.children.iter_mut().filter_map(|slot| slot.as_deref_mut())
  }

  pub(crate) fn mark_settled(&mut self) {
    self.settled = true;
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
