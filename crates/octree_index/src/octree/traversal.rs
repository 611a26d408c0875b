//! Depth-bounded traversal, decoupled from any consumer.
//!
//! Two shapes of the same walks:
//! - callbacks ([`visit_at_depth`], [`visit_up_to_depth`]) with the
//!   remaining-depth convention used during construction
//! - lazy iterators ([`OctreeNode::nodes_at_depth`],
//!   [`OctreeNode::nodes_up_to_depth`]) keyed by absolute depth below the
//!   starting node
//!
//! Both visit children in canonical octant order, depth-first, and never
//! mutate the tree. Branches that stopped early (population threshold)
//! simply yield nothing below their leaf.

use smallvec::SmallVec;

use super::OctreeNode;

/// Inline stack capacity; deeper or bushier walks spill to the heap.
const STACK_INLINE: usize = 32;

/// Visit the nodes `remaining_depth + 1` levels below `node`.
///
/// When `remaining_depth < 0`, `visit(node)` is called and the walk stops;
/// otherwise every present child is walked with `remaining_depth - 1`.
/// `visit_at_depth(root, -1, ..)` therefore visits the root alone, and
/// `visit_at_depth(root, d - 1, ..)` visits the nodes at depth `d`.
pub fn visit_at_depth<'a, E, F>(node: &'a OctreeNode<E>, remaining_depth: i32, mut visit: F)
where
  F: FnMut(&'a OctreeNode<E>),
{
  walk_at_depth(node, remaining_depth, &mut visit);
}

fn walk_at_depth<'a, E, F>(node: &'a OctreeNode<E>, remaining_depth: i32, visit: &mut F)
where
  F: FnMut(&'a OctreeNode<E>),
{
  if remaining_depth < 0 {
    visit(node);
    return;
  }
  for child in node.children() {
    walk_at_depth(child, remaining_depth - 1, visit);
  }
}

/// Visit `node` and every descendant down to `remaining_depth` levels below
/// it, pre-order.
pub fn visit_up_to_depth<'a, E, F>(node: &'a OctreeNode<E>, remaining_depth: i32, mut visit: F)
where
  F: FnMut(&'a OctreeNode<E>),
{
  walk_up_to_depth(node, remaining_depth, &mut visit);
}

fn walk_up_to_depth<'a, E, F>(node: &'a OctreeNode<E>, remaining_depth: i32, visit: &mut F)
where
  F: FnMut(&'a OctreeNode<E>),
{
  visit(node);
  if remaining_depth > 0 {
    for child in node.children() {
      walk_up_to_depth(child, remaining_depth - 1, visit);
    }
  }
}

/// Iterator over the nodes exactly `depth` levels below a starting node.
///
/// Created by [`OctreeNode::nodes_at_depth`].
pub struct NodesAtDepth<'a, E> {
  stack: SmallVec<[(&'a OctreeNode<E>, u32); STACK_INLINE]>,
  target: u32,
}

impl<E> Clone for NodesAtDepth<'_, E> {
  fn clone(&self) -> Self {
    Self {
      stack: self.stack.clone(),
      target: self.target,
    }
  }
}

impl<'a, E> Iterator for NodesAtDepth<'a, E> {
  type Item = &'a OctreeNode<E>;

  fn next(&mut self) -> Option<Self::Item> {
    while let Some((node, depth)) = self.stack.pop() {
      if depth == self.target {
        return Some(node);
      }
      // Reversed so slot 0 pops first
      for child in node.children().collect::<SmallVec<[_; 8]>>().into_iter().rev() {
        self.stack.push((child, depth + 1));
      }
    }
    None
  }
}

/// Pre-order iterator over `(depth, node)` pairs down to a depth limit.
///
/// Created by [`OctreeNode::nodes_up_to_depth`].
pub struct NodesUpToDepth<'a, E> {
  stack: SmallVec<[(&'a OctreeNode<E>, u32); STACK_INLINE]>,
  limit: u32,
}

impl<E> Clone for NodesUpToDepth<'_, E> {
  fn clone(&self) -> Self {
    Self {
      stack: self.stack.clone(),
      limit: self.limit,
    }
  }
}

impl<'a, E> Iterator for NodesUpToDepth<'a, E> {
  type Item = (u32, &'a OctreeNode<E>);

  fn next(&mut self) -> Option<Self::Item> {
    let (node, depth) = self.stack.pop()?;
    if depth < self.limit {
      for child in node.children().collect::<SmallVec<[_; 8]>>().into_iter().rev() {
        self.stack.push((child, depth + 1));
      }
    }
    Some((depth, node))
  }
}

impl<E> OctreeNode<E> {
  /// Nodes exactly `depth` levels below this one (0 = this node).
  ///
  /// Same nodes and order as `visit_at_depth(self, depth - 1, ..)`.
  pub fn nodes_at_depth(&self, depth: u32) -> NodesAtDepth<'_, E> {
    let mut stack = SmallVec::new();
    stack.push((self, 0));
    NodesAtDepth {
      stack,
      target: depth,
    }
  }

  /// This node and its descendants down to `depth` levels below, paired
  /// with their depth relative to this node.
  ///
  /// Same nodes and order as `visit_up_to_depth(self, depth, ..)`.
  pub fn nodes_up_to_depth(&self, depth: u32) -> NodesUpToDepth<'_, E> {
    let mut stack = SmallVec::new();
    stack.push((self, 0));
    NodesUpToDepth {
      stack,
      limit: depth,
    }
  }

  /// Every node in this subtree, pre-order, with its relative depth.
  pub fn iter(&self) -> NodesUpToDepth<'_, E> {
    self.nodes_up_to_depth(u32::MAX)
  }
}

#[cfg(test)]
#[path = "traversal_test.rs"]
mod traversal_test;
