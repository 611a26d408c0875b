//! Recursive octree construction.
//!
//! # Algorithm
//!
//! 1. Create the root cube and hand it every entity (no containment check).
//! 2. Subdivide a node: attach 8 half-size children in canonical order.
//! 3. Partition: each entity goes to the **first** child (canonical order)
//!    whose strict containment test passes. Entities matching no child are
//!    dropped from the children.
//! 4. Recurse into every child holding at least [`POPULATION_THRESHOLD`]
//!    entities while depth budget remains.
//!
//! Dense regions reach the maximum depth; sparse regions stop early, so the
//! resulting tree is irregular. Construction is single-threaded and runs to
//! completion before the root is handed back.

use smallvec::SmallVec;
use tracing::{debug, trace};
use web_time::Instant;

use super::{BuildStats, EntityRetention, Octant, OctreeConfig, OctreeNode};
use crate::entity::Positioned;

/// Minimum entity count for a node to be worth subdividing. Fixed.
pub const POPULATION_THRESHOLD: usize = 2;

/// Result of [`OctreeBuilder::build_with_stats`].
#[derive(Clone, Debug)]
pub struct BuildOutput<E> {
  /// Root of the finished tree.
  pub root: OctreeNode<E>,
  /// Counters from the build.
  pub stats: BuildStats,
  /// Wall time spent building, in microseconds.
  pub elapsed_us: u64,
}

/// Builds octrees for one configuration.
#[derive(Clone, Debug, Default)]
pub struct OctreeBuilder {
  config: OctreeConfig,
}

impl OctreeBuilder {
  pub fn new(config: OctreeConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  /// Build a tree over `entities` and return its root.
  pub fn build<E, I>(&self, entities: I) -> OctreeNode<E>
  where
    E: Positioned + Clone,
    I: IntoIterator<Item = E>,
  {
    self.build_with_stats(entities).root
  }

  /// Build a tree over `entities`, returning the root with build counters.
  ///
  /// The root is subdivided only when it meets the population threshold, so
  /// empty or single-entity input yields a childless root.
  #[tracing::instrument(skip_all, name = "octree::build", fields(max_depth = self.config.max_depth))]
  pub fn build_with_stats<E, I>(&self, entities: I) -> BuildOutput<E>
  where
    E: Positioned + Clone,
    I: IntoIterator<Item = E>,
  {
    let start = Instant::now();

    let mut root = OctreeNode::new(self.config.root_center, self.config.root_size);
    for entity in entities {
      root.add_entity(entity);
    }

    let mut stats = BuildStats {
      nodes_created: 1,
      ..Default::default()
    };

    if root.entity_count() >= POPULATION_THRESHOLD {
      self.subdivide_at(&mut root, self.config.max_depth, 0, &mut stats);
    } else {
      root.mark_settled();
    }

    let elapsed_us = start.elapsed().as_micros() as u64;
    debug!(
      nodes = stats.nodes_created,
      leaves = stats.leaves(),
      dropped = stats.entities_dropped,
      depth = stats.max_depth_reached,
      elapsed_us,
      "octree built"
    );

    BuildOutput {
      root,
      stats,
      elapsed_us,
    }
  }

  /// Subdivide `node` with `remaining_depth` levels of budget.
  ///
  /// No-op when `remaining_depth <= 0` or when the node already has
  /// children. Returns the counters for the subtree rooted at `node`, which
  /// counts as one of `nodes_created`; depths are relative to `node`.
  pub fn subdivide<E>(&self, node: &mut OctreeNode<E>, remaining_depth: i32) -> BuildStats
  where
    E: Positioned + Clone,
  {
    let mut stats = BuildStats {
      nodes_created: 1,
      ..Default::default()
    };
    self.subdivide_at(node, remaining_depth, 0, &mut stats);
    stats
  }

  fn subdivide_at<E>(
    &self,
    node: &mut OctreeNode<E>,
    remaining_depth: i32,
    depth: u32,
    stats: &mut BuildStats,
  ) where
    E: Positioned + Clone,
  {
    node.mark_settled();
    if remaining_depth <= 0 || node.is_subdivided() {
      return;
    }

    let children = child_regions(node);
    node.attach_children(children);
    stats.record_subdivision(depth + 1);

    let entities = match self.config.retention {
      EntityRetention::Retain => node.entities().to_vec(),
      EntityRetention::LeavesOnly => node.take_entities(),
    };
    stats.entities_dropped += partition(entities, node);

    for child in node.children_mut() {
      if child.entity_count() >= POPULATION_THRESHOLD {
        self.subdivide_at(child, remaining_depth - 1, depth + 1, stats);
      } else {
        child.mark_settled();
      }
    }
  }
}

/// Build a tree over `entities` in a cube of edge `root_size` around
/// `root_center`, subdividing at most `max_depth` levels.
pub fn build_octree<E, I>(
  root_center: glam::Vec3,
  root_size: f32,
  entities: I,
  max_depth: i32,
) -> OctreeNode<E>
where
  E: Positioned + Clone,
  I: IntoIterator<Item = E>,
{
  OctreeBuilder::new(OctreeConfig::new(root_center, root_size, max_depth)).build(entities)
}

/// The 8 half-size child cubes of `node`, in canonical order.
fn child_regions<E>(node: &OctreeNode<E>) -> [Box<OctreeNode<E>>; 8] {
  let half = node.size() * 0.5;
  Octant::ALL.map(|octant| {
    Box::new(OctreeNode::new(
      octant.child_center(node.center(), node.size()),
      half,
    ))
  })
}

/// Hand each entity to the first child containing it. Returns the number of
/// entities no child accepted.
fn partition<E: Positioned>(entities: Vec<E>, node: &mut OctreeNode<E>) -> usize {
  let mut children: SmallVec<[&mut OctreeNode<E>; 8]> = node.children_mut().collect();
  let mut dropped = 0;

  for entity in entities {
    let position = entity.position();
    match children.iter_mut().find(|child| child.contains(position)) {
      Some(child) => child.add_entity(entity),
      None => {
        trace!(?position, "entity outside every child octant, dropped");
        dropped += 1;
      }
    }
  }

  dropped
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
