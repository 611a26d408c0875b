//! octree_index - static octree spatial index over point-located entities
//!
//! This crate builds an octree once, synchronously, over a set of entity
//! handles that expose a 3D position. Dense regions subdivide down to the
//! configured maximum depth; sparse regions stop as soon as a node holds
//! fewer than [`POPULATION_THRESHOLD`] entities.
//!
//! # Features
//!
//! - **Canonical octant order**: children are stored in 8 fixed slots
//!   (top0..top3, bottom0..bottom3) so traversal order is reproducible
//! - **Handle-based entities**: nodes store cheap handles (`&T`, `Arc<T>`,
//!   plain positions) via the [`Positioned`] trait, never the entities
//! - **Depth-bounded traversal**: callbacks and lazy iterators for visiting
//!   exactly one depth or everything down to a depth
//! - **Metrics**: optional per-depth statistics (`--features metrics`)
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use octree_index::build_octree;
//!
//! let points = vec![Vec3::new(-1.0, 1.0, -1.0), Vec3::new(1.0, -1.0, 1.0)];
//! let root = build_octree(Vec3::ZERO, 4.0, points, 1);
//!
//! assert_eq!(root.entity_count(), 2);
//! assert_eq!(root.children().count(), 8);
//! ```

pub mod entity;
pub use entity::Positioned;

// Octree core: nodes, builder, traversal
pub mod octree;
pub use octree::{
  build_octree, Aabb3, BuildOutput, BuildStats, ConfigError, EntityRetention, NodeState, Octant,
  OctreeBuilder, OctreeConfig, OctreeNode, MAX_DEPTH, POPULATION_THRESHOLD,
};
pub use octree::{visit_at_depth, visit_up_to_depth, NodesAtDepth, NodesUpToDepth};

// Engine-agnostic build statistics
pub mod metrics;
pub use metrics::OctreeMetrics;
