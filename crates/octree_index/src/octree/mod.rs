//! Octree module for static spatial subdivision of point entities.
//!
//! The tree is explicit: every node owns its eight child slots and its own
//! list of entity handles. Construction happens once, top-down, and the tree
//! is read-only afterwards.
//!
//! # Octant Convention
//!
//! Slots 0-3 are the "top" octants (child center above the parent on Y),
//! slots 4-7 the "bottom" ones. Within each group the (x, z) signs cycle:
//!
//! ```text
//! slot   0/4    1/5    2/6    3/7
//! x       -      +      +      -
//! z       -      -      +      +
//! ```
//!
//! # Module Structure
//!
//! - [`octant`]: `Octant` - canonical index-to-octant mapping
//! - [`node`]: `OctreeNode` - cube region, entity handles, child slots
//! - [`builder`]: `OctreeBuilder` - recursive subdivision and partitioning
//! - [`traversal`]: depth-bounded visitation (callbacks and iterators)
//! - [`config`]: `OctreeConfig` - root cube, depth limit, retention policy
//! - [`stats`]: `BuildStats` - counters from one build
//! - [`bounds`]: `Aabb3` - axis-aligned box helpers

pub mod bounds;
pub mod builder;
pub mod config;
pub mod node;
pub mod octant;
pub mod stats;
pub mod traversal;

// Re-exports
pub use bounds::Aabb3;
pub use builder::{build_octree, BuildOutput, OctreeBuilder, POPULATION_THRESHOLD};
pub use config::{ConfigError, EntityRetention, OctreeConfig, MAX_DEPTH};
pub use node::{NodeState, OctreeNode};
pub use octant::Octant;
pub use stats::BuildStats;
pub use traversal::{visit_at_depth, visit_up_to_depth, NodesAtDepth, NodesUpToDepth};

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
