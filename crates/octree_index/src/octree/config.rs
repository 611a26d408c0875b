//! OctreeConfig - root cube, depth limit, and entity retention policy.

use glam::Vec3;
use thiserror::Error;

/// Deepest subdivision [`OctreeConfig::validate`] accepts.
pub const MAX_DEPTH: i32 = 8;

/// What an internal node keeps after handing its entities to its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityRetention {
  /// Internal nodes keep every entity that reached them, so each node lists
  /// all entities at or below it (including any its children dropped).
  #[default]
  Retain,
  /// Internal nodes are cleared after partitioning; entities live only at
  /// the deepest node they reach.
  LeavesOnly,
}

/// Rejected configuration, reported by [`OctreeConfig::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
  #[error("root center must be finite, got {0}")]
  NonFiniteCenter(Vec3),
  #[error("root size must be finite and > 0, got {0}")]
  InvalidSize(f32),
  #[error("max depth must be in 1..=8, got {0}")]
  DepthOutOfRange(i32),
}

/// Configuration for building an octree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OctreeConfig {
  /// Center of the root cube.
  pub root_center: Vec3,

  /// Full edge length of the root cube (not half-extent).
  pub root_size: f32,

  /// Maximum subdivision depth below the root. `<= 0` builds a single leaf.
  pub max_depth: i32,

  /// Entity list handling at internal nodes.
  pub retention: EntityRetention,
}

impl OctreeConfig {
  /// Config for a root cube with the default retention policy.
  pub fn new(root_center: Vec3, root_size: f32, max_depth: i32) -> Self {
    Self {
      root_center,
      root_size,
      max_depth,
      retention: EntityRetention::default(),
    }
  }

  /// Builder-style retention override.
  pub fn with_retention(mut self, retention: EntityRetention) -> Self {
    self.retention = retention;
    self
  }

  /// Edge length of a node at `depth` below the root.
  /// size = root_size / 2^depth
  #[inline]
  pub fn node_size(&self, depth: u32) -> f32 {
    self.root_size / (1u64 << depth.min(63)) as f32
  }

  /// Strict check for callers that want degenerate input rejected instead
  /// of handled by the build policy.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if !self.root_center.is_finite() {
      return Err(ConfigError::NonFiniteCenter(self.root_center));
    }
    if !self.root_size.is_finite() || self.root_size <= 0.0 {
      return Err(ConfigError::InvalidSize(self.root_size));
    }
    if !(1..=MAX_DEPTH).contains(&self.max_depth) {
      return Err(ConfigError::DepthOutOfRange(self.max_depth));
    }
    Ok(())
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self {
      root_center: Vec3::ZERO,
      root_size: 100.0,
      max_depth: 3,
      retention: EntityRetention::Retain,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
