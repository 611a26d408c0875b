//! Demo configuration: TOML file with CLI overrides.

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use octree_index::{EntityRetention, OctreeConfig, MAX_DEPTH};
use serde::Deserialize;

/// Most entities the demo will scatter.
pub const MAX_GEN_COUNT: usize = 500;

/// Allowed edge length of the scatter cube.
pub const SPACE_RANGE_LIMITS: (f32, f32) = (1.0, 300.0);

/// Root configuration for a demo run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
	/// Number of entities to scatter.
	pub gen_count: usize,
	/// Maximum subdivision depth.
	pub build_depth: i32,
	/// Edge length of the cube entities are scattered in (also the root size).
	pub space_range: f32,
	/// RNG seed; random when absent.
	pub seed: Option<u64>,
	/// Entity list handling at internal nodes.
	pub retention: EntityRetention,
	/// Text dump of the finished tree.
	pub display: DisplayConfig,
}

/// Which nodes the text dump prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DebugMode {
	/// Every node from the root down to `display_depth`.
	AllDepth,
	/// Only the nodes exactly `display_depth` levels below the root.
	#[default]
	TargetDepth,
}

/// Text dump settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
	pub show_octree: bool,
	pub mode: DebugMode,
	pub display_depth: u32,
}

impl Default for DisplayConfig {
	fn default() -> Self {
		Self {
			show_octree: true,
			mode: DebugMode::TargetDepth,
			display_depth: 3,
		}
	}
}

impl Default for DemoConfig {
	fn default() -> Self {
		Self {
			gen_count: 100,
			build_depth: 3,
			space_range: 100.0,
			seed: None,
			retention: EntityRetention::Retain,
			display: DisplayConfig::default(),
		}
	}
}

impl DemoConfig {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse configuration from TOML text.
	pub fn parse(content: &str) -> Result<Self> {
		toml::from_str(content).with_context(|| "Failed to parse config TOML")
	}

	/// Reject values outside the ranges the demo supports.
	pub fn validate(&self) -> Result<()> {
		if self.gen_count > MAX_GEN_COUNT {
			anyhow::bail!(
				"gen_count must be at most {}, got {}",
				MAX_GEN_COUNT,
				self.gen_count
			);
		}
		let (min_range, max_range) = SPACE_RANGE_LIMITS;
		if !(min_range..=max_range).contains(&self.space_range) {
			anyhow::bail!(
				"space_range must be in {}..={}, got {}",
				min_range,
				max_range,
				self.space_range
			);
		}
		if self.display.display_depth > MAX_DEPTH as u32 {
			anyhow::bail!(
				"display_depth must be at most {}, got {}",
				MAX_DEPTH,
				self.display.display_depth
			);
		}
		self.octree_config()
			.validate()
			.context("Invalid octree settings")?;
		Ok(())
	}

	/// Octree settings: a `space_range` cube at the origin.
	pub fn octree_config(&self) -> OctreeConfig {
		OctreeConfig::new(Vec3::ZERO, self.space_range, self.build_depth)
			.with_retention(self.retention)
	}

	/// Whether the dump should run at all.
	///
	/// Asking for a depth the build could never reach prints nothing.
	pub fn should_display(&self) -> bool {
		self.display.show_octree && self.display.display_depth as i32 <= self.build_depth
	}
}
