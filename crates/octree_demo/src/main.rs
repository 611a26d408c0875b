//! Octree demo.
//!
//! Scatters random objects in a cube, builds an octree over them, logs the
//! build counters and per-depth shape, then prints the selected nodes.
//!
//! Logging follows `RUST_LOG`; `RUST_LOG=octree_index=trace` also reports
//! every entity dropped during partitioning.

mod config;
mod display;
mod scatter;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use octree_index::{EntityRetention, OctreeBuilder, OctreeMetrics};
use tracing::info;
use tracing_subscriber::prelude::*;

use config::{DebugMode, DemoConfig};

/// Build an octree over randomly scattered objects and print it.
#[derive(Parser, Debug)]
#[command(name = "octree_demo")]
#[command(about = "Builds an octree over random points and prints its nodes")]
struct Args {
	/// Path to configuration TOML file (defaults used when absent).
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Number of objects to scatter.
	#[arg(short = 'n', long)]
	count: Option<usize>,

	/// Maximum subdivision depth.
	#[arg(short, long)]
	depth: Option<i32>,

	/// Edge length of the scatter cube.
	#[arg(short, long)]
	range: Option<f32>,

	/// RNG seed for a reproducible scene.
	#[arg(short, long)]
	seed: Option<u64>,

	/// Which nodes to print.
	#[arg(short, long, value_enum)]
	mode: Option<DebugMode>,

	/// Depth used by the printed view.
	#[arg(long)]
	display_depth: Option<u32>,

	/// Move entity lists into the leaves instead of keeping them on every level.
	#[arg(long)]
	leaves_only: bool,

	/// Skip printing the tree.
	#[arg(long)]
	quiet: bool,
}

impl Args {
	fn apply(&self, config: &mut DemoConfig) {
		if let Some(count) = self.count {
			config.gen_count = count;
		}
		if let Some(depth) = self.depth {
			config.build_depth = depth;
		}
		if let Some(range) = self.range {
			config.space_range = range;
		}
		if self.seed.is_some() {
			config.seed = self.seed;
		}
		if let Some(mode) = self.mode {
			config.display.mode = mode;
		}
		if let Some(display_depth) = self.display_depth {
			config.display.display_depth = display_depth;
		}
		if self.leaves_only {
			config.retention = EntityRetention::LeavesOnly;
		}
		if self.quiet {
			config.display.show_octree = false;
		}
	}
}

fn main() -> Result<()> {
	let args = Args::parse();

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "octree_demo=info,octree_index=debug".into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	let mut config = match &args.config {
		Some(path) => {
			info!("Loading config from: {}", path.display());
			DemoConfig::load(path)?
		}
		None => DemoConfig::default(),
	};
	args.apply(&mut config);
	config.validate()?;

	let objects = scatter::scatter(config.gen_count, config.space_range, config.seed);
	info!(
		count = objects.len(),
		range = config.space_range,
		seed = ?config.seed,
		"scene scattered"
	);

	let builder = OctreeBuilder::new(config.octree_config());
	let output = builder.build_with_stats(objects.iter());
	let stats = &output.stats;
	info!(
		nodes = stats.nodes_created,
		internal = stats.internal_nodes(),
		leaves = stats.leaves(),
		dropped = stats.entities_dropped,
		depth = stats.max_depth_reached,
		elapsed_us = output.elapsed_us,
		retention = ?config.retention,
		"octree built"
	);

	let mut metrics = OctreeMetrics::new();
	metrics.record_tree(&output.root);
	metrics.record_build_timing(output.elapsed_us);
	if let Some(deepest) = metrics.deepest() {
		for depth in 0..=deepest {
			info!(
				depth,
				nodes = metrics.nodes_per_depth[depth],
				leaves = metrics.leaves_per_depth[depth],
				entities = metrics.entities_per_depth[depth],
				"level"
			);
		}
	}
	info!(bytes = metrics.tree_memory_bytes, "approximate tree memory");

	if config.should_display() {
		let lines = display::render(
			&output.root,
			config.display.mode,
			config.display.display_depth,
		);
		println!(
			"{:?} view, display depth {} ({} nodes):",
			config.display.mode,
			config.display.display_depth,
			lines.len()
		);
		for line in lines {
			println!("  {}", line);
		}
	}

	Ok(())
}
