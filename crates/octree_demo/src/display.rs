//! Text dump of a built octree.

use octree_index::{visit_at_depth, visit_up_to_depth, OctreeNode};

use crate::config::DebugMode;

/// Format the nodes selected by `mode`, one line per node.
///
/// `AllDepth` lists the root and every descendant down to `display_depth`
/// levels below it, pre-order. `TargetDepth` lists only the nodes exactly
/// `display_depth` levels below the root.
pub fn render<E>(root: &OctreeNode<E>, mode: DebugMode, display_depth: u32) -> Vec<String> {
	let mut lines = Vec::new();
	let mut push = |node: &OctreeNode<E>| lines.push(describe(root, node));

	match mode {
		DebugMode::AllDepth => visit_up_to_depth(root, display_depth as i32, &mut push),
		DebugMode::TargetDepth => visit_at_depth(root, display_depth as i32 - 1, &mut push),
	}

	lines
}

/// Depth of `node` below `root`, recovered from the halving edge length.
fn depth_below<E>(root: &OctreeNode<E>, node: &OctreeNode<E>) -> u32 {
	if node.size() <= 0.0 || root.size() <= 0.0 {
		return 0;
	}
	(root.size() / node.size()).log2().round().max(0.0) as u32
}

fn describe<E>(root: &OctreeNode<E>, node: &OctreeNode<E>) -> String {
	let c = node.center();
	format!(
		"depth {} center ({:.2}, {:.2}, {:.2}) size {:.2} entities {}{}",
		depth_below(root, node),
		c.x,
		c.y,
		c.z,
		node.size(),
		node.entity_count(),
		if node.is_leaf() { "" } else { " [internal]" },
	)
}

#[cfg(test)]
mod tests {
	use glam::Vec3;
	use octree_index::build_octree;

	use super::*;

	fn sample() -> OctreeNode<Vec3> {
		build_octree(
			Vec3::ZERO,
			4.0,
			vec![
				Vec3::new(-1.5, 1.5, -1.5),
				Vec3::new(-0.5, 0.5, -0.5),
				Vec3::new(1.0, -1.0, 1.0),
			],
			2,
		)
	}

	#[test]
	fn test_all_depth_includes_root_first() {
		let root = sample();
		let lines = render(&root, DebugMode::AllDepth, 1);
		assert_eq!(lines.len(), 9);
		assert!(lines[0].starts_with("depth 0 "));
		assert!(lines[0].ends_with("entities 3 [internal]"));
		assert!(lines[1..].iter().all(|l| l.starts_with("depth 1 ")));
	}

	#[test]
	fn test_all_depth_zero_is_root_only() {
		let lines = render(&sample(), DebugMode::AllDepth, 0);
		assert_eq!(lines.len(), 1);
	}

	#[test]
	fn test_target_depth_is_exact() {
		let root = sample();
		assert_eq!(render(&root, DebugMode::TargetDepth, 0).len(), 1);
		assert_eq!(render(&root, DebugMode::TargetDepth, 1).len(), 8);

		let deep = render(&root, DebugMode::TargetDepth, 2);
		assert_eq!(deep.len(), 8, "Only Top0 holds two entities");
		assert!(deep.iter().all(|l| l.starts_with("depth 2 ")));
	}

	#[test]
	fn test_describe_format() {
		let root = sample();
		let top0 = render(&root, DebugMode::TargetDepth, 1).remove(0);
		assert_eq!(
			top0,
			"depth 1 center (-1.00, 1.00, -1.00) size 2.00 entities 2 [internal]"
		);
	}

	#[test]
	fn test_unbuilt_tree_renders_root() {
		let root: OctreeNode<Vec3> = OctreeNode::new(Vec3::ZERO, 10.0);
		let lines = render(&root, DebugMode::TargetDepth, 0);
		assert_eq!(
			lines,
			vec!["depth 0 center (0.00, 0.00, 0.00) size 10.00 entities 0".to_string()]
		);
	}
}
