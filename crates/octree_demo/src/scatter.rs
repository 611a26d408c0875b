//! Random scene generation.

use glam::Vec3;
use octree_index::Positioned;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A point-like object placed in the demo scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
	pub id: u32,
	pub position: Vec3,
}

impl Positioned for SceneObject {
	fn position(&self) -> Vec3 {
		self.position
	}
}

/// Place `count` objects uniformly in the cube `[-range/2, range/2)` on each
/// axis, centered on the origin.
///
/// A fixed `seed` reproduces the same scene; `None` seeds from the OS.
pub fn scatter(count: usize, range: f32, seed: Option<u64>) -> Vec<SceneObject> {
	let mut rng = match seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};
	let half = range * 0.5;

	(0..count as u32)
		.map(|id| SceneObject {
			id,
			position: Vec3::new(
				rng.random_range(-half..half),
				rng.random_range(-half..half),
				rng.random_range(-half..half),
			),
		})
		.collect()
}
