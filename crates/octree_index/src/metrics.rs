//! Engine-agnostic metrics collection for octree builds.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when disabled.
//!
//! # Usage
//!
//! ```ignore
//! use octree_index::metrics::{OctreeMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! // After each build:
//! metrics.record_tree(&output.root);
//! metrics.record_build_timing(output.elapsed_us);
//! ```

use std::collections::VecDeque;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

use crate::octree::OctreeNode;

/// Depth slots tracked per tree; deeper nodes are folded into the last slot.
pub const DEPTH_SLOTS: usize = 16;

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
    #[cfg(feature = "metrics")]
    {
        COLLECT_METRICS.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "metrics"))]
    {
        false
    }
}

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// Create a new rolling window with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new value, evicting the oldest if at capacity.
    pub fn push(&mut self, value: T) {
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Iterate over values (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }

    /// Get the most recent value.
    pub fn last(&self) -> Option<&T> {
        self.buffer.back()
    }
}

impl<T: Copy + Default + std::ops::Add<Output = T>> RollingWindow<T> {
    /// Compute the sum of all values.
    pub fn sum(&self) -> T {
        self.buffer.iter().copied().fold(T::default(), |acc, x| acc + x)
    }
}

impl RollingWindow<u64> {
    /// Compute the average of all values.
    pub fn average(&self) -> f64 {
        if self.buffer.is_empty() {
            0.0
        } else {
            self.sum() as f64 / self.buffer.len() as f64
        }
    }

    /// Get min and max values.
    pub fn min_max(&self) -> Option<(u64, u64)> {
        let min = self.buffer.iter().min()?;
        let max = self.buffer.iter().max()?;
        Some((*min, *max))
    }
}

impl Default for RollingWindow<u64> {
    fn default() -> Self {
        Self::new(128)
    }
}

/// Tree-level statistics, refreshed after each build.
#[derive(Debug, Clone)]
pub struct OctreeMetrics {
    // Shape
    /// Node count at each depth (index = depth below the root).
    pub nodes_per_depth: [u32; DEPTH_SLOTS],
    /// Leaf count at each depth.
    pub leaves_per_depth: [u32; DEPTH_SLOTS],
    /// Entity handles held at each depth (internal nodes included).
    pub entities_per_depth: [u64; DEPTH_SLOTS],

    // Memory
    /// Approximate node memory (node structs plus entity handle storage).
    pub tree_memory_bytes: u64,

    // Timing
    /// Rolling window of build times in microseconds.
    pub build_timings: RollingWindow<u64>,
    /// Last build time in microseconds.
    pub last_build_us: u64,
    /// Total trees recorded this session.
    pub total_builds: u64,
}

impl Default for OctreeMetrics {
    fn default() -> Self {
        Self {
            nodes_per_depth: [0; DEPTH_SLOTS],
            leaves_per_depth: [0; DEPTH_SLOTS],
            entities_per_depth: [0; DEPTH_SLOTS],
            tree_memory_bytes: 0,
            build_timings: RollingWindow::new(128),
            last_build_us: 0,
            total_builds: 0,
        }
    }
}

impl OctreeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the per-tree snapshot. Timings and the build total persist.
    pub fn reset(&mut self) {
        self.nodes_per_depth.fill(0);
        self.leaves_per_depth.fill(0);
        self.entities_per_depth.fill(0);
        self.tree_memory_bytes = 0;
    }

    /// Replace the shape snapshot with a walk of `root`.
    pub fn record_tree<E>(&mut self, root: &OctreeNode<E>) {
        if !is_enabled() {
            return;
        }

        self.reset();
        for (depth, node) in root.iter() {
            let slot = (depth as usize).min(DEPTH_SLOTS - 1);
            self.nodes_per_depth[slot] += 1;
            self.entities_per_depth[slot] += node.entity_count() as u64;
            if node.is_leaf() {
                self.leaves_per_depth[slot] += 1;
            }
            self.tree_memory_bytes += (std::mem::size_of::<OctreeNode<E>>()
                + node.entity_count() * std::mem::size_of::<E>())
                as u64;
        }
        self.total_builds += 1;
    }

    /// Record a build timing.
    pub fn record_build_timing(&mut self, timing_us: u64) {
        if is_enabled() {
            self.build_timings.push(timing_us);
            self.last_build_us = timing_us;
        }
    }

    pub fn total_nodes(&self) -> u32 {
        self.nodes_per_depth.iter().sum()
    }

    pub fn total_leaves(&self) -> u32 {
        self.leaves_per_depth.iter().sum()
    }

    /// Deepest depth slot holding any node.
    pub fn deepest(&self) -> Option<usize> {
        self.nodes_per_depth.iter().rposition(|&n| n > 0)
    }

    /// Get average build timing in microseconds.
    pub fn avg_build_timing_us(&self) -> f64 {
        self.build_timings.average()
    }
}

#[cfg(all(test, feature = "metrics"))]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::octree::build_octree;

    #[test]
    fn test_rolling_window() {
        let mut window = RollingWindow::new(3);
        assert!(window.is_empty());

        window.push(10u64);
        window.push(20);
        window.push(30);
        assert_eq!(window.len(), 3);
        assert_eq!(window.sum(), 60);
        assert_eq!(window.average(), 20.0);

        // Push one more, oldest should be evicted
        window.push(40);
        assert_eq!(window.len(), 3);
        assert_eq!(window.sum(), 90);
        assert_eq!(window.last(), Some(&40));

        let (min, max) = window.min_max().unwrap();
        assert_eq!(min, 20);
        assert_eq!(max, 40);
    }

    #[test]
    fn test_record_tree() {
        let root = build_octree(
            Vec3::ZERO,
            4.0,
            vec![Vec3::new(-1.0, 1.0, -1.0), Vec3::new(1.0, -1.0, 1.0)],
            2,
        );
        let mut metrics = OctreeMetrics::new();
        metrics.record_tree(&root);

        assert_eq!(metrics.nodes_per_depth[0], 1);
        assert_eq!(metrics.nodes_per_depth[1], 8);
        assert_eq!(metrics.leaves_per_depth[0], 0);
        assert_eq!(metrics.leaves_per_depth[1], 8);
        assert_eq!(metrics.entities_per_depth[0], 2);
        assert_eq!(metrics.entities_per_depth[1], 2);
        assert_eq!(metrics.total_nodes(), 9);
        assert_eq!(metrics.deepest(), Some(1));
        assert!(metrics.tree_memory_bytes > 0);
        assert_eq!(metrics.total_builds, 1);
    }

    #[test]
    fn test_timing_recording() {
        let mut metrics = OctreeMetrics::new();

        metrics.record_build_timing(1000);
        metrics.record_build_timing(2000);
        metrics.record_build_timing(3000);

        assert_eq!(metrics.build_timings.len(), 3);
        assert_eq!(metrics.avg_build_timing_us(), 2000.0);
        assert_eq!(metrics.last_build_us, 3000);
    }
}
