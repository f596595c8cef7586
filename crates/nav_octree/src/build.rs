//! Top-level fork-join builder.
//!
//! Runs the full transform -> subdivide -> merge pipeline synchronously,
//! using rayon internally for parallelism. This is the entry point for
//! engine integration, typically called once during level load:
//!
//! 1. **Transform**: local vertices to world space (parallel elementwise).
//! 2. **Subdivide**: the triangle list is split into disjoint contiguous
//!    chunks, one per worker; each worker builds a private [`FlatIndex`]
//!    seeded with identical root geometry.
//! 3. **Merge**: partial indices fold into the authoritative result.
//!
//! The finished index is independent of worker count, partition
//! boundaries, and scheduling order; after the merge it is read-only and
//! safe for concurrent consumers.

use glam::{Mat4, Vec3};
use rayon::prelude::*;
use tracing::info_span;
use web_time::Instant;

use crate::index::FlatIndex;
use crate::merge::merge_all;
use crate::node::NodeState;
use crate::subdivide::build_partition;
use crate::transform::transform_vertices;

/// Construction parameters for one octree build.
#[derive(Clone, Debug)]
pub struct BuildParams {
  /// Edge length of the root cube, world units.
  pub total_size: f32,
  /// World-space center of the root cube.
  pub root_center: Vec3,
  /// Hard recursion bound; solid leaves occur only at this level.
  /// Must be positive (caller-enforced).
  pub max_division_level: u8,
  /// Number of subdivision workers. 0 = use rayon's current pool size.
  /// Not semantically significant - any value produces the same index.
  pub worker_count: usize,
  /// Shrinks each tested cube (`half = size / 2 - tolerance`). Default 0.
  pub tolerance: f32,
}

impl Default for BuildParams {
  fn default() -> Self {
    Self {
      total_size: 100.0,
      root_center: Vec3::ZERO,
      max_division_level: 4,
      worker_count: 0,
      tolerance: 0.0,
    }
  }
}

impl BuildParams {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_total_size(mut self, size: f32) -> Self {
    self.total_size = size;
    self
  }

  pub fn with_root_center(mut self, center: Vec3) -> Self {
    self.root_center = center;
    self
  }

  pub fn with_max_division_level(mut self, level: u8) -> Self {
    self.max_division_level = level;
    self
  }

  pub fn with_worker_count(mut self, count: usize) -> Self {
    self.worker_count = count;
    self
  }

  pub fn with_tolerance(mut self, tolerance: f32) -> Self {
    self.tolerance = tolerance;
    self
  }
}

/// Statistics from one build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
  /// Triangles processed.
  pub triangle_count: usize,
  /// Worker partitions actually dispatched.
  pub partition_count: usize,
  /// Total nodes in the merged index.
  pub node_count: usize,
  /// Solid leaves in the merged index.
  pub solid_leaf_count: usize,
  /// Vertex transform phase duration.
  pub transform_us: u64,
  /// Subdivision phase duration (all workers, wall clock).
  pub subdivide_us: u64,
  /// Merge phase duration.
  pub merge_us: u64,
}

/// Finished build: the merged index plus phase statistics.
pub struct BuildOutput {
  pub index: FlatIndex,
  pub stats: BuildStats,
}

/// Build a collision octree from a mesh.
///
/// * `local_vertices` - local-space vertex buffer
/// * `triangle_indices` - flat stride-3 index buffer into the vertices;
///   length must be a multiple of 3, indices in range (caller-validated)
/// * `transform` - local-to-world affine transform
///
/// Synchronous run-to-completion; blocks the caller until the merged
/// index is ready.
pub fn build_index(
  local_vertices: &[Vec3],
  triangle_indices: &[u32],
  transform: &Mat4,
  params: &BuildParams,
) -> BuildOutput {
  let triangle_count = triangle_indices.len() / 3;

  let start = Instant::now();
  let world_vertices = {
    let _span = info_span!("transform_vertices").entered();
    transform_vertices(local_vertices, transform)
  };
  let transform_us = start.elapsed().as_micros() as u64;

  let workers = if params.worker_count == 0 {
    rayon::current_num_threads().max(1)
  } else {
    params.worker_count
  };
  // Disjoint contiguous triangle ranges, one per worker. The last chunk
  // may be short.
  let triangles_per_worker = triangle_count.div_ceil(workers).max(1);

  let start = Instant::now();
  let partials: Vec<FlatIndex> = {
    let _span = info_span!("subdivide_partitions").entered();
    triangle_indices
      .par_chunks(triangles_per_worker * 3)
      .map(|range| build_partition(&world_vertices, range, params))
      .collect()
  };
  let subdivide_us = start.elapsed().as_micros() as u64;
  let partition_count = partials.len();

  let start = Instant::now();
  let index = {
    let _span = info_span!("merge_partitions").entered();
    merge_all(partials)
      .unwrap_or_else(|| FlatIndex::with_root(params.root_center, params.total_size))
  };
  let merge_us = start.elapsed().as_micros() as u64;

  let stats = BuildStats {
    triangle_count,
    partition_count,
    node_count: index.len(),
    solid_leaf_count: index.count_state(NodeState::SolidLeaf),
    transform_us,
    subdivide_us,
    merge_us,
  };

  BuildOutput { index, stats }
}

#[cfg(test)]
#[path = "build_test.rs"]
mod build_test;
