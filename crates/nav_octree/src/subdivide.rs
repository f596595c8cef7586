//! Recursive per-triangle subdivision.
//!
//! Each triangle descends from the root: a node that the triangle misses
//! is left untouched, a node at the depth limit is promoted to
//! `SolidLeaf`, and anything in between is lazily subdivided into 8
//! children before recursing into all of them. The only two
//! recursion-termination conditions are "no intersection" and "depth
//! limit reached", so the descent is structurally bounded.
//!
//! Subdivision runs against a worker-private [`FlatIndex`]; workers never
//! share mutable state. [`build_partition`] is the per-worker entry point.

use glam::Vec3;

use crate::address::{node_center, node_size, NodeAddress};
use crate::build::BuildParams;
use crate::index::FlatIndex;
use crate::intersect::{triangle_intersects_box, Triangle};

/// Insert one triangle into the index, starting at the root.
///
/// `tolerance` shrinks the tested cube (`half = size / 2 - tolerance`);
/// 0.0 keeps the exact cell bounds.
pub fn insert_triangle(index: &mut FlatIndex, tri: &Triangle, max_level: u8, tolerance: f32) {
  insert_at(index, &NodeAddress::ROOT, tri, max_level, tolerance);
}

fn insert_at(
  index: &mut FlatIndex,
  addr: &NodeAddress,
  tri: &Triangle,
  max_level: u8,
  tolerance: f32,
) {
  let center = node_center(index.root_center(), index.total_size(), addr);
  let half = node_size(index.total_size(), addr.level) * 0.5 - tolerance;

  if !triangle_intersects_box(tri, center, half) {
    return;
  }

  if addr.level >= max_level {
    index.mark_solid_leaf(addr);
    return;
  }

  // Lazy subdivision; a no-op if this node already has children, which
  // keeps sibling state accumulated from earlier triangles intact.
  index.ensure_children(addr);

  for child in addr.children() {
    insert_at(index, &child, tri, max_level, tolerance);
  }
}

/// Run one worker's contiguous triangle range against a fresh private
/// index.
///
/// `triangle_indices` is a flat stride-3 slice into `world_vertices`; its
/// length must be a multiple of 3. The returned index is seeded with the
/// same root geometry as every other worker's, which is what makes the
/// partial results mergeable.
pub fn build_partition(
  world_vertices: &[Vec3],
  triangle_indices: &[u32],
  params: &BuildParams,
) -> FlatIndex {
  let mut index = FlatIndex::with_root(params.root_center, params.total_size);

  for tri_indices in triangle_indices.chunks_exact(3) {
    let tri = [
      world_vertices[tri_indices[0] as usize],
      world_vertices[tri_indices[1] as usize],
      world_vertices[tri_indices[2] as usize],
    ];
    insert_triangle(&mut index, &tri, params.max_division_level, params.tolerance);
  }

  index
}

#[cfg(test)]
#[path = "subdivide_test.rs"]
mod subdivide_test;
