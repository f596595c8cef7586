//! Node - one record in the flat octree index.

use glam::Vec3;

use crate::address::NodeAddress;

/// What a node's region of space contains.
///
/// A single tagged state rather than separate has-children /
/// contains-collision flags, so the unreachable "both" combination is not
/// representable. The three states form a total order used by the merger;
/// see [`NodeState::rank`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NodeState {
  /// No known geometry; not subdivided.
  Empty,
  /// Maximum-depth leaf intersecting solid geometry. Blocks navigation.
  SolidLeaf,
  /// All 8 children exist in the index; traversal continues below.
  Subdivided,
}

impl NodeState {
  /// Merge rank: `Subdivided > SolidLeaf > Empty`.
  ///
  /// Merging two nodes at the same address keeps the higher rank, which
  /// makes the merge associative, commutative, and idempotent.
  #[inline]
  pub fn rank(&self) -> u8 {
    match self {
      NodeState::Empty => 0,
      NodeState::SolidLeaf => 1,
      NodeState::Subdivided => 2,
    }
  }
}

/// Octree node record.
///
/// `center` and `size` are always derived from the root geometry via
/// [`crate::address::node_center`] / [`crate::address::node_size`] - they
/// are stored here for cheap access by consumers, never set independently.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Node {
  pub address: NodeAddress,
  /// World-space center of this node's cube.
  pub center: Vec3,
  /// Edge length of this node's cube.
  pub size: f32,
  pub state: NodeState,
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
