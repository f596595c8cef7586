//! NodeAddress - grid addressing and geometry for octree nodes.
//!
//! Nodes are identified by their grid coordinates at their subdivision
//! level. Level 0 = the root cube, higher levels = finer cells. At a given
//! `level` the grid coordinates lie in `[0, 2^level)`, so addresses at one
//! level partition the root cube exactly and distinct parents can never
//! produce colliding child addresses.
//!
//! The two geometry functions here ([`node_size`], [`node_center`]) are the
//! only source of truth for node geometry - nothing else in the crate may
//! derive a divergent center or size for an address.

use glam::Vec3;
use smallvec::SmallVec;

/// Octree node address - immutable value type used as the map key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeAddress {
  /// Subdivision level (0 = root, higher = finer).
  pub level: u8,
  /// Grid X position at this level, in `[0, 2^level)`.
  pub x: u32,
  /// Grid Y position at this level, in `[0, 2^level)`.
  pub y: u32,
  /// Grid Z position at this level, in `[0, 2^level)`.
  pub z: u32,
}

impl NodeAddress {
  /// The root cube's address.
  pub const ROOT: Self = Self {
    level: 0,
    x: 0,
    y: 0,
    z: 0,
  };

  /// Create an address at the given level and grid position.
  pub fn new(level: u8, x: u32, y: u32, z: u32) -> Self {
    Self { level, x, y, z }
  }

  /// Get the child address for an octant (finer: level + 1).
  ///
  /// Octant: 0-7 where bits represent +X, +Y, +Z offsets:
  /// - bit 0: X offset (0 or 1)
  /// - bit 1: Y offset (0 or 1)
  /// - bit 2: Z offset (0 or 1)
  pub fn child(&self, octant: u8) -> Self {
    debug_assert!(octant < 8, "octant must be in 0..8");
    Self {
      level: self.level + 1,
      x: self.x * 2 + (octant & 1) as u32,
      y: self.y * 2 + ((octant >> 1) & 1) as u32,
      z: self.z * 2 + ((octant >> 2) & 1) as u32,
    }
  }

  /// All 8 child addresses in canonical octant order.
  pub fn children(&self) -> SmallVec<[NodeAddress; 8]> {
    (0..8u8).map(|octant| self.child(octant)).collect()
  }
}

/// Edge length of a node at `level`: `total_size / 2^level`.
#[inline]
pub fn node_size(total_size: f32, level: u8) -> f32 {
  debug_assert!(level < 32, "grid coordinates are u32");
  total_size / (1u32 << level) as f32
}

/// World-space center of the node at `addr`.
///
/// Derived from the root cube's corner: `corner = root_center -
/// total_size / 2`, then `center = corner + size * (index + 0.5)`
/// componentwise.
#[inline]
pub fn node_center(root_center: Vec3, total_size: f32, addr: &NodeAddress) -> Vec3 {
  let corner = root_center - Vec3::splat(total_size * 0.5);
  let size = node_size(total_size, addr.level);
  corner
    + Vec3::new(
      (addr.x as f32 + 0.5) * size,
      (addr.y as f32 + 0.5) * size,
      (addr.z as f32 + 0.5) * size,
    )
}

#[cfg(test)]
#[path = "address_test.rs"]
mod address_test;
