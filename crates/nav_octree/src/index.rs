//! FlatIndex - address -> node container for one octree.
//!
//! The tree structure is implicit: parent/child relationships are computed
//! on demand via [`NodeAddress`] math, and nodes are stored flat in a hash
//! map keyed by address. No node pointers anywhere.
//!
//! A `FlatIndex` is mutable only during construction (each subdivision
//! worker owns a private instance). After the merge it is treated as
//! immutable and may be read concurrently by any number of consumers; the
//! read-only surface ([`contains`](FlatIndex::contains),
//! [`get`](FlatIndex::get), [`state_of`](FlatIndex::state_of),
//! [`child_addresses`](FlatIndex::child_addresses)) is the handoff contract
//! for the navigation component.

use std::collections::HashMap;

use glam::Vec3;
use smallvec::SmallVec;
use tracing::warn;

use crate::address::{node_center, node_size, NodeAddress};
use crate::node::{Node, NodeState};

/// Flat octree index: root geometry plus an address -> node map.
#[derive(Clone, PartialEq, Debug)]
pub struct FlatIndex {
  total_size: f32,
  root_center: Vec3,
  pub(crate) nodes: HashMap<NodeAddress, Node>,
}

impl FlatIndex {
  /// Create an index with the root node pre-seeded as `Empty`.
  ///
  /// Every worker must seed its private index with identical root geometry
  /// before subdivision so that the partial results merge cleanly.
  pub fn with_root(root_center: Vec3, total_size: f32) -> Self {
    let root = Node {
      address: NodeAddress::ROOT,
      center: root_center,
      size: total_size,
      state: NodeState::Empty,
    };
    let mut nodes = HashMap::new();
    nodes.insert(NodeAddress::ROOT, root);
    Self {
      total_size,
      root_center,
      nodes,
    }
  }

  /// Edge length of the root cube.
  #[inline]
  pub fn total_size(&self) -> f32 {
    self.total_size
  }

  /// World-space center of the root cube.
  #[inline]
  pub fn root_center(&self) -> Vec3 {
    self.root_center
  }

  /// Number of nodes in the index.
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// An index always holds at least the root node.
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Check if a node exists at the given address.
  pub fn contains(&self, addr: &NodeAddress) -> bool {
    self.nodes.contains_key(addr)
  }

  /// Look up the node at an address.
  pub fn get(&self, addr: &NodeAddress) -> Option<&Node> {
    self.nodes.get(addr)
  }

  /// State of the node at an address, if present.
  pub fn state_of(&self, addr: &NodeAddress) -> Option<NodeState> {
    self.nodes.get(addr).map(|n| n.state)
  }

  /// Child addresses of a `Subdivided` node.
  ///
  /// Returns `None` for absent or non-subdivided nodes. A `Subdivided` node
  /// whose child is missing from the map is an invariant violation
  /// (construction bug); the missing child is logged and skipped so the
  /// rest of the index stays usable.
  pub fn child_addresses(&self, addr: &NodeAddress) -> Option<SmallVec<[NodeAddress; 8]>> {
    match self.state_of(addr)? {
      NodeState::Subdivided => {
        let mut children = SmallVec::new();
        for child in addr.children() {
          if self.nodes.contains_key(&child) {
            children.push(child);
          } else {
            warn!(?addr, ?child, "subdivided node is missing a child; skipping branch");
          }
        }
        Some(children)
      }
      _ => None,
    }
  }

  /// Iterate over all nodes.
  pub fn iter(&self) -> impl Iterator<Item = &Node> {
    self.nodes.values()
  }

  /// Number of nodes in the given state.
  pub fn count_state(&self, state: NodeState) -> usize {
    self.nodes.values().filter(|n| n.state == state).count()
  }

  /// Lazily create all 8 children of `addr` and mark it `Subdivided`.
  ///
  /// Idempotent: an already-`Subdivided` node is left untouched, and a
  /// child that already exists is never overwritten - re-entering a region
  /// must not discard state accumulated from earlier triangles.
  pub(crate) fn ensure_children(&mut self, addr: &NodeAddress) {
    match self.nodes.get(addr) {
      Some(node) if node.state == NodeState::Subdivided => return,
      Some(_) => {}
      None => {
        warn!(?addr, "ensure_children on absent node; skipping");
        return;
      }
    }

    for child in addr.children() {
      self.nodes.entry(child).or_insert_with(|| Node {
        address: child,
        center: node_center(self.root_center, self.total_size, &child),
        size: node_size(self.total_size, child.level),
        state: NodeState::Empty,
      });
    }

    if let Some(node) = self.nodes.get_mut(addr) {
      node.state = NodeState::Subdivided;
    }
  }

  /// Promote the node at `addr` to `SolidLeaf`.
  ///
  /// Monotonic: never demotes a higher-ranked state.
  pub(crate) fn mark_solid_leaf(&mut self, addr: &NodeAddress) {
    match self.nodes.get_mut(addr) {
      Some(node) => {
        if node.state.rank() < NodeState::SolidLeaf.rank() {
          node.state = NodeState::SolidLeaf;
        }
      }
      None => warn!(?addr, "mark_solid_leaf on absent node; skipping"),
    }
  }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
