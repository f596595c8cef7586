//! Order-independent combination of worker-local indices.
//!
//! Each worker builds its own index from a disjoint triangle range with
//! the same addressing scheme, so a given address may exist in some
//! workers' maps and not others, or disagree on state. The merge rule is a
//! per-address max over [`crate::node::NodeState::rank`] (`Subdivided >
//! SolidLeaf > Empty`), which is associative, commutative, and idempotent -
//! the fold order and the partitioning cannot affect the result.
//!
//! `Subdivided` dominating at an address is sound because that node's
//! children are present under their own addresses and merge independently.

use std::collections::hash_map::Entry;

use tracing::debug;

use crate::index::FlatIndex;

/// Merge two partial indices built from the same root geometry.
pub fn merge(mut acc: FlatIndex, other: FlatIndex) -> FlatIndex {
  debug_assert_eq!(
    acc.total_size(),
    other.total_size(),
    "partial indices must share root geometry"
  );
  debug_assert_eq!(acc.root_center(), other.root_center());

  for (addr, node) in other.nodes {
    match acc.nodes.entry(addr) {
      // Missing in the accumulator: insert as-is.
      Entry::Vacant(slot) => {
        slot.insert(node);
      }
      // Present in both: keep the higher-ranked state.
      Entry::Occupied(mut slot) => {
        if node.state.rank() > slot.get().state.rank() {
          slot.get_mut().state = node.state;
        }
      }
    }
  }

  acc
}

/// Fold any number of partial indices into one.
///
/// Returns `None` for an empty input. A left-fold is used; by the merge
/// laws any other association or ordering would produce the same map.
pub fn merge_all(parts: Vec<FlatIndex>) -> Option<FlatIndex> {
  let count = parts.len();
  let merged = parts.into_iter().reduce(merge);
  if let Some(index) = &merged {
    debug!(partials = count, nodes = index.len(), "merged partial indices");
  }
  merged
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod merge_test;
