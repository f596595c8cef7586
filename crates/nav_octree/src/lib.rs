//! nav_octree - static collision octree builder for flight navigation
//!
//! Converts a triangle mesh describing level geometry into a cubic
//! hierarchical subdivision that marks which regions of space are solid.
//! The finished index is consumed by a navigation component that plans
//! collision-aware paths for flying entities.
//!
//! # Pipeline
//!
//! 1. **Vertex transform**: local-space mesh vertices are mapped to world
//!    space in parallel.
//! 2. **Subdivision**: the triangle list is split into disjoint contiguous
//!    ranges, one per worker. Each worker recursively subdivides its own
//!    private [`FlatIndex`] - no shared mutable state, no locks.
//! 3. **Merge**: worker-local indices are folded into one authoritative
//!    result via a per-address max-by-rank rule that is associative,
//!    commutative, and idempotent, so the output is independent of worker
//!    count and scheduling.
//!
//! # Example
//!
//! ```ignore
//! use glam::{Mat4, Vec3};
//! use nav_octree::{build_index, BuildParams};
//!
//! let params = BuildParams::new()
//!   .with_total_size(64.0)
//!   .with_max_division_level(5);
//!
//! let output = build_index(&vertices, &indices, &Mat4::IDENTITY, &params);
//! println!("{} nodes, {} solid leaves",
//!     output.stats.node_count, output.stats.solid_leaf_count);
//! ```

pub mod address;
pub mod node;

// Re-export commonly used items
pub use address::{node_center, node_size, NodeAddress};
pub use node::{Node, NodeState};

// Flat address -> node container with the read-only handoff surface
pub mod index;
pub use index::FlatIndex;

// Parallel local -> world vertex transform
pub mod transform;
pub use transform::transform_vertices;

// Triangle/cube overlap primitive
pub mod intersect;
pub use intersect::{triangle_intersects_box, Triangle};

// Recursive per-triangle subdivision over a private index
pub mod subdivide;
pub use subdivide::{build_partition, insert_triangle};

// Order-independent combination of worker-local indices
pub mod merge;
pub use merge::{merge, merge_all};

// Top-level fork-join builder
pub mod build;
pub use build::{build_index, BuildOutput, BuildParams, BuildStats};
