//! Parallel local -> world vertex transform.
//!
//! Pure elementwise map: each output vertex depends only on the
//! corresponding input vertex, so the work parallelizes with no shared
//! state and no ordering requirement. Output order matches input order.

use glam::{Mat4, Vec3};
use rayon::prelude::*;

/// Transform every local-space vertex into world space.
///
/// Assumes a well-formed finite affine transform; there are no error
/// conditions.
pub fn transform_vertices(local: &[Vec3], transform: &Mat4) -> Vec<Vec3> {
  local
    .par_iter()
    .map(|p| transform.transform_point3(*p))
    .collect()
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
