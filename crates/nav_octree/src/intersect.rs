//! Triangle/cube overlap test - the core geometric primitive.
//!
//! Separating-axis style test against an axis-aligned cube, in three
//! stages: per-axis bounds rejection, triangle-plane rejection, then the 9
//! edge-cross-axis tests. If no stage finds a separating axis, the
//! triangle is treated as intersecting.
//!
//! Boundary policy: false positives near cell boundaries are acceptable
//! (the geometry is simply assigned to more than one adjoining node);
//! false negatives are not, because unmarked solid geometry would let
//! navigation pass through walls.

use glam::Vec3;

/// A triangle as three world-space points.
pub type Triangle = [Vec3; 3];

/// Test whether a triangle overlaps the axis-aligned cube centered at
/// `box_center` with half-extent `half` on every axis.
///
/// Degenerate (zero-area) triangles are handled deterministically: with a
/// zero normal and zero-length edges no rejection stage can fire, so a
/// degenerate triangle whose bounds overlap the cube reports an
/// intersection.
pub fn triangle_intersects_box(tri: &Triangle, box_center: Vec3, half: f32) -> bool {
  // Work in the box frame: translate so the cube center is the origin.
  let v = [
    tri[0] - box_center,
    tri[1] - box_center,
    tri[2] - box_center,
  ];

  // Stage 1: per-axis bounds rejection.
  for axis in 0..3 {
    let min = v[0][axis].min(v[1][axis]).min(v[2][axis]);
    let max = v[0][axis].max(v[1][axis]).max(v[2][axis]);
    if min > half || max < -half {
      return false;
    }
  }

  // Stage 2: triangle-plane rejection.
  let normal = (v[1] - v[0]).cross(v[2] - v[0]);
  let dist = v[0].dot(normal).abs();
  if dist > half * (normal.x.abs() + normal.y.abs() + normal.z.abs()) {
    return false;
  }

  // Stage 3: the 9 edge-cross-axis tests. For each box face axis i and
  // triangle edge e, the candidate axis is unit_i x e.
  for i in 0..3 {
    for j in 0..3 {
      let edge = v[(j + 1) % 3] - v[j];
      let axis = match i {
        0 => Vec3::new(0.0, -edge.z, edge.y),
        1 => Vec3::new(edge.z, 0.0, -edge.x),
        _ => Vec3::new(-edge.y, edge.x, 0.0),
      };

      let p0 = v[0].dot(axis);
      let p1 = v[1].dot(axis);
      let p2 = v[2].dot(axis);
      let min = p0.min(p1).min(p2);
      let max = p0.max(p1).max(p2);

      let box_radius = half * (axis[(i + 1) % 3].abs() + axis[(i + 2) % 3].abs());
      if min > box_radius || max < -box_radius {
        return false;
      }
    }
  }

  true
}

#[cfg(test)]
#[path = "intersect_test.rs"]
mod intersect_test;
