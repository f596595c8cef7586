use glam::Vec3;

use super::*;

const HALF: f32 = 0.5;

/// A triangle fully inside the cube intersects.
#[test]
fn test_triangle_inside() {
  let tri = [
    Vec3::new(-0.2, -0.2, 0.0),
    Vec3::new(0.2, -0.2, 0.0),
    Vec3::new(0.0, 0.2, 0.0),
  ];
  assert!(triangle_intersects_box(&tri, Vec3::ZERO, HALF));
}

/// The box-frame translation: same triangle, off-origin cube.
#[test]
fn test_triangle_inside_offset_box() {
  let center = Vec3::new(100.0, -50.0, 25.0);
  let tri = [
    center + Vec3::new(-0.2, -0.2, 0.0),
    center + Vec3::new(0.2, -0.2, 0.0),
    center + Vec3::new(0.0, 0.2, 0.0),
  ];
  assert!(triangle_intersects_box(&tri, center, HALF));
}

/// A triangle entirely beyond one axis bound is rejected fast.
#[test]
fn test_axis_bounds_reject() {
  let tri = [
    Vec3::new(2.0, 0.0, 0.0),
    Vec3::new(3.0, 0.0, 0.0),
    Vec3::new(2.0, 1.0, 0.0),
  ];
  assert!(!triangle_intersects_box(&tri, Vec3::ZERO, HALF));

  // And far away on all axes.
  let far = [
    Vec3::splat(1000.0),
    Vec3::splat(1001.0),
    Vec3::new(1000.0, 1001.0, 1000.0),
  ];
  assert!(!triangle_intersects_box(&far, Vec3::ZERO, HALF));
}

/// A large triangle whose plane misses the cube is rejected even though
/// its per-axis bounds overlap.
#[test]
fn test_plane_reject() {
  // Plane x + y + z = 2.4 - bounds span the cube on every axis, but the
  // closest point of the plane to the origin is beyond the cube's
  // projected radius 1.5 * half.
  let tri = [
    Vec3::new(2.4, 0.0, 0.0),
    Vec3::new(0.0, 2.4, 0.0),
    Vec3::new(0.0, 0.0, 2.4),
  ];
  assert!(!triangle_intersects_box(&tri, Vec3::ZERO, HALF));
}

/// A triangle cutting past a cube corner is rejected only by an
/// edge-cross axis: bounds overlap and the plane (z = 0) passes through
/// the cube.
#[test]
fn test_edge_cross_reject() {
  let tri = [
    Vec3::new(1.5, -0.4, 0.0),
    Vec3::new(-0.4, 1.5, 0.0),
    Vec3::new(1.5, 1.5, 0.0),
  ];
  assert!(!triangle_intersects_box(&tri, Vec3::ZERO, HALF));
}

/// The same corner-cutting triangle nudged inward does intersect.
#[test]
fn test_edge_cross_accept() {
  let tri = [
    Vec3::new(0.8, -0.4, 0.0),
    Vec3::new(-0.4, 0.8, 0.0),
    Vec3::new(0.8, 0.8, 0.0),
  ];
  assert!(triangle_intersects_box(&tri, Vec3::ZERO, HALF));
}

/// Touching the cube boundary counts as intersecting (false-positive
/// tolerant policy).
#[test]
fn test_boundary_touch_accepts() {
  let tri = [
    Vec3::new(0.5, 0.0, 0.0),
    Vec3::new(1.5, 0.0, 0.0),
    Vec3::new(1.5, 1.0, 0.0),
  ];
  assert!(triangle_intersects_box(&tri, Vec3::ZERO, HALF));
}

/// A zero-area triangle inside the cube intersects; far away it does not.
/// Either way the answer is deterministic.
#[test]
fn test_degenerate_triangle() {
  let point = Vec3::new(0.1, 0.1, 0.1);
  let inside = [point, point, point];
  let outside = [Vec3::splat(10.0); 3];

  for _ in 0..3 {
    assert!(triangle_intersects_box(&inside, Vec3::ZERO, HALF));
    assert!(!triangle_intersects_box(&outside, Vec3::ZERO, HALF));
  }
}

/// An axis-piercing triangle larger than the cube still intersects (no
/// vertex inside the cube).
#[test]
fn test_large_triangle_through_cube() {
  let tri = [
    Vec3::new(-10.0, -10.0, 0.0),
    Vec3::new(10.0, -10.0, 0.0),
    Vec3::new(0.0, 10.0, 0.0),
  ];
  assert!(triangle_intersects_box(&tri, Vec3::ZERO, HALF));
}
