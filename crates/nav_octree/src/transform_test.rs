use glam::{Mat4, Quat, Vec3};

use super::*;

/// Identity transform returns the input unchanged, in order.
#[test]
fn test_identity() {
  let local = vec![
    Vec3::new(1.0, 2.0, 3.0),
    Vec3::ZERO,
    Vec3::new(-5.0, 0.5, 9.0),
  ];
  let world = transform_vertices(&local, &Mat4::IDENTITY);
  assert_eq!(world, local);
}

/// Translation offsets every vertex by the same amount.
#[test]
fn test_translation() {
  let local = vec![Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0)];
  let transform = Mat4::from_translation(Vec3::new(10.0, -2.0, 0.5));
  let world = transform_vertices(&local, &transform);

  assert_eq!(world[0], Vec3::new(10.0, -2.0, 0.5));
  assert_eq!(world[1], Vec3::new(11.0, -1.0, 1.5));
}

/// A 90 degree rotation about Y maps +X to -Z.
#[test]
fn test_rotation() {
  let local = vec![Vec3::X];
  let transform = Mat4::from_quat(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
  let world = transform_vertices(&local, &transform);

  assert!((world[0] - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
}

/// Output length and order are preserved for larger buffers.
#[test]
fn test_order_preserved() {
  let local: Vec<Vec3> = (0..1000).map(|i| Vec3::splat(i as f32)).collect();
  let transform = Mat4::from_translation(Vec3::ONE);
  let world = transform_vertices(&local, &transform);

  assert_eq!(world.len(), local.len());
  for (i, v) in world.iter().enumerate() {
    assert_eq!(*v, Vec3::splat(i as f32) + Vec3::ONE);
  }
}

/// Empty input stays empty.
#[test]
fn test_empty() {
  let world = transform_vertices(&[], &Mat4::IDENTITY);
  assert!(world.is_empty());
}
