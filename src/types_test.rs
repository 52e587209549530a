use sdf_conversion::*;

use super::*;

// SDF conversion tests
#[test]
fn test_roundtrip_zero() {
  assert_eq!(to_float(to_storage(0.0)), 0.0);
}

#[test]
fn test_roundtrip_positive() {
  let sdf = 5.0;
  let stored = to_storage(sdf);
  let recovered = to_float(stored);
  // Should be within one quantization level
  assert!((sdf - recovered).abs() < INV_SCALE * 1.5);
}

#[test]
fn test_roundtrip_negative() {
  let sdf = -3.5;
  let stored = to_storage(sdf);
  let recovered = to_float(stored);
  assert!((sdf - recovered).abs() < INV_SCALE * 1.5);
}

#[test]
fn test_clamping() {
  // Values beyond ±10 should clamp to ±127
  assert_eq!(to_storage(100.0), 127);
  assert_eq!(to_storage(-100.0), -127);
}

#[test]
fn test_scale_factor() {
  // Scale should map ±10 to ±127
  assert!((SCALE - 12.7).abs() < 0.01);
  assert_eq!(to_storage(10.0), 127);
  assert_eq!(to_storage(-10.0), -127);
}

// General types tests
#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, -2.0, -3.0]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert!(aabb.is_valid());
}

#[test]
fn test_aabb_empty_is_invalid() {
  assert!(!MinMaxAABB::empty().is_valid());
}

#[test]
fn test_mesh_buffers_clear() {
  let mut buffers = MeshBuffers::new();
  buffers.positions.push([0.0, 0.0, 0.0]);
  buffers.normals.push([0.0, 1.0, 0.0]);
  buffers.materials_encoded.push([255, 0, 0, 0]);
  buffers.cell_coords.push([0, 0, 0]);
  buffers.indices.push(0);
  buffers.bounds.encapsulate([0.0, 0.0, 0.0]);
  buffers.clear();

  assert!(buffers.is_empty());
  assert_eq!(buffers.vertex_count(), 0);
  assert_eq!(buffers.triangle_count(), 0);
  assert!(!buffers.bounds.is_valid());
}

#[test]
fn test_mesh_buffers_triangle_count() {
  let mut buffers = MeshBuffers::new();
  buffers.indices.extend_from_slice(&[0, 1, 2, 0, 2, 3]);
  assert_eq!(buffers.triangle_count(), 2);
}

#[test]
fn test_extract_config_builder() {
  let config = ExtractConfig::new()
    .with_voxel_size(2.0)
    .with_recompute_normals(true)
    .with_material_mode(MaterialMode::InverseDistance);

  assert_eq!(config.voxel_size, 2.0);
  assert!(config.recompute_normals);
  assert_eq!(config.material_mode, MaterialMode::InverseDistance);
}

#[test]
fn test_extract_config_default() {
  let config = ExtractConfig::default();
  assert_eq!(config.voxel_size, 1.0);
  assert!(!config.recompute_normals);
  assert_eq!(config.material_mode, MaterialMode::CornerSum);
}
