//! Core data types for Surface Nets meshing.

/// Signed distance field sample value.
/// Negative = inside/solid, positive = outside/air, zero = exactly on the
/// surface.
pub type SdfSample = i8;

/// Material identifier (0-3 for 4-material blending).
pub type MaterialId = u8;

/// SDF storage conversion.
///
/// Samples are stored as `i8` and used directly by the extractor's
/// zero-crossing interpolation (`t = s0 / (s0 - s1)`); this module only
/// exists for callers that generate chunks from a floating-point density
/// field and need to quantize it to the storage type.
pub mod sdf_conversion {
  /// Quantization levels per unit of world-space SDF magnitude.
  /// Chosen so that ±10 world units maps to the full ±127 range.
  pub const SCALE: f32 = 12.7;

  /// Inverse of [`SCALE`], cached to avoid repeated division.
  pub const INV_SCALE: f32 = 1.0 / SCALE;

  /// Quantize a world-space SDF value to storage, clamping to ±127.
  #[inline(always)]
  pub fn to_storage(sdf: f32) -> i8 {
    (sdf * SCALE).clamp(-127.0, 127.0).round() as i8
  }

  /// Recover the world-space SDF value from a stored sample.
  #[inline(always)]
  pub fn to_float(value: i8) -> f32 {
    value as f32 * INV_SCALE
  }
}

/// Selects the attribute-encoding algorithm used by the attribute encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MaterialMode {
  /// Count non-air corners per material slot and normalize. Cheap,
  /// slightly blocky at material boundaries.
  #[default]
  CornerSum,

  /// Weight each non-air corner by the inverse of its distance to the
  /// vertex. Smoother material gradients, costs one sqrt per corner.
  InverseDistance,
}

/// Configuration for a single chunk extraction pass.
#[derive(Clone, Copy, Debug)]
pub struct ExtractConfig {
  /// Scale factor applied to vertex positions and normals' finite
  /// differences.
  pub voxel_size: f32,

  /// When true, the normal pipeline's post-process pass overwrites the
  /// inline gradient normals with triangle-weighted normals. When false,
  /// the gradient normals computed during extraction are kept as-is.
  pub recompute_normals: bool,

  /// Algorithm used to blend corner materials into vertex weights.
  pub material_mode: MaterialMode,
}

impl Default for ExtractConfig {
  fn default() -> Self {
    Self {
      voxel_size: 1.0,
      recompute_normals: false,
      material_mode: MaterialMode::default(),
    }
  }
}

impl ExtractConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_voxel_size(mut self, size: f32) -> Self {
    self.voxel_size = size;
    self
  }

  pub fn with_recompute_normals(mut self, recompute: bool) -> Self {
    self.recompute_normals = recompute;
    self
  }

  pub fn with_material_mode(mut self, mode: MaterialMode) -> Self {
    self.material_mode = mode;
    self
  }
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Mesh generation result, stored as independent parallel sequences rather
/// than an interleaved vertex struct so each pass (extraction, fairing,
/// normal recompute) can touch only the attribute it needs.
#[derive(Default)]
pub struct MeshBuffers {
  /// Vertex positions in chunk-local coordinates, scaled by `voxel_size`.
  pub positions: Vec<[f32; 3]>,

  /// Surface normals (unit vectors), parallel to `positions`.
  pub normals: Vec<[f32; 3]>,

  /// Encoded material blend weights (RGBA-packed, sum to 255), parallel to
  /// `positions`.
  pub materials_encoded: Vec<[u8; 4]>,

  /// Origin cell of each vertex, parallel to `positions`. Used by the
  /// fairing pass to build face-adjacency without re-walking the volume.
  pub cell_coords: Vec<[i32; 3]>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl MeshBuffers {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.positions.clear();
    self.normals.clear();
    self.materials_encoded.clear();
    self.cell_coords.clear();
    self.indices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  /// Number of vertices in the mesh.
  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
