//! Naive Surface Nets meshing algorithm.
//!
//! Converts a chunk's signed distance field into a triangulated mesh.
//! Surface Nets is a dual contouring method: it emits at most one vertex
//! per 2x2x2 cell that straddles the surface, placed at the centroid of
//! that cell's edge crossings, rather than marching cubes' several
//! vertices per cell. Fewer vertices, smoother output.
//!
//! # Row-based classification
//!
//! Instead of testing each cell's 8 corners one at a time, the extractor
//! classifies a whole 32-sample z-row's signs in a single SIMD compare
//! (see [`corner_mask::row_sign_mask`]), then assembles each cell's 8-bit
//! corner mask from two bits of up to four row masks
//! ([`corner_mask::cell_mask_from_rows`]). Homogeneous cells - the common
//! case deep inside solid rock or open air - are skipped without ever
//! touching their individual samples.
//!
//! # Pipeline
//!
//! 1. **Row classification**: SIMD sign-mask per z-row, four rows per
//!    (x, y) column.
//! 2. **Cell classification**: assemble the 8-bit corner mask per cell;
//!    skip homogeneous cells.
//! 3. **Vertex placement**: centroid of edge zero-crossings
//!    ([`vertex_calc`]).
//! 4. **Attribute encoding**: gradient normal inline, material blend via
//!    [`crate::attributes`].
//! 5. **Triangulation**: shorter-diagonal quad split against the three
//!    previously-visited neighbor cells ([`emit_triangles`]).
//! 6. **Normal pass**: optionally recompute triangle-weighted normals
//!    ([`crate::normals::recompute_from_geometry`]).

pub mod corner_mask;
pub mod vertex_calc;

use glam::Vec3A;

use crate::attributes;
use crate::constants::*;
use crate::edge_table::EDGE_TABLE;
use crate::normals;
use crate::types::{sdf_conversion, ExtractConfig, MeshBuffers};
use crate::volume::Volume;

/// Index buffer tracking, per already-visited cell, the vertex index it
/// emitted. Used to stitch quads between the current cell and its three
/// backward neighbors without re-deriving positions. Checkerboard
/// ping-pong layout keeps memory use to two x-slices' worth of cells
/// rather than the whole chunk.
struct IndexBuffer {
  data: Vec<i32>,
  size: usize,
}

impl IndexBuffer {
  fn new() -> Self {
    let size = (CHUNK_SAMPLES + 1) * (CHUNK_SAMPLES + 1) * 2;
    Self {
      data: vec![-1; size],
      size,
    }
  }

  #[inline]
  fn calculate_index(&self, x: usize, y: usize, z: usize) -> usize {
    let base = z + (CHUNK_SAMPLES + 1) * y;
    if x % 2 == 0 {
      base + 1 + (CHUNK_SAMPLES + 1) * (CHUNK_SAMPLES + 2)
    } else {
      base + CHUNK_SAMPLES + 2
    }
  }

  #[inline]
  fn get(&self, x: usize, y: usize, z: usize) -> i32 {
    let idx = self.calculate_index(x, y, z);
    if idx < self.size {
      self.data[idx]
    } else {
      -1
    }
  }

  #[inline]
  fn set(&mut self, x: usize, y: usize, z: usize, value: i32) {
    let idx = self.calculate_index(x, y, z);
    if idx < self.size {
      self.data[idx] = value;
    }
  }
}

/// Generate a mesh from a chunk's SDF volume using Naive Surface Nets.
///
/// Walks the `INTERIOR_CELLS`^3 interior cells; the 1-voxel apron is read
/// as cell corners but never itself the origin of a cell, so boundary
/// samples only ever influence - never originate - geometry.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "surface_nets::extract"))]
pub fn extract(volume: &Volume, config: &ExtractConfig) -> MeshBuffers {
  let mut buffers = MeshBuffers::new();
  let mut index_buffer = IndexBuffer::new();

  let mut current_rows = compute_row_masks(volume, 0);
  for x in 0..INTERIOR_CELLS {
    let next_rows = compute_row_masks(volume, x + 1);

    for y in 0..INTERIOR_CELLS {
      let row_xy = current_rows[y];
      let row_x1y = next_rows[y];
      let row_xy1 = current_rows[y + 1];
      let row_x1y1 = next_rows[y + 1];

      for z in 0..INTERIOR_CELLS {
        let mask = corner_mask::cell_mask_from_rows(row_xy, row_x1y, row_xy1, row_x1y1, z);
        if mask == 0 || mask == 255 {
          continue;
        }
        process_cell(volume, [x, y, z], mask, &mut index_buffer, &mut buffers, config);
      }
    }

    current_rows = next_rows;
  }

  if config.recompute_normals {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("normal_recompute_pass").entered();
    normals::recompute_from_geometry(&mut buffers);
  }

  buffers
}

/// Classify the sign of every sample in each of the `CHUNK_SAMPLES` z-rows
/// at a given x, one row per y. Row `y`'s bit `z` is set when
/// `volume.sample_at(x, y, z) < 0`.
fn compute_row_masks(volume: &Volume, x: usize) -> [u32; CHUNK_SAMPLES] {
  std::array::from_fn(|y| {
    let base = volume.index(x, y, 0);
    let row: &[i8; CHUNK_SAMPLES] = volume.sdf()[base..base + CHUNK_SAMPLES].try_into().unwrap();
    corner_mask::row_sign_mask(row)
  })
}

/// Process one active (non-homogeneous) cell: place its vertex, encode its
/// attributes, and emit triangles against its backward neighbors.
fn process_cell(
  volume: &Volume,
  pos: [usize; 3],
  corner_mask: u8,
  index_buffer: &mut IndexBuffer,
  buffers: &mut MeshBuffers,
  config: &ExtractConfig,
) {
  let [x, y, z] = pos;
  let base_idx = volume.index(x, y, z);

  let samples: [f32; 8] =
    std::array::from_fn(|i| sdf_conversion::to_float(volume.sdf()[base_idx + CORNER_OFFSETS[i]]));

  let vertex_frac = vertex_calc::compute_position_direct(&samples);
  let cell_origin = Vec3A::new(x as f32, y as f32, z as f32);
  let position = (cell_origin + vertex_frac) * config.voxel_size;

  let normal = normals::gradient(&samples);
  let materials_encoded = attributes::compute(volume.materials(), base_idx, config.material_mode, vertex_frac);

  let vertex_index = buffers.positions.len() as i32;
  index_buffer.set(x, y, z, vertex_index);

  let position_arr = position.to_array();
  buffers.positions.push(position_arr);
  buffers.normals.push(normal);
  buffers.materials_encoded.push(materials_encoded);
  buffers.cell_coords.push([x as i32, y as i32, z as i32]);
  buffers.bounds.encapsulate(position_arr);

  let edge_mask = EDGE_TABLE[corner_mask as usize];
  emit_triangles(pos, edge_mask, corner_mask, index_buffer, buffers);
}

/// Emit triangles for the quads formed between this cell and its three
/// backward (x-1/y-1/z-1 combinations) neighbors, splitting each quad
/// along its shorter diagonal for better-shaped triangles.
fn emit_triangles(
  pos: [usize; 3],
  edge_mask: u16,
  corner_mask: u8,
  index_buffer: &IndexBuffer,
  buffers: &mut MeshBuffers,
) {
  let [x, y, z] = pos;
  let flip = (corner_mask & 1) == 0;

  for axis in 0..3 {
    if (edge_mask & (1 << axis)) == 0 {
      continue;
    }

    let u = (axis + 1) % 3;
    let v = (axis + 2) % 3;

    let pos_arr = [x, y, z];
    if pos_arr[u] == 0 || pos_arr[v] == 0 {
      continue;
    }

    let v_a = index_buffer.get(x, y, z);

    let mut pos_b = [x, y, z];
    pos_b[u] -= 1;
    pos_b[v] -= 1;

    let mut pos_c = [x, y, z];
    pos_c[u] -= 1;

    let mut pos_d = [x, y, z];
    pos_d[v] -= 1;

    let v_b = index_buffer.get(pos_b[0], pos_b[1], pos_b[2]);
    let v_c = index_buffer.get(pos_c[0], pos_c[1], pos_c[2]);
    let v_d = index_buffer.get(pos_d[0], pos_d[1], pos_d[2]);

    if v_a < 0 || v_b < 0 || v_c < 0 || v_d < 0 {
      continue;
    }

    let pa = buffers.positions[v_a as usize];
    let pb = buffers.positions[v_b as usize];
    let pc = buffers.positions[v_c as usize];
    let pd = buffers.positions[v_d as usize];

    let dist_ab_sq =
      (pa[0] - pb[0]).powi(2) + (pa[1] - pb[1]).powi(2) + (pa[2] - pb[2]).powi(2);
    let dist_cd_sq =
      (pc[0] - pd[0]).powi(2) + (pc[1] - pd[1]).powi(2) + (pc[2] - pd[2]).powi(2);

    let (a, b, c, d) = (v_a as u32, v_b as u32, v_c as u32, v_d as u32);

    if dist_ab_sq < dist_cd_sq {
      if flip {
        buffers.indices.extend_from_slice(&[a, b, c, a, d, b]);
      } else {
        buffers.indices.extend_from_slice(&[a, b, d, a, c, b]);
      }
    } else if flip {
      buffers.indices.extend_from_slice(&[c, a, d, d, b, c]);
    } else {
      buffers.indices.extend_from_slice(&[c, d, a, c, b, d]);
    }
  }
}
