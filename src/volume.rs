//! Chunk volume storage.
//!
//! A [`Volume`] owns one chunk's worth of SDF and material samples, laid
//! out per [`crate::constants`]: a fixed 32-sample cube with a 1-voxel
//! apron of read-only boundary samples surrounding 30x30x30 interior cells
//! that may emit geometry.

use crate::constants::{coord_to_index, CHUNK_SAMPLES, CHUNK_SAMPLES_CB};
use crate::error::{MeshingError, MeshingResult};
use crate::types::{MaterialId, SdfSample};

/// Owned SDF + material storage for one chunk.
///
/// Boxed rather than inline: a `32768`-element `i8` + `u8` pair is 64KiB,
/// too large to keep on the stack across the worker-pool job boundary
/// without risking overflow on constrained platforms.
pub struct Volume {
  sdf: Box<[SdfSample; CHUNK_SAMPLES_CB]>,
  materials: Box<[MaterialId; CHUNK_SAMPLES_CB]>,
  pub voxel_size: f32,
}

impl Volume {
  /// Create an all-air volume (every sample `i8::MAX`, material 0).
  pub fn new(voxel_size: f32) -> Self {
    Self {
      sdf: Box::new([SdfSample::MAX; CHUNK_SAMPLES_CB]),
      materials: Box::new([0; CHUNK_SAMPLES_CB]),
      voxel_size,
    }
  }

  /// Build a volume from raw sample arrays, validating their length
  /// against the fixed chunk size.
  pub fn from_samples(
    sdf: Vec<SdfSample>,
    materials: Vec<MaterialId>,
    voxel_size: f32,
  ) -> MeshingResult<Self> {
    if sdf.len() != CHUNK_SAMPLES_CB {
      return Err(MeshingError::ChunkSizeMismatch {
        expected: CHUNK_SAMPLES_CB,
        actual: sdf.len(),
      });
    }
    if materials.len() != CHUNK_SAMPLES_CB {
      return Err(MeshingError::ChunkSizeMismatch {
        expected: CHUNK_SAMPLES_CB,
        actual: materials.len(),
      });
    }

    let sdf: Box<[SdfSample; CHUNK_SAMPLES_CB]> = sdf.into_boxed_slice().try_into().unwrap_or_else(|_| unreachable!());
    let materials: Box<[MaterialId; CHUNK_SAMPLES_CB]> =
      materials.into_boxed_slice().try_into().unwrap_or_else(|_| unreachable!());

    Ok(Self {
      sdf,
      materials,
      voxel_size,
    })
  }

  #[inline]
  pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
    coord_to_index(x, y, z)
  }

  #[inline]
  pub fn sdf(&self) -> &[SdfSample; CHUNK_SAMPLES_CB] {
    &self.sdf
  }

  #[inline]
  pub fn sdf_mut(&mut self) -> &mut [SdfSample; CHUNK_SAMPLES_CB] {
    &mut self.sdf
  }

  #[inline]
  pub fn materials(&self) -> &[MaterialId; CHUNK_SAMPLES_CB] {
    &self.materials
  }

  #[inline]
  pub fn materials_mut(&mut self) -> &mut [MaterialId; CHUNK_SAMPLES_CB] {
    &mut self.materials
  }

  #[inline]
  pub fn sample_at(&self, x: usize, y: usize, z: usize) -> SdfSample {
    self.sdf[self.index(x, y, z)]
  }

  #[inline]
  pub fn material_at(&self, x: usize, y: usize, z: usize) -> MaterialId {
    self.materials[self.index(x, y, z)]
  }

  /// Write a sample, returning an error if the coordinate falls outside
  /// the interior the generation boundary is allowed to touch. Apron
  /// samples (`0` or `CHUNK_SAMPLES - 1` on any axis) are read-only from
  /// the edit path's perspective - they're written only by copying from a
  /// neighbor chunk, never by local generation or editing.
  pub fn set_interior_sample(
    &mut self,
    x: usize,
    y: usize,
    z: usize,
    sdf: SdfSample,
    material: MaterialId,
  ) -> MeshingResult<()> {
    if is_apron_coord(x, y, z) {
      return Err(MeshingError::ApronWriteRejected { x, y, z });
    }
    let idx = self.index(x, y, z);
    self.sdf[idx] = sdf;
    self.materials[idx] = material;
    Ok(())
  }

  /// Iterate the 32² coordinates of one apron face, the read-only boundary
  /// slab on a single side of a single axis. Used by adjacency sync when a
  /// grid copies overlap between neighbor chunks - each call covers
  /// exactly one face, not the whole apron shell.
  pub fn apron_slab_iter(face: Face) -> impl Iterator<Item = (usize, usize, usize)> {
    let fixed = face.apron_coord();
    let [other_a, other_b] = face.other_axes();
    (0..CHUNK_SAMPLES).flat_map(move |a| {
      (0..CHUNK_SAMPLES).map(move |b| {
        let mut coord = [0usize; 3];
        coord[face.axis] = fixed;
        coord[other_a] = a;
        coord[other_b] = b;
        (coord[0], coord[1], coord[2])
      })
    })
  }
}

#[inline]
fn is_apron_coord(x: usize, y: usize, z: usize) -> bool {
  let last = CHUNK_SAMPLES - 1;
  x == 0 || x == last || y == 0 || y == last || z == 0 || z == last
}

/// One face of a chunk's boundary: an axis (0=x, 1=y, 2=z) and a side.
///
/// Identifies both the read-only apron layer on that side (coordinate 0
/// or `CHUNK_SAMPLES - 1`) and the interior layer immediately adjacent to
/// it (coordinate 1 or `CHUNK_SAMPLES - 2`) - the two layers
/// [`copy_shared_overlap`] moves samples between when syncing neighbor
/// chunks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
  pub axis: usize,
  pub sign: Sign,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
  /// Coordinate 0 on `axis`.
  Neg,
  /// Coordinate `CHUNK_SAMPLES - 1` on `axis`.
  Pos,
}

impl Face {
  pub fn new(axis: usize, sign: Sign) -> Self {
    assert!(axis < 3, "axis must be 0, 1, or 2, got {axis}");
    Self { axis, sign }
  }

  #[inline]
  fn apron_coord(&self) -> usize {
    match self.sign {
      Sign::Neg => 0,
      Sign::Pos => CHUNK_SAMPLES - 1,
    }
  }

  #[inline]
  fn interior_coord(&self) -> usize {
    match self.sign {
      Sign::Neg => 1,
      Sign::Pos => CHUNK_SAMPLES - 2,
    }
  }

  #[inline]
  fn other_axes(&self) -> [usize; 2] {
    [(self.axis + 1) % 3, (self.axis + 2) % 3]
  }
}

/// Copy one chunk's interior boundary layer into a neighbor's apron.
///
/// `src_face` names the side of `src` facing `dst` (so the layer read is
/// the interior samples one step in from that face); `dst_face` names the
/// side of `dst` facing `src` (so the layer written is that face's apron).
/// The two faces need not share the same axis - the core only specifies
/// that this sync must happen before meshing either chunk; the grid
/// system supplies which faces correspond.
///
/// This is the one sanctioned path that writes apron samples directly;
/// [`Volume::set_interior_sample`] rejects them deliberately so only grid
/// adjacency sync can touch the apron.
pub fn copy_shared_overlap(src: &Volume, src_face: Face, dst: &mut Volume, dst_face: Face) {
  let src_fixed = src_face.interior_coord();
  let dst_fixed = dst_face.apron_coord();
  let [src_a, src_b] = src_face.other_axes();
  let [dst_a, dst_b] = dst_face.other_axes();

  for a in 0..CHUNK_SAMPLES {
    for b in 0..CHUNK_SAMPLES {
      let mut src_coord = [0usize; 3];
      src_coord[src_face.axis] = src_fixed;
      src_coord[src_a] = a;
      src_coord[src_b] = b;

      let mut dst_coord = [0usize; 3];
      dst_coord[dst_face.axis] = dst_fixed;
      dst_coord[dst_a] = a;
      dst_coord[dst_b] = b;

      let sdf = src.sample_at(src_coord[0], src_coord[1], src_coord[2]);
      let material = src.material_at(src_coord[0], src_coord[1], src_coord[2]);
      let idx = dst.index(dst_coord[0], dst_coord[1], dst_coord[2]);
      dst.sdf[idx] = sdf;
      dst.materials[idx] = material;
    }
  }
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
