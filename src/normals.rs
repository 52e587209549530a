//! Surface normal computation.
//!
//! Two passes are available: a fast gradient normal computed inline during
//! extraction from the cell's 8 corner samples, and a slower triangle-
//! weighted recompute that runs as a post-process over the finished mesh.

use glam::Vec3A;

use crate::types::MeshBuffers;

/// Compute a gradient normal from 8 corner samples via central differences.
///
/// Corner layout:
/// ```text
/// 0: (0,0,0)  4: (0,0,1)
/// 1: (1,0,0)  5: (1,0,1)
/// 2: (0,1,0)  6: (0,1,1)
/// 3: (1,1,0)  7: (1,1,1)
/// ```
#[inline]
pub fn gradient(samples: &[f32; 8]) -> [f32; 3] {
  let gx = (samples[1] + samples[3] + samples[5] + samples[7])
    - (samples[0] + samples[2] + samples[4] + samples[6]);
  let gy = (samples[2] + samples[3] + samples[6] + samples[7])
    - (samples[0] + samples[1] + samples[4] + samples[5]);
  let gz = (samples[4] + samples[5] + samples[6] + samples[7])
    - (samples[0] + samples[1] + samples[2] + samples[3]);

  let grad = Vec3A::new(gx, gy, gz);
  let len_sq = grad.length_squared();
  if len_sq < 1e-8 {
    return [0.0, 1.0, 0.0];
  }
  (grad * len_sq.sqrt().recip()).to_array()
}

/// Recompute every normal in `buffers` from triangle geometry.
///
/// Indices are walked in groups of 6 - the two triangles stitching one
/// Surface Nets quad - rather than per-triangle, because the accumulation
/// weight depends on the quad's shared-vertex topology: the two vertices
/// that appear in both triangles of a quad pick up both face normals, the
/// two vertices unique to one triangle pick up only that one. Face normals
/// are unnormalized (cross product of two edges), so a quad's two triangles
/// contribute proportionally to their area.
///
/// A vertex whose accumulated length stays below the `1e-4` threshold (an
/// isolated, non-quad-forming vertex - see the boundary-quad edge case in
/// extraction) is left untouched: it keeps whatever the extractor's
/// gradient pass originally wrote.
pub fn recompute_from_geometry(buffers: &mut MeshBuffers) {
  let mut accumulated = vec![Vec3A::ZERO; buffers.normals.len()];

  for quad in buffers.indices.chunks_exact(6) {
    accumulate_triangle(&quad[0..3], &buffers.positions, &mut accumulated);
    accumulate_triangle(&quad[3..6], &buffers.positions, &mut accumulated);
  }

  for (normal, sum) in buffers.normals.iter_mut().zip(accumulated) {
    let len_sq = sum.length_squared();
    if len_sq >= 1e-4 {
      *normal = (sum * len_sq.sqrt().recip()).to_array();
    }
  }
}

/// Face normal of one triangle, accumulated onto its three vertices. A
/// degenerate triangle (collinear points, zero-area) produces a NaN cross
/// product, which is treated as a zero contribution rather than poisoning
/// the accumulator.
fn accumulate_triangle(tri: &[u32], positions: &[[f32; 3]], accumulated: &mut [Vec3A]) {
  let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);

  let p0 = Vec3A::from_array(positions[i0]);
  let p1 = Vec3A::from_array(positions[i1]);
  let p2 = Vec3A::from_array(positions[i2]);

  let face_normal = (p1 - p0).cross(p2 - p0);
  let face_normal = if face_normal.is_nan() { Vec3A::ZERO } else { face_normal };

  accumulated[i0] += face_normal;
  accumulated[i1] += face_normal;
  accumulated[i2] += face_normal;
}

#[cfg(test)]
#[path = "normals_test.rs"]
mod normals_test;
