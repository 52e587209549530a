//! Per-vertex material attribute encoding.
//!
//! Blends the material labels of a cell's 8 corners into a 4-channel
//! weight vector and packs it into `[u8; 4]` (RGBA-style, summing to 255)
//! for the mesh buffers' `materials_encoded` array.

use glam::Vec3A;

use crate::constants::{CORNER_OFFSETS, AIR};
use crate::surface_nets::vertex_calc::CORNER_POSITIONS;
use crate::types::{MaterialId, MaterialMode};

/// Maps a material label to one of 4 RGBA channels, wrapping labels above
/// 4 via `(m - 1) mod 4` so the encoder always has exactly 4 channels
/// regardless of how large the material palette grows.
#[inline]
fn channel_of(mat_id: MaterialId) -> usize {
  (mat_id as usize - 1) % 4
}

/// Blend corner materials into a vertex's encoded weight vector.
///
/// `vertex_frac` is the vertex position within the unit cell `[0, 1]^3`,
/// used by [`MaterialMode::InverseDistance`] to weight nearer corners more
/// heavily; it is ignored by [`MaterialMode::CornerSum`].
pub fn compute(materials: &[MaterialId], base_idx: usize, mode: MaterialMode, vertex_frac: Vec3A) -> [u8; 4] {
  let weights = match mode {
    MaterialMode::CornerSum => corner_sum(materials, base_idx),
    MaterialMode::InverseDistance => inverse_distance(materials, base_idx, vertex_frac),
  };
  encode(weights)
}

fn corner_sum(materials: &[MaterialId], base_idx: usize) -> [f32; 4] {
  let mut weights = [0.0f32; 4];

  for corner in 0..8 {
    let mat_id = materials[base_idx + CORNER_OFFSETS[corner]];
    if mat_id == AIR {
      continue;
    }
    weights[channel_of(mat_id)] += 1.0;
  }

  normalize(weights)
}

fn inverse_distance(materials: &[MaterialId], base_idx: usize, vertex_frac: Vec3A) -> [f32; 4] {
  const EPSILON: f32 = 1e-3;
  let mut weights = [0.0f32; 4];

  for corner in 0..8 {
    let mat_id = materials[base_idx + CORNER_OFFSETS[corner]];
    if mat_id == AIR {
      continue;
    }
    let dist = (CORNER_POSITIONS[corner] - vertex_frac).length();
    weights[channel_of(mat_id)] += 1.0 / (dist + EPSILON);
  }

  normalize(weights)
}

/// Normalizes raw per-channel weights to sum to 1.0. A cell whose corners
/// are all `AIR` contributes no weight at all; its vertex shouldn't exist
/// in a well-formed input, so the caller gets an all-zero vector back
/// rather than an arbitrary fallback material.
fn normalize(mut weights: [f32; 4]) -> [f32; 4] {
  let sum = weights[0] + weights[1] + weights[2] + weights[3];
  if sum > 1e-4 {
    let inv_sum = 1.0 / sum;
    for w in &mut weights {
      *w *= inv_sum;
    }
  }
  weights
}

/// Pack normalized weights (summing to 1.0, or all-zero for an all-air
/// cell) into `[u8; 4]`. A non-zero input sums to exactly 255, correcting
/// rounding drift onto the largest channel; an all-zero input packs to
/// `[0, 0, 0, 0]` unchanged.
fn encode(weights: [f32; 4]) -> [u8; 4] {
  let mut encoded: [u8; 4] = std::array::from_fn(|i| (weights[i] * 255.0).round() as u8);
  let total: i32 = encoded.iter().map(|&w| w as i32).sum();
  if total == 0 {
    return encoded;
  }

  let drift = 255 - total;
  if drift != 0 {
    let largest = (0..4).max_by_key(|&i| encoded[i]).unwrap();
    encoded[largest] = (encoded[largest] as i32 + drift).clamp(0, 255) as u8;
  }

  encoded
}

#[cfg(test)]
#[path = "attributes_test.rs"]
mod attributes_test;
