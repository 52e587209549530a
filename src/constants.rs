//! Volume layout constants for 32³ voxel chunks.
//!
//! # SDF Volume Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SDF VOLUME LAYOUT                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Sample index:  0     1   ...   29    30    31                          │
//! │                 │     │         │     │     │                          │
//! │                 │     └─ 30 interior ──┘     │                          │
//! │                 │        cells [0,29]        │                          │
//! │                 └─ apron (read-only)          └─ apron (read-only)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! 32 samples per axis give 31 possible cell origins (0..=30); the
//! extractor only walks the first 30 of them (cells `[0, 29]`), so sample
//! index 31 on each axis is never read as a cell corner - it exists
//! purely to satisfy the apron invariant (§3.1). Index 0 and 31 are the
//! read-only apron; 1..=30 is the authoritative interior.
//!
//! # 3D Indexing
//!
//! Samples are stored z-innermost: `index = z + 32*y + 1024*x`. A 32-wide
//! row along z is therefore contiguous in memory, and adjacent x-rows sit
//! exactly 1024 bytes (32·32 samples) apart - the stride the row-based
//! extractor's loader relies on.
//!
//! ```text
//! Address:  0    1    2   ...  31   32   33  ...  1023  1024 ...
//! Content: [0,0,0][0,0,1]...[0,0,31][0,1,0]...[0,31,31][1,0,0]...
//!          └─────── Z ───────┘└─────── Z ───────┘
//! ```
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          └───────── +X
//!         /
//!        /
//!       +Z
//!
//! Cell corner indices (binary: ZYX):
//!   0 = (0,0,0)    4 = (0,0,1)
//!   1 = (1,0,0)    5 = (1,0,1)
//!   2 = (0,1,0)    6 = (0,1,1)
//!   3 = (1,1,0)    7 = (1,1,1)
//! ```

/// Number of samples per axis. Fixed; see `chunk_size` in the host contract.
pub const CHUNK_SAMPLES: usize = 32;

/// Samples squared (32² = 1024).
pub const CHUNK_SAMPLES_SQ: usize = CHUNK_SAMPLES * CHUNK_SAMPLES;

/// Total samples in a chunk (32³ = 32768).
pub const CHUNK_SAMPLES_CB: usize = CHUNK_SAMPLES * CHUNK_SAMPLES * CHUNK_SAMPLES;

/// Maximum valid sample index (31).
pub const MAX_SAMPLE_INDEX: usize = CHUNK_SAMPLES - 1;

/// Bit shift for the Y coordinate (log2(32) = 5).
pub const Y_SHIFT: u32 = 5;

/// Bit shift for the X coordinate (log2(1024) = 10).
pub const X_SHIFT: u32 = 10;

/// Mask for extracting a single axis coordinate from a linear index.
pub const INDEX_MASK: usize = 0x1F;

/// Number of interior cells per axis that can emit geometry.
pub const INTERIOR_CELLS: usize = 30;

/// Reserved material id meaning "no material" (air).
pub const AIR: u8 = 0;

/// Convert 3D sample coordinates to a linear volume index.
///
/// x is the outer axis (stride 1024), y the middle axis (stride 32), z the
/// inner axis (stride 1) - see module docs for why this gives a
/// contiguous z-row.
#[inline(always)]
pub const fn coord_to_index(x: usize, y: usize, z: usize) -> usize {
  (x << X_SHIFT) | (y << Y_SHIFT) | z
}

/// Convert a linear volume index back to 3D sample coordinates.
#[inline(always)]
pub const fn index_to_coord(idx: usize) -> (usize, usize, usize) {
  let x = idx >> X_SHIFT;
  let y = (idx >> Y_SHIFT) & INDEX_MASK;
  let z = idx & INDEX_MASK;
  (x, y, z)
}

/// Volume index offsets for the 8 cube corners, relative to corner 0.
///
/// Corner layout (binary: ZYX):
/// - 0 = (0,0,0)   4 = (0,0,1)
/// - 1 = (1,0,0)   5 = (1,0,1)
/// - 2 = (0,1,0)   6 = (0,1,1)
/// - 3 = (1,1,0)   7 = (1,1,1)
pub const CORNER_OFFSETS: [usize; 8] = [
  0,                                   // (0,0,0)
  1 << X_SHIFT,                        // (1,0,0)
  1 << Y_SHIFT,                        // (0,1,0)
  (1 << X_SHIFT) | (1 << Y_SHIFT),     // (1,1,0)
  1,                                   // (0,0,1)
  (1 << X_SHIFT) | 1,                  // (1,0,1)
  (1 << Y_SHIFT) | 1,                  // (0,1,1)
  (1 << X_SHIFT) | (1 << Y_SHIFT) | 1, // (1,1,1)
];

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
