//! Engine-agnostic metrics collection for the meshing pipeline.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when disabled.
//!
//! ```ignore
//! use voxel_mesh_core::metrics::{ChunkMeshMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! COLLECT_METRICS.store(false, std::sync::atomic::Ordering::Relaxed);
//!
//! metrics.record_extraction(timing_us, buffers.vertex_count() as u32, buffers.indices.len() as u32);
//! ```

use std::collections::VecDeque;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

/// Runtime toggle for metrics collection.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Rolling window for storing recent values (e.g. timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  buffer: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  pub fn push(&mut self, value: T) {
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.buffer.iter()
  }

  pub fn last(&self) -> Option<&T> {
    self.buffer.back()
  }
}

impl RollingWindow<u64> {
  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.buffer.iter().sum::<u64>() as f64 / self.buffer.len() as f64
    }
  }

  pub fn min_max(&self) -> Option<(u64, u64)> {
    if self.buffer.is_empty() {
      None
    } else {
      let min = *self.buffer.iter().min().unwrap();
      let max = *self.buffer.iter().max().unwrap();
      Some((min, max))
    }
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    Self::new(128) // ~2 seconds at 60fps
  }
}

/// Rolling statistics for the extraction/fairing pipeline, updated once per
/// completed chunk job. Has no notion of LOD - every chunk in this core is
/// a uniform 32³ volume.
#[derive(Debug, Clone)]
pub struct ChunkMeshMetrics {
  /// Rolling window of extraction times in microseconds.
  pub extraction_timings: RollingWindow<u64>,
  /// Rolling window of fairing-pass times in microseconds.
  pub fairing_timings: RollingWindow<u64>,
  /// Last extraction time in microseconds.
  pub last_extraction_us: u64,
  /// Total chunks extracted this session.
  pub total_chunks_extracted: u64,
  /// Total vertices emitted this session.
  pub total_vertices: u64,
  /// Total triangle indices emitted this session.
  pub total_indices: u64,
  /// Approximate live mesh memory usage (vertices + indices of the most
  /// recently recorded chunk, accumulated across all recorded chunks).
  pub mesh_memory_bytes: u64,
}

impl Default for ChunkMeshMetrics {
  fn default() -> Self {
    Self {
      extraction_timings: RollingWindow::new(128),
      fairing_timings: RollingWindow::new(128),
      last_extraction_us: 0,
      total_chunks_extracted: 0,
      total_vertices: 0,
      total_indices: 0,
      mesh_memory_bytes: 0,
    }
  }
}

impl ChunkMeshMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn reset(&mut self) {
    self.extraction_timings.clear();
    self.fairing_timings.clear();
    self.last_extraction_us = 0;
    self.mesh_memory_bytes = 0;
    // total_chunks_extracted, total_vertices, total_indices stay cumulative.
  }

  /// Record one completed extraction: timing plus the resulting buffer
  /// sizes.
  pub fn record_extraction(&mut self, timing_us: u64, vertex_count: u32, index_count: u32) {
    if !is_enabled() {
      return;
    }

    self.extraction_timings.push(timing_us);
    self.last_extraction_us = timing_us;
    self.total_chunks_extracted += 1;
    self.total_vertices += vertex_count as u64;
    self.total_indices += index_count as u64;

    // Approximate memory: 32 bytes per vertex (position+normal+material+cell
    // coord), 4 bytes per index.
    self.mesh_memory_bytes += (vertex_count as u64 * 32) + (index_count as u64 * 4);
  }

  /// Record one completed fairing pass's timing.
  pub fn record_fairing(&mut self, timing_us: u64) {
    if is_enabled() {
      self.fairing_timings.push(timing_us);
    }
  }

  pub fn avg_extraction_us(&self) -> f64 {
    self.extraction_timings.average()
  }

  pub fn avg_fairing_us(&self) -> f64 {
    self.fairing_timings.average()
  }

  pub fn mesh_memory_mb(&self) -> f64 {
    self.mesh_memory_bytes as f64 / 1_048_576.0
  }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;
