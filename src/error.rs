//! Error types for the meshing core.

/// Errors surfaced by chunk extraction, fairing, and the scheduler.
#[derive(Debug, thiserror::Error)]
pub enum MeshingError {
  /// A volume was constructed from a sample buffer whose length isn't
  /// `CHUNK_SAMPLES_CB` (32³).
  #[error("chunk size mismatch: expected {expected} total samples, got {actual}")]
  ChunkSizeMismatch { expected: usize, actual: usize },

  /// The fence registry rejected a write because a reader from an earlier
  /// epoch has not yet completed.
  #[error("fence not ready: tail epoch {tail} has not reached required epoch {required}")]
  FenceNotReady { tail: u64, required: u64 },

  /// A commit batch referenced a chunk slot outside the configured grid.
  #[error("commit batch references out-of-range chunk slot {slot} (grid holds {capacity})")]
  SlotOutOfRange { slot: usize, capacity: usize },

  /// The scheduler's per-frame admission budget was exhausted before all
  /// requested jobs could be admitted.
  #[error("admission budget exhausted: requested {requested} jobs, budget allows {budget}")]
  BudgetExhausted { requested: usize, budget: usize },

  /// A write targeted an apron coordinate, which is read-only from the
  /// local chunk's perspective - it is only ever populated by copying from
  /// a neighboring chunk.
  #[error("coordinate ({x}, {y}, {z}) lies in the read-only apron")]
  ApronWriteRejected { x: usize, y: usize, z: usize },
}

/// Convenience alias for results produced by this crate.
pub type MeshingResult<T> = Result<T, MeshingError>;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
