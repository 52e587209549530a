//! Commit/apply boundary between background meshing and presentation.
//!
//! Two modes are supported. [`CommitGrid::apply_immediate`] writes a single
//! chunk's mesh in place - fine when a reader can tolerate seeing that one
//! chunk update mid-frame. [`CommitGrid::commit_batch`] stages a group of
//! chunk updates and publishes them with one lock acquisition, so a reader
//! either sees the whole batch applied or none of it - needed when, say, a
//! rolling grid shift touches many chunks at once and a torn view would
//! show a seam.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{MeshingError, MeshingResult};
use crate::types::MeshBuffers;

/// One chunk slot's published mesh, versioned by the epoch that produced
/// it so stale commits can be detected and rejected.
pub struct CommitGrid {
  slots: Mutex<Vec<Arc<MeshBuffers>>>,
  epochs: Vec<AtomicU64>,
}

impl CommitGrid {
  /// Create a grid of `capacity` empty chunk slots.
  pub fn new(capacity: usize) -> Self {
    Self {
      slots: Mutex::new((0..capacity).map(|_| Arc::new(MeshBuffers::new())).collect()),
      epochs: (0..capacity).map(|_| AtomicU64::new(0)).collect(),
    }
  }

  pub fn capacity(&self) -> usize {
    self.epochs.len()
  }

  /// Snapshot the current published mesh for every slot. Cheap: each
  /// element is an `Arc` clone, not a copy of the mesh data.
  pub fn snapshot(&self) -> Vec<Arc<MeshBuffers>> {
    self.slots.lock().unwrap_or_else(|e| e.into_inner()).clone()
  }

  /// Publish `buffers` into `slot` immediately, rejecting the write if
  /// `epoch` is not newer than what's already published (an out-of-order
  /// commit racing a newer one that already landed).
  pub fn apply_immediate(&self, slot: usize, buffers: MeshBuffers, epoch: u64) -> MeshingResult<()> {
    self.check_slot(slot)?;
    if !self.try_advance_epoch(slot, epoch) {
      return Ok(());
    }
    let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
    slots[slot] = Arc::new(buffers);
    Ok(())
  }

  /// Publish a group of chunk updates atomically: readers calling
  /// [`snapshot`](Self::snapshot) concurrently see either the full
  /// pre-batch state or the full post-batch state, never a mix. Updates
  /// with a stale epoch are silently dropped from the batch rather than
  /// failing the whole commit.
  pub fn commit_batch(&self, updates: Vec<(usize, MeshBuffers, u64)>) -> MeshingResult<()> {
    for &(slot, _, _) in &updates {
      self.check_slot(slot)?;
    }

    let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
    for (slot, buffers, epoch) in updates {
      if self.try_advance_epoch(slot, epoch) {
        slots[slot] = Arc::new(buffers);
      }
    }
    Ok(())
  }

  fn check_slot(&self, slot: usize) -> MeshingResult<()> {
    if slot >= self.epochs.len() {
      return Err(MeshingError::SlotOutOfRange {
        slot,
        capacity: self.epochs.len(),
      });
    }
    Ok(())
  }

  /// Advance `slot`'s epoch to `epoch` iff it is strictly newer. Returns
  /// whether the advance happened.
  fn try_advance_epoch(&self, slot: usize, epoch: u64) -> bool {
    self.epochs[slot]
      .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
        (epoch > current).then_some(epoch)
      })
      .is_ok()
  }
}

#[cfg(test)]
#[path = "commit_test.rs"]
mod commit_test;
