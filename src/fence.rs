//! Per-chunk fence registry.
//!
//! Each chunk slot has a monotonically increasing epoch counter. Before the
//! mesher reads a chunk's volume, the coordinator checks the fence has
//! reached the epoch the read depends on; before an edit or generation job
//! writes, the coordinator advances the fence only after confirming no
//! reader of an earlier epoch is still in flight. `tail`/`update` are the
//! coordinator's bookkeeping of what's been scheduled; `signal_complete` is
//! the other half, called from a job's own dispatch epilog once it has
//! actually finished running, so `try_complete`/`complete_and_reset` answer
//! "has the work finished" rather than "has a counter been incremented".

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Condvar, Mutex};

use crate::error::{MeshingError, MeshingResult};

/// Sentinel epoch meaning "this slot has no pending readers or writers".
pub const COMPLETED: u64 = u64::MAX;

/// Fence counters for a fixed set of chunk slots.
pub struct FenceRegistry {
  epochs: Vec<AtomicU64>,
  /// Highest epoch a dispatch epilog has actually signaled finished, per
  /// slot. Paired with `done` so `complete_and_reset` can block on it.
  finished: Vec<Mutex<u64>>,
  done: Vec<Condvar>,
}

impl FenceRegistry {
  /// Create a registry with `capacity` slots, all starting at epoch 0.
  pub fn new(capacity: usize) -> Self {
    Self {
      epochs: (0..capacity).map(|_| AtomicU64::new(0)).collect(),
      finished: (0..capacity).map(|_| Mutex::new(0)).collect(),
      done: (0..capacity).map(|_| Condvar::new()).collect(),
    }
  }

  pub fn capacity(&self) -> usize {
    self.epochs.len()
  }

  /// Current fence epoch for `slot`: the job handle most recently scheduled
  /// against it, or [`COMPLETED`] if nothing is outstanding.
  pub fn tail(&self, slot: usize) -> MeshingResult<u64> {
    self.epochs.get(slot).map(|e| e.load(Ordering::Acquire)).ok_or(
      MeshingError::SlotOutOfRange {
        slot,
        capacity: self.epochs.len(),
      },
    )
  }

  /// Unconditionally advance `slot`'s fence to `epoch`. Coordinator-only:
  /// callers must have already established that nothing depends on an
  /// epoch between the current tail and `epoch`.
  pub fn update(&self, slot: usize, epoch: u64) -> MeshingResult<()> {
    let fence = self.epochs.get(slot).ok_or(MeshingError::SlotOutOfRange {
      slot,
      capacity: self.epochs.len(),
    })?;
    fence.store(epoch, Ordering::Release);
    Ok(())
  }

  /// Check that `slot`'s fence has reached at least `required` before the
  /// coordinator admits a job that depends on it. Read-only: unlike
  /// [`try_complete`](Self::try_complete), this never mutates the fence -
  /// it only answers "has this precondition been met yet".
  pub fn require_ready(&self, slot: usize, required: u64) -> MeshingResult<()> {
    let tail = self.tail(slot)?;
    if tail != COMPLETED && tail < required {
      return Err(MeshingError::FenceNotReady { tail, required });
    }
    Ok(())
  }

  /// Record that the job handle `epoch` scheduled against `slot` has
  /// actually finished running. Called from the dispatch epilog that ran
  /// the job - never by the coordinator itself. Wakes any thread blocked in
  /// [`complete_and_reset`](Self::complete_and_reset).
  pub fn signal_complete(&self, slot: usize, epoch: u64) -> MeshingResult<()> {
    let finished = self.finished.get(slot).ok_or(MeshingError::SlotOutOfRange {
      slot,
      capacity: self.epochs.len(),
    })?;
    {
      let mut done_through = finished.lock().unwrap_or_else(|e| e.into_inner());
      if epoch > *done_through {
        *done_through = epoch;
      }
    }
    self.done[slot].notify_all();
    Ok(())
  }

  fn has_finished(&self, slot: usize, epoch: u64) -> MeshingResult<bool> {
    let finished = self.finished.get(slot).ok_or(MeshingError::SlotOutOfRange {
      slot,
      capacity: self.epochs.len(),
    })?;
    Ok(*finished.lock().unwrap_or_else(|e| e.into_inner()) >= epoch)
  }

  /// Returns true iff `slot`'s tail is already [`COMPLETED`], or the work
  /// scheduled as `epoch` has been signaled finished - in which case the
  /// entry is cleared to [`COMPLETED`]. Never blocks.
  pub fn try_complete(&self, slot: usize, epoch: u64) -> MeshingResult<bool> {
    if self.tail(slot)? == COMPLETED {
      return Ok(true);
    }
    if self.has_finished(slot, epoch)? {
      self.update(slot, COMPLETED)?;
      return Ok(true);
    }
    Ok(false)
  }

  /// Block until the work scheduled against `slot`'s current tail has
  /// actually finished, then clear the slot. A no-op if nothing is
  /// outstanding; idempotent once [`COMPLETED`].
  pub fn complete_and_reset(&self, slot: usize) -> MeshingResult<()> {
    let tail = self.tail(slot)?;
    if tail == COMPLETED {
      return Ok(());
    }
    let finished = self.finished.get(slot).ok_or(MeshingError::SlotOutOfRange {
      slot,
      capacity: self.epochs.len(),
    })?;
    let guard = finished.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = self.done[slot]
      .wait_while(guard, |done_through| *done_through < tail)
      .unwrap_or_else(|e| e.into_inner());
    self.update(slot, COMPLETED)
  }
}

#[cfg(test)]
#[path = "fence_test.rs"]
mod fence_test;
