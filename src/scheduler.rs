//! Per-frame admission-budgeted job scheduler.
//!
//! Chunk work (extraction, fairing, commit) is queued as it becomes ready,
//! but only a bounded number of jobs are admitted into the worker pool each
//! frame - this caps the CPU a single frame can spend on meshing,
//! independent of how deep the backlog has grown. Admitted jobs are handed
//! to `rayon::spawn` and the coordinator returns immediately; `in_flight`
//! tracks how many are still executing on the global pool so callers can
//! avoid starting a fence-dependent batch while earlier work is still
//! outstanding - the coordinator only ever blocks at a fence's
//! `complete_and_reset`, never inside `dispatch_frame` itself.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};

use crate::error::{MeshingError, MeshingResult};

/// The pipeline stage a queued job belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobKind {
  Extract,
  Fair,
  Commit,
}

/// One unit of chunk work awaiting dispatch.
#[derive(Clone, Copy, Debug)]
pub struct Job {
  pub chunk_slot: usize,
  pub epoch: u64,
  pub kind: JobKind,
}

/// Queues chunk jobs and admits a bounded number of them per frame.
pub struct Scheduler {
  budget_per_frame: usize,
  in_flight: Arc<AtomicUsize>,
  sender: Sender<Job>,
  receiver: Receiver<Job>,
}

impl Scheduler {
  /// Create a scheduler admitting up to `budget_per_frame` jobs per
  /// `dispatch_frame` call.
  pub fn new(budget_per_frame: usize) -> Self {
    let (sender, receiver) = crossbeam_channel::unbounded();
    Self {
      budget_per_frame,
      in_flight: Arc::new(AtomicUsize::new(0)),
      sender,
      receiver,
    }
  }

  /// Number of jobs currently executing on the worker pool.
  pub fn in_flight(&self) -> usize {
    self.in_flight.load(Ordering::Acquire)
  }

  /// Queue a job for a future frame's dispatch. Never blocks: the queue is
  /// unbounded, so backlog depth is the caller's concern, not the
  /// scheduler's.
  pub fn enqueue(&self, job: Job) {
    // An unbounded channel's send only fails if every receiver was
    // dropped, which can't happen while `self` is alive.
    let _ = self.sender.send(job);
  }

  /// How many queued jobs this frame's admission budget would allow,
  /// given `pending` jobs are waiting.
  pub fn budget_admit(&self, pending: usize) -> usize {
    pending.min(self.budget_per_frame)
  }

  /// Check whether a single candidate chunk may be admitted this frame,
  /// given `scheduled_this_frame` jobs have already been admitted. A
  /// candidate is admissible only when `in_flight + scheduled_this_frame <
  /// budget_per_frame`.
  pub fn try_admit_one(&self, scheduled_this_frame: usize) -> MeshingResult<()> {
    let requested = self.in_flight() + scheduled_this_frame + 1;
    if requested > self.budget_per_frame {
      return Err(MeshingError::BudgetExhausted {
        requested,
        budget: self.budget_per_frame,
      });
    }
    Ok(())
  }

  /// Drain up to the per-frame budget from the queue and fire each job off
  /// to rayon's global pool via `work`. Returns immediately once the batch
  /// is submitted - the coordinator never waits here for jobs to finish;
  /// `in_flight` is what callers poll (or a fence is what they block on) to
  /// find out when the batch has actually drained. Returns the number of
  /// jobs dispatched.
  pub fn dispatch_frame<W>(&self, work: W) -> usize
  where
    W: Fn(Job) + Send + Sync + 'static,
  {
    let room = self.budget_per_frame.saturating_sub(self.in_flight());
    let mut batch = Vec::with_capacity(room);
    for _ in 0..room {
      match self.receiver.try_recv() {
        Ok(job) => batch.push(job),
        Err(_) => break,
      }
    }

    let dispatched = batch.len();
    if dispatched == 0 {
      return 0;
    }

    self.in_flight.fetch_add(dispatched, Ordering::AcqRel);
    let work = Arc::new(work);
    for job in batch {
      let work = Arc::clone(&work);
      let in_flight = Arc::clone(&self.in_flight);
      rayon::spawn(move || {
        work(job);
        in_flight.fetch_sub(1, Ordering::AcqRel);
      });
    }

    dispatched
  }

  /// Validate that `slot` is within `capacity` chunk slots before
  /// enqueuing work against it.
  pub fn validate_slot(slot: usize, capacity: usize) -> MeshingResult<()> {
    if slot >= capacity {
      return Err(MeshingError::SlotOutOfRange { slot, capacity });
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;
