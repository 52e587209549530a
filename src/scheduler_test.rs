use std::time::Duration;

use super::*;

/// `dispatch_frame` fires jobs onto rayon's pool and returns immediately
/// (per its contract); these tests synchronize on a channel rather than
/// asserting on `in_flight`/side effects right after the call returns,
/// since that would race the worker threads.
fn wait_for_all(rx: &crossbeam_channel::Receiver<()>, count: usize) {
  for _ in 0..count {
    rx.recv_timeout(Duration::from_secs(5)).expect("job did not complete in time");
  }
}

#[test]
fn budget_admit_caps_at_budget() {
  let scheduler = Scheduler::new(4);
  assert_eq!(scheduler.budget_admit(10), 4);
  assert_eq!(scheduler.budget_admit(2), 2);
}

#[test]
fn dispatch_frame_respects_budget_and_drains_queue() {
  let scheduler = Scheduler::new(2);
  for slot in 0..5 {
    scheduler.enqueue(Job {
      chunk_slot: slot,
      epoch: 1,
      kind: JobKind::Extract,
    });
  }

  let (tx, rx) = crossbeam_channel::unbounded();
  let dispatched = scheduler.dispatch_frame(move |_job| {
    let _ = tx.send(());
  });
  assert_eq!(dispatched, 2);
  wait_for_all(&rx, dispatched);
  while scheduler.in_flight() > 0 {
    std::thread::yield_now();
  }

  // Second frame drains the next batch.
  let (tx2, rx2) = crossbeam_channel::unbounded();
  let dispatched2 = scheduler.dispatch_frame(move |_job| {
    let _ = tx2.send(());
  });
  assert_eq!(dispatched2, 2);
  wait_for_all(&rx2, dispatched2);
}

#[test]
fn dispatch_frame_on_empty_queue_returns_zero() {
  let scheduler = Scheduler::new(4);
  let dispatched = scheduler.dispatch_frame(|_job| {});
  assert_eq!(dispatched, 0);
}

#[test]
fn try_admit_one_rejects_once_budget_is_spoken_for() {
  let scheduler = Scheduler::new(2);
  assert!(scheduler.try_admit_one(0).is_ok());
  assert!(scheduler.try_admit_one(1).is_ok());
  assert!(matches!(
    scheduler.try_admit_one(2),
    Err(MeshingError::BudgetExhausted { requested: 3, budget: 2 })
  ));
}

#[test]
fn validate_slot_rejects_out_of_range() {
  assert!(Scheduler::validate_slot(3, 3).is_err());
  assert!(Scheduler::validate_slot(2, 3).is_ok());
}
