use std::sync::Arc;
use std::time::{Duration, Instant};

use super::*;

#[test]
fn new_registry_starts_at_epoch_zero() {
  let registry = FenceRegistry::new(4);
  assert_eq!(registry.tail(0).unwrap(), 0);
}

#[test]
fn out_of_range_slot_errors() {
  let registry = FenceRegistry::new(2);
  assert!(matches!(
    registry.tail(5),
    Err(MeshingError::SlotOutOfRange { slot: 5, capacity: 2 })
  ));
}

#[test]
fn try_complete_returns_false_before_the_completion_signal_arrives() {
  let registry = FenceRegistry::new(1);
  registry.update(0, 1).unwrap();
  assert!(!registry.try_complete(0, 1).unwrap());
  assert_eq!(registry.tail(0).unwrap(), 1);
}

#[test]
fn try_complete_succeeds_once_the_job_signals_done() {
  let registry = FenceRegistry::new(1);
  registry.update(0, 1).unwrap();
  registry.signal_complete(0, 1).unwrap();
  assert!(registry.try_complete(0, 1).unwrap());
  assert_eq!(registry.tail(0).unwrap(), COMPLETED);
}

#[test]
fn require_ready_passes_once_matching_work_is_signaled_complete() {
  let registry = FenceRegistry::new(1);
  assert!(registry.require_ready(0, 0).is_ok());
  registry.update(0, 1).unwrap();
  assert!(matches!(
    registry.require_ready(0, 2),
    Err(MeshingError::FenceNotReady { tail: 1, required: 2 })
  ));

  registry.signal_complete(0, 1).unwrap();
  assert!(registry.try_complete(0, 1).unwrap());
  assert!(registry.require_ready(0, 100).is_ok());
}

#[test]
fn require_ready_passes_unconditionally_once_completed() {
  let registry = FenceRegistry::new(1);
  registry.complete_and_reset(0).unwrap();
  assert!(registry.require_ready(0, 100).is_ok());
}

#[test]
fn complete_and_reset_sets_sentinel() {
  let registry = FenceRegistry::new(1);
  registry.complete_and_reset(0).unwrap();
  assert_eq!(registry.tail(0).unwrap(), COMPLETED);
}

#[test]
fn complete_and_reset_is_a_no_op_when_nothing_is_outstanding() {
  let registry = FenceRegistry::new(1);
  let start = Instant::now();
  registry.complete_and_reset(0).unwrap();
  assert!(start.elapsed() < Duration::from_millis(100));
}

#[test]
fn complete_and_reset_blocks_until_the_scheduled_job_signals_done() {
  let registry = Arc::new(FenceRegistry::new(1));
  registry.update(0, 1).unwrap();

  let signaler = Arc::clone(&registry);
  let handle = std::thread::spawn(move || {
    std::thread::sleep(Duration::from_millis(30));
    signaler.signal_complete(0, 1).unwrap();
  });

  let start = Instant::now();
  registry.complete_and_reset(0).unwrap();
  assert!(start.elapsed() >= Duration::from_millis(25));
  assert_eq!(registry.tail(0).unwrap(), COMPLETED);
  handle.join().unwrap();
}

#[test]
fn try_complete_after_reset_is_idempotent() {
  let registry = FenceRegistry::new(1);
  registry.complete_and_reset(0).unwrap();
  assert!(registry.try_complete(0, 1).unwrap());
  assert_eq!(registry.tail(0).unwrap(), COMPLETED);
}
