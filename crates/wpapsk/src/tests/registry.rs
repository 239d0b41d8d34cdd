// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use wpapsk_alloc::{AllocBehaviour, BufferAllocator};
use wpapsk_test_utils::IEEE_PASSWORD_PMK;

use crate::{BatchState, Kernel, WorkerId, WorkspaceRegistry, WpapskError};

// =============================================================================
// WorkerId
// =============================================================================

#[test]
fn test_worker_id() {
    let id = WorkerId::new(3);

    assert_eq!(id.index(), 3);
    assert_eq!(WorkerId::from(3), id);
    assert_eq!(id.to_string(), "worker-3");
}

// =============================================================================
// acquire() / workspace() / release()
// =============================================================================

#[test]
fn test_new_registry_is_unacquired() {
    let mut registry = WorkspaceRegistry::new(3, Kernel::scalar());

    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
    assert_eq!(registry.kernel(), Kernel::scalar());
    assert!(registry.slots_mut().iter().all(|slot| !slot.is_acquired()));
}

#[test]
fn test_workspace_before_acquire() {
    let mut registry = WorkspaceRegistry::new(2, Kernel::scalar());

    assert_eq!(
        registry.workspace(WorkerId::new(1)).unwrap_err(),
        WpapskError::NotAcquired { worker: 1 }
    );
}

#[test]
fn test_out_of_range_worker() {
    let mut registry = WorkspaceRegistry::new(2, Kernel::scalar());
    let expected = WpapskError::WorkerOutOfRange {
        worker: 2,
        workers: 2,
    };

    assert_eq!(registry.acquire(WorkerId::new(2)).unwrap_err(), expected);
    assert_eq!(registry.workspace(WorkerId::new(2)).unwrap_err(), expected);
    assert_eq!(registry.release(WorkerId::new(2)).unwrap_err(), expected);
}

#[test]
fn test_acquire_is_idempotent() {
    let mut registry = WorkspaceRegistry::new(1, Kernel::scalar());
    let worker = WorkerId::new(0);

    registry
        .acquire(worker)
        .expect("Failed to acquire")
        .stage(b"IEEE", &["password"])
        .expect("Failed to stage");

    // Second acquire hands back the same workspace, batch intact.
    let ws = registry.acquire(worker).expect("Failed to acquire");
    assert_eq!(ws.state(), BatchState::Complete);
    assert_eq!(ws.pmk(0).expect("derived").to_hex(), IEEE_PASSWORD_PMK);
}

#[test]
fn test_release_then_reacquire() {
    let mut registry = WorkspaceRegistry::new(1, Kernel::scalar());
    let worker = WorkerId::new(0);

    registry
        .acquire(worker)
        .expect("Failed to acquire")
        .stage(b"IEEE", &["password"])
        .expect("Failed to stage");
    registry.release(worker).expect("Failed to release");

    assert!(!registry.slot_mut(worker).expect("slot").is_acquired());
    assert!(registry.workspace(worker).is_err());

    let ws = registry.acquire(worker).expect("Failed to acquire");
    assert_eq!(ws.state(), BatchState::Empty);
    assert!(ws.is_zeroized());
}

#[test]
fn test_release_unacquired_is_noop() {
    let mut registry = WorkspaceRegistry::new(2, Kernel::scalar());

    assert!(registry.release(WorkerId::new(0)).is_ok());
    registry.release_all();
    assert!(registry.slots_mut().iter().all(|slot| !slot.is_acquired()));
}

#[test]
fn test_release_all() {
    let mut registry = WorkspaceRegistry::new(3, Kernel::scalar());
    registry.acquire(WorkerId::new(0)).expect("Failed to acquire");
    registry.acquire(WorkerId::new(2)).expect("Failed to acquire");

    registry.release_all();

    assert!(registry.slots_mut().iter().all(|slot| !slot.is_acquired()));
}

#[test]
fn test_acquire_allocation_failure_leaves_slot_empty() {
    let mut allocator = BufferAllocator::new();
    allocator.change_behaviour(AllocBehaviour::FailAtAllocate);
    let mut registry = WorkspaceRegistry::with_allocator(1, Kernel::scalar(), allocator);

    assert!(matches!(
        registry.acquire(WorkerId::new(0)),
        Err(WpapskError::Alloc(_))
    ));
    assert!(!registry.slot_mut(WorkerId::new(0)).expect("slot").is_acquired());
}

// =============================================================================
// slots_mut()
// =============================================================================

#[test]
fn test_slots_are_independent() {
    let mut registry = WorkspaceRegistry::new(2, Kernel::scalar());

    let [first, second] = registry.slots_mut() else {
        panic!("expected two slots");
    };

    assert_eq!(first.id(), WorkerId::new(0));
    assert_eq!(second.id(), WorkerId::new(1));

    first
        .acquire()
        .expect("Failed to acquire")
        .stage(b"IEEE", &["password"])
        .expect("Failed to stage");
    second
        .acquire()
        .expect("Failed to acquire")
        .stage(b"IEEE", &["other"])
        .expect("Failed to stage");

    let a = first.workspace().expect("acquired").pmk(0).cloned();
    let b = second.workspace().expect("acquired").pmk(0).cloned();
    assert_ne!(a, b);
}
