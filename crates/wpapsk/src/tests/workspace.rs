// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use wpapsk_alloc::{AllocBehaviour, AllocError, BufferAllocator};
use wpapsk_test_utils::{IEEE_PASSWORD_PMK, reference_pmk};

use crate::{BatchState, Kernel, MAX_BATCH, Workspace, WpapskError};

// =============================================================================
// new(), with_allocator()
// =============================================================================

#[test]
fn test_new_workspace_is_empty_and_zeroized() {
    let ws = Workspace::new(Kernel::detect()).expect("Failed to allocate workspace");

    assert_eq!(ws.state(), BatchState::Empty);
    assert_eq!(ws.capacity(), ws.kernel().capacity());
    assert!(ws.capacity() >= MAX_BATCH);
    assert_eq!(ws.staged_len(), 0);
    assert!(ws.is_zeroized());
}

#[test]
fn test_allocation_failure_is_recoverable() {
    let mut allocator = BufferAllocator::new();
    allocator.change_behaviour(AllocBehaviour::FailAtAllocate);

    let result = Workspace::with_allocator(Kernel::scalar(), &allocator);

    assert!(matches!(
        result,
        Err(WpapskError::Alloc(AllocError::OutOfMemory { .. }))
    ));
}

#[test]
fn test_partial_allocation_failure() {
    // Every buffer after the third fails; the first three are freed on return.
    let mut allocator = BufferAllocator::new();
    allocator.change_behaviour(AllocBehaviour::FailAfter(3));

    let result = Workspace::with_allocator(Kernel::scalar(), &allocator);
    assert!(matches!(result, Err(WpapskError::Alloc(_))));

    allocator.change_behaviour(AllocBehaviour::None);
    assert!(Workspace::with_allocator(Kernel::scalar(), &allocator).is_ok());
}

// =============================================================================
// Batch state machine
// =============================================================================

#[test]
fn test_state_cycle() {
    let mut ws = Workspace::new(Kernel::scalar()).expect("Failed to allocate workspace");
    assert_eq!(ws.state(), BatchState::Empty);

    ws.stage(b"IEEE", &["password"]).expect("Failed to stage");
    assert_eq!(ws.state(), BatchState::Complete);
    assert!(ws.computed().contains(0));

    let results = ws.take_results();
    assert_eq!(ws.state(), BatchState::Consumed);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].as_ref().map(|p| p.to_hex()).as_deref(), Some(IEEE_PASSWORD_PMK));
    assert!(ws.pmk(0).is_none());
    assert!(ws.outputs()[0].is_zero());

    ws.clear();
    assert_eq!(ws.state(), BatchState::Empty);
    assert!(ws.is_zeroized());
}

#[test]
fn test_take_results_marks_empty_slots() {
    let mut ws = Workspace::new(Kernel::detect()).expect("Failed to allocate workspace");
    ws.stage(b"results", &["one", "", "three"]).expect("Failed to stage");

    let results = ws.take_results();

    assert_eq!(results.len(), 3);
    assert!(results[0].is_some());
    assert!(results[1].is_none());
    assert_eq!(
        results[2].as_ref().map(|p| *p.as_bytes()),
        Some(reference_pmk(b"three", b"results"))
    );
}

#[test]
fn test_working_buffers_wiped_after_batch() {
    let mut ws = Workspace::new(Kernel::detect()).expect("Failed to allocate workspace");
    ws.stage(b"wipe", &["secret-passphrase"]).expect("Failed to stage");

    ws.clear();
    assert!(ws.is_zeroized());

    // Padding survives the wipe: the next batch is still correct.
    ws.stage(b"wipe", &["secret-passphrase"]).expect("Failed to stage");
    assert_eq!(
        ws.pmk(0).expect("derived").as_bytes(),
        &reference_pmk(b"secret-passphrase", b"wipe")
    );
}

// =============================================================================
// derive_single()
// =============================================================================

#[test]
fn test_derive_single_empty_passphrase() {
    let mut ws = Workspace::new(Kernel::detect()).expect("Failed to allocate workspace");

    let pmk = ws.derive_single(b"IEEE", "").expect("derive");

    assert_eq!(pmk.as_bytes(), &reference_pmk(b"", b"IEEE"));
    assert!(!pmk.is_zero());
    assert_eq!(ws.state(), BatchState::Empty);
    assert!(ws.is_zeroized());
}

#[test]
fn test_derive_single_truncates() {
    let mut ws = Workspace::new(Kernel::scalar()).expect("Failed to allocate workspace");
    let long = [b'q'; 80];

    let pmk = ws.derive_single(b"single", &long[..]).expect("derive");

    assert_eq!(pmk.as_bytes(), &reference_pmk(&long[..63], b"single"));
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_debug_redacts_slots() {
    let mut ws = Workspace::new(Kernel::scalar()).expect("Failed to allocate workspace");
    ws.stage(b"debug", &["do-not-print-me"]).expect("Failed to stage");

    let debug = format!("{:?}", ws);

    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("do-not-print-me"));
    assert!(debug.contains("Complete"));
}
