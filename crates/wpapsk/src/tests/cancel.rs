// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use wpapsk_test_utils::{IEEE_PASSWORD_PMK, reference_pmk};

use crate::{BatchState, CancelBehaviour, CancelToken, Kernel, MAX_BATCH, Workspace, WpapskError};

const WORDS: [&str; MAX_BATCH] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth",
];

#[test]
fn test_token_clones_share_flag() {
    let token = CancelToken::new();
    let clone = token.clone();
    assert!(!clone.is_cancelled());

    token.cancel();
    assert!(clone.is_cancelled());

    clone.reset();
    assert!(!token.is_cancelled());
}

#[test]
fn test_uncancelled_token_completes() {
    let token = CancelToken::new();
    let mut ws = Workspace::new(Kernel::detect()).expect("Failed to allocate workspace");

    ws.stage_cancellable(b"IEEE", &["password"], &token)
        .expect("Failed to stage");

    assert_eq!(ws.state(), BatchState::Complete);
    assert_eq!(ws.pmk(0).expect("derived").to_hex(), IEEE_PASSWORD_PMK);
}

#[test]
fn test_cancelled_before_first_group() {
    let token = CancelToken::new();
    token.cancel();

    let mut ws = Workspace::new(Kernel::detect()).expect("Failed to allocate workspace");
    let result = ws.stage_cancellable(b"IEEE", &["password", "other"], &token);

    assert_eq!(result.unwrap_err(), WpapskError::Cancelled);
    assert_eq!(ws.state(), BatchState::Cancelled);
    assert!(ws.pmk(0).is_none());
    assert!(ws.outputs().iter().all(|pmk| pmk.is_zero()));
}

#[test]
fn test_empty_batch_ignores_cancellation() {
    // No active group, nothing to poll for.
    let token = CancelToken::new();
    token.cancel();

    let mut ws = Workspace::new(Kernel::scalar()).expect("Failed to allocate workspace");
    ws.stage_cancellable(b"IEEE", &["", ""], &token)
        .expect("Failed to stage");

    assert_eq!(ws.state(), BatchState::Complete);
}

#[test]
fn test_workspace_reusable_after_cancel() {
    let token = CancelToken::new();
    token.cancel();

    let mut ws = Workspace::new(Kernel::scalar()).expect("Failed to allocate workspace");
    assert!(ws.stage_cancellable(b"IEEE", &["password"], &token).is_err());

    token.reset();
    ws.stage_cancellable(b"IEEE", &["password"], &token)
        .expect("Failed to stage");

    assert_eq!(ws.pmk(0).expect("derived").to_hex(), IEEE_PASSWORD_PMK);
}

// =============================================================================
// Cancellation mid-batch
// =============================================================================

#[test]
fn test_cancel_after_first_group_keeps_its_pmk() {
    // Scalar kernel: one slot per lane group, one poll per slot.
    let mut token = CancelToken::new();
    token.change_behaviour(CancelBehaviour::CancelAfterPolls(1));

    let mut ws = Workspace::new(Kernel::scalar()).expect("Failed to allocate workspace");
    let result = ws.stage_cancellable(b"partial", &WORDS, &token);

    assert_eq!(result.unwrap_err(), WpapskError::Cancelled);
    assert_eq!(ws.state(), BatchState::Cancelled);
    assert_eq!(ws.computed().iter().collect::<Vec<_>>(), vec![0]);
    assert_eq!(
        ws.pmk(0).expect("derived before the stop").as_bytes(),
        &reference_pmk(b"first", b"partial")
    );

    for slot in 1..MAX_BATCH {
        assert!(ws.pmk(slot).is_none());
        assert!(ws.outputs()[slot].is_zero());
    }
}

#[test]
fn test_cancel_after_polls_counts_only_active_groups() {
    let mut token = CancelToken::new();
    token.change_behaviour(CancelBehaviour::CancelAfterPolls(2));

    let mut ws = Workspace::new(Kernel::scalar()).expect("Failed to allocate workspace");
    let batch = [Some("a"), None, None, Some("b"), None, Some("c")];
    let result = ws.stage_cancellable(b"gaps", &batch, &token);

    assert_eq!(result.unwrap_err(), WpapskError::Cancelled);
    assert_eq!(ws.computed().iter().collect::<Vec<_>>(), vec![0, 3]);
    assert_eq!(
        ws.pmk(3).expect("derived before the stop").as_bytes(),
        &reference_pmk(b"b", b"gaps")
    );
    assert!(ws.pmk(5).is_none());
}

#[test]
fn test_cancel_after_polls_beyond_batch_completes() {
    let mut token = CancelToken::new();
    token.change_behaviour(CancelBehaviour::CancelAfterPolls(MAX_BATCH));

    let mut ws = Workspace::new(Kernel::scalar()).expect("Failed to allocate workspace");
    ws.stage_cancellable(b"partial", &WORDS, &token)
        .expect("Failed to stage");

    assert_eq!(ws.state(), BatchState::Complete);
    assert_eq!(ws.computed().count(), MAX_BATCH);
    assert!(!token.is_cancelled());
}
