// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Several workers deriving batches at once, each on its own workspace.

use std::thread;

use wpapsk::{CancelToken, Kernel, MAX_BATCH, WorkspaceRegistry, WpapskError};
use wpapsk_test_utils::reference_pmk;

const ESSID: &[u8] = b"concurrent";
const WORKERS: usize = 4;

fn wordlist() -> Vec<String> {
    (0..WORKERS * MAX_BATCH + 3)
        .map(|i| format!("candidate-{i:03}"))
        .collect()
}

#[test]
fn test_workers_derive_disjoint_batches() {
    let words = wordlist();
    let chunks: Vec<&[String]> = words.chunks(MAX_BATCH).collect();
    let mut registry = WorkspaceRegistry::new(WORKERS, Kernel::detect());

    let results: Vec<Vec<(usize, [u8; 32])>> = thread::scope(|scope| {
        let handles: Vec<_> = registry
            .slots_mut()
            .iter_mut()
            .enumerate()
            .map(|(worker, slot)| {
                let chunks = &chunks;
                scope.spawn(move || -> Result<Vec<(usize, [u8; 32])>, WpapskError> {
                    let ws = slot.acquire()?;
                    let mut out = Vec::new();

                    // Worker w takes chunks w, w + WORKERS, ...
                    let assigned = chunks.iter().enumerate().skip(worker).step_by(WORKERS);
                    for (index, &chunk) in assigned {
                        ws.stage(ESSID, chunk)?;
                        for (offset, pmk) in ws.take_results().into_iter().enumerate() {
                            let pmk = pmk.expect("non-empty candidate");
                            out.push((index * MAX_BATCH + offset, *pmk.as_bytes()));
                        }
                    }

                    Ok(out)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .expect("worker panicked")
                    .expect("worker failed")
            })
            .collect()
    });

    let mut derived: Vec<(usize, [u8; 32])> = results.into_iter().flatten().collect();
    derived.sort_by_key(|(index, _)| *index);

    assert_eq!(derived.len(), words.len());
    for (index, pmk) in derived {
        assert_eq!(pmk, reference_pmk(words[index].as_bytes(), ESSID));
    }

    registry.release_all();
    assert!(registry.slots_mut().iter().all(|slot| !slot.is_acquired()));
}

#[test]
fn test_cancel_stops_every_worker() {
    let token = CancelToken::new();
    token.cancel();

    let mut registry = WorkspaceRegistry::new(WORKERS, Kernel::detect());

    thread::scope(|scope| {
        for slot in registry.slots_mut() {
            let token = token.clone();
            scope.spawn(move || {
                let ws = slot.acquire().expect("Failed to acquire");
                let result = ws.stage_cancellable(ESSID, &["one", "two"], &token);

                assert_eq!(result.unwrap_err(), WpapskError::Cancelled);
                assert!(ws.pmk(0).is_none());
            });
        }
    });
}
