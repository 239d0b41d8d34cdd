// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::BufRead;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use wpapsk::{CancelToken, Kernel, MAX_BATCH, Pmk, WorkerSlot, WorkspaceRegistry, WpapskError};

/// Reads one passphrase per line, without the line terminator.
pub fn read_wordlist(reader: impl BufRead) -> Result<Vec<Vec<u8>>> {
    reader
        .split(b'\n')
        .map(|line| {
            let mut line = line.context("Failed to read wordlist")?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            Ok(line)
        })
        .collect()
}

/// Derives a PMK for every word, `None` for empty lines. Results follow
/// input order.
///
/// Batches are dealt round-robin to `workers` threads. The first failing
/// worker cancels the others.
pub fn derive_all(
    kernel: Kernel,
    workers: usize,
    essid: &[u8],
    words: &[Vec<u8>],
) -> Result<Vec<Option<Pmk>>> {
    let batches: Vec<&[Vec<u8>]> = words.chunks(MAX_BATCH).collect();
    let workers = workers.clamp(1, batches.len().max(1));
    let mut registry = WorkspaceRegistry::new(workers, kernel);
    let cancel = CancelToken::new();

    let per_worker = thread::scope(|scope| {
        let handles: Vec<_> = registry
            .slots_mut()
            .iter_mut()
            .map(|slot| {
                let batches = &batches;
                let cancel = cancel.clone();
                scope.spawn(move || {
                    let result = run_worker(slot, workers, essid, batches, &cancel);
                    if result.is_err() {
                        cancel.cancel();
                    }
                    result
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| anyhow!("Worker thread panicked"))
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let mut results: Vec<Option<Pmk>> = vec![None; words.len()];
    let mut failure = None;

    for outcome in per_worker {
        match outcome {
            Ok(derived) => {
                for (batch, pmks) in derived {
                    let start = batch * MAX_BATCH;
                    for (offset, pmk) in pmks.into_iter().enumerate() {
                        results[start + offset] = pmk;
                    }
                }
            }
            // A cancelled worker only reports the first failure's fallout.
            Err(WpapskError::Cancelled) => {}
            Err(err) => failure = Some(err),
        }
    }

    registry.release_all();

    match failure {
        Some(err) => Err(err).context("PMK derivation failed"),
        None => Ok(results),
    }
}

/// Derivations per second, counting only slots that were derived.
pub fn rate(derived: usize, elapsed: Duration) -> f64 {
    derived as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
}

type WorkerOutput = Vec<(usize, Vec<Option<Pmk>>)>;

fn run_worker(
    slot: &mut WorkerSlot,
    workers: usize,
    essid: &[u8],
    batches: &[&[Vec<u8>]],
    cancel: &CancelToken,
) -> Result<WorkerOutput, WpapskError> {
    let index = slot.id().index();
    let workspace = slot.acquire()?;
    let mut derived = Vec::new();

    for (batch, &words) in batches.iter().enumerate().skip(index).step_by(workers) {
        workspace.stage_cancellable(essid, words, cancel)?;
        derived.push((batch, workspace.take_results()));
    }

    workspace.clear();
    Ok(derived)
}
