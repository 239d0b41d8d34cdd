// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for wpapsk.

use thiserror::Error;

use wpapsk_alloc::AllocError;
use wpapsk_sha1::Backend;

/// Error type for PMK batch derivation.
///
/// None of these are cryptographic failures: derivation itself cannot fail.
/// They report precondition violations, resource exhaustion and
/// cancellation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WpapskError {
    /// Worker identifier beyond the registry's worker count.
    #[error("Worker {worker} is out of range: registry holds {workers} workers")]
    WorkerOutOfRange {
        /// Offending worker index.
        worker: usize,
        /// Workers in the registry.
        workers: usize,
    },

    /// The worker's workspace was never acquired or was released.
    #[error("Worker {worker} has no workspace: acquire it first")]
    NotAcquired {
        /// Worker index.
        worker: usize,
    },

    /// More passphrases than slots in a batch.
    #[error("Too many candidates: {given} staged, at most {max}")]
    TooManyCandidates {
        /// Passphrases passed in.
        given: usize,
        /// Batch capacity.
        max: usize,
    },

    /// ESSID longer than 32 bytes.
    #[error("ESSID too long: {len} bytes, at most {max}")]
    EssidTooLong {
        /// ESSID length in bytes.
        len: usize,
        /// Longest accepted ESSID.
        max: usize,
    },

    /// The requested backend cannot run on this CPU or was compiled out.
    #[error("Backend {backend} is not available on this CPU")]
    BackendUnavailable {
        /// Requested backend.
        backend: Backend,
    },

    /// A configuration value could not be parsed.
    #[error("Invalid configuration: {key}={value:?}")]
    InvalidConfig {
        /// Setting name.
        key: &'static str,
        /// Rejected value.
        value: String,
    },

    /// Character outside the crypt-64 alphabet.
    #[error("Invalid crypt-64 character at position {position}")]
    InvalidCrypt64Char {
        /// Byte offset in the input.
        position: usize,
    },

    /// Crypt-64 input length that no byte string encodes to.
    #[error("Invalid crypt-64 length: {len} characters")]
    InvalidCrypt64Length {
        /// Input length.
        len: usize,
    },

    /// Decoded PMK is not 32 bytes long.
    #[error("Invalid PMK length: expected 32 bytes, got {len}")]
    InvalidPmkLength {
        /// Decoded length.
        len: usize,
    },

    /// The batch was cancelled before every slot was derived.
    #[error("Batch cancelled")]
    Cancelled,

    /// Workspace allocation failed.
    #[error(transparent)]
    Alloc(#[from] AllocError),
}
