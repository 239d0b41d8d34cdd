// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(any(test, feature = "test-utils"))]
use std::sync::atomic::AtomicUsize;

/// Test behaviour for cancelling at a chosen point in a batch.
///
/// Only available with the `test-utils` feature. Counts the polls the
/// kernel makes, one per active lane group.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CancelBehaviour {
    /// Normal behaviour - cancelled only by [`CancelToken::cancel`].
    #[default]
    None,
    /// The first `n` polls pass, the next one cancels the token.
    CancelAfterPolls(usize),
}

/// Shared cancellation flag for in-flight batches.
///
/// Clones observe the same flag. The kernel polls it before each lane
/// group, so cancellation latency is one group's worth of rounds.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: CancelBehaviour,
    #[cfg(any(test, feature = "test-utils"))]
    polls: Arc<AtomicUsize>,
}

impl CancelToken {
    /// Creates an unset token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Clears the flag so the token can be reused.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Release);
    }

    /// Change the cancellation behaviour and reset the poll count.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: CancelBehaviour) {
        self.behaviour = behaviour;
        self.polls.store(0, Ordering::Release);
    }

    /// Kernel-side check before a lane group.
    pub(crate) fn poll(&self) -> bool {
        #[cfg(any(test, feature = "test-utils"))]
        if let CancelBehaviour::CancelAfterPolls(n) = self.behaviour {
            if self.polls.fetch_add(1, Ordering::AcqRel) >= n {
                self.cancel();
            }
        }

        self.is_cancelled()
    }
}
