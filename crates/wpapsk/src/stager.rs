// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Candidate staging: loads a batch into a workspace and derives it.

use crate::cancel::CancelToken;
use crate::candidate::{Essid, Passphrase, SlotMask};
use crate::consts::MAX_BATCH;
use crate::error::WpapskError;
use crate::pmk::Pmk;
use crate::workspace::{BatchState, Workspace};

/// Summary of a staged batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagedBatch {
    len: usize,
    active: SlotMask,
    truncated: SlotMask,
}

impl StagedBatch {
    /// Passphrases passed in, empty ones included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no passphrase was passed in.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots holding a non-empty passphrase. These are the slots derived.
    pub fn active(&self) -> SlotMask {
        self.active
    }

    /// Slots whose passphrase was cut to 63 bytes.
    pub fn truncated(&self) -> SlotMask {
        self.truncated
    }
}

impl Workspace {
    /// Stages up to [`MAX_BATCH`] passphrases and derives their PMKs.
    ///
    /// Passphrase `i` goes to slot `i`. Passphrases over 63 bytes are
    /// truncated. Empty and absent passphrases leave their slot empty: it is
    /// not derived and its output stays zero. Returns once every active slot
    /// is derived; read results with [`Workspace::pmk`].
    pub fn stage<P: Passphrase>(
        &mut self,
        essid: &[u8],
        passphrases: &[P],
    ) -> Result<StagedBatch, WpapskError> {
        self.stage_inner(essid, passphrases, None)
    }

    /// Like [`Workspace::stage`], polling `cancel` before each lane group.
    ///
    /// On cancellation returns [`WpapskError::Cancelled`]; groups derived
    /// before the stop keep their PMKs.
    pub fn stage_cancellable<P: Passphrase>(
        &mut self,
        essid: &[u8],
        passphrases: &[P],
        cancel: &CancelToken,
    ) -> Result<StagedBatch, WpapskError> {
        self.stage_inner(essid, passphrases, Some(cancel))
    }

    /// Derives one PMK, even for an empty passphrase.
    ///
    /// Uses slot 0 and leaves the workspace cleared.
    pub fn derive_single<P: Passphrase + ?Sized>(
        &mut self,
        essid: &[u8],
        passphrase: &P,
    ) -> Result<Pmk, WpapskError> {
        let essid = Essid::new(essid)?;

        self.clear();
        if self.slots[0].fill(passphrase.passphrase_bytes()) {
            self.truncated.insert(0);
        }
        self.active.insert(0);
        self.staged = 1;
        self.state = BatchState::Staged;

        self.run_batch(essid, None)?;

        let pmk = self.outputs()[0].clone();
        self.clear();

        Ok(pmk)
    }

    fn stage_inner<P: Passphrase>(
        &mut self,
        essid: &[u8],
        passphrases: &[P],
        cancel: Option<&CancelToken>,
    ) -> Result<StagedBatch, WpapskError> {
        if passphrases.len() > MAX_BATCH {
            return Err(WpapskError::TooManyCandidates {
                given: passphrases.len(),
                max: MAX_BATCH,
            });
        }
        let essid = Essid::new(essid)?;

        self.clear();

        for (slot, passphrase) in passphrases.iter().enumerate() {
            let bytes = passphrase.passphrase_bytes();
            if bytes.is_empty() {
                continue;
            }

            if self.slots[slot].fill(bytes) {
                self.truncated.insert(slot);
            }
            self.active.insert(slot);
        }

        self.staged = passphrases.len();
        self.state = BatchState::Staged;

        let batch = StagedBatch {
            len: self.staged,
            active: self.active,
            truncated: self.truncated,
        };

        self.run_batch(essid, cancel)?;

        Ok(batch)
    }
}
