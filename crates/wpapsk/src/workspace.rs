// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-worker derivation arena.
//!
//! A `Workspace` owns every buffer one batch needs, allocated once with
//! the kernel's lane-group layout and reused for every batch. It is never
//! shared: `&mut Workspace` is what makes batches on one worker sequential.

use core::fmt;

use wpapsk_alloc::{AlignedBuffer, BufferAllocator};
use wpapsk_sha1::{BLOCK_WORDS, STATE_WORDS};
use zeroize::Zeroize;

use crate::cancel::CancelToken;
use crate::candidate::{CandidateSlot, Essid, SlotMask};
use crate::consts::ROUND_MESSAGE_BITS;
use crate::error::WpapskError;
use crate::hmac::HmacPads;
use crate::kernel::{GroupWords, Kernel};
use crate::lane_buffer::LaneBuffer;
use crate::pmk::Pmk;

/// Where a workspace is in its batch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    /// Nothing staged since allocation or [`Workspace::clear`].
    Empty,
    /// Slots filled, derivation not started.
    Staged,
    /// HMAC pads computed for every active slot.
    Precomputed,
    /// Every active slot derived.
    Complete,
    /// Stopped by a [`CancelToken`]; slots derived before the stop keep
    /// their PMKs.
    Cancelled,
    /// Results moved out with [`Workspace::take_results`].
    Consumed,
}

/// PBKDF2 blocks and how many of their words land in the PMK.
const PMK_BLOCKS: [(u32, usize, usize); 2] = [(1, 0, 5), (2, 5, 3)];

/// Buffers for one worker.
pub struct Workspace {
    kernel: Kernel,
    pub(crate) slots: AlignedBuffer<CandidateSlot>,
    message: LaneBuffer,
    inner_chain: LaneBuffer,
    outer_chain: LaneBuffer,
    accum: LaneBuffer,
    pmk_words: LaneBuffer,
    outputs: AlignedBuffer<Pmk>,
    pub(crate) active: SlotMask,
    pub(crate) truncated: SlotMask,
    computed: SlotMask,
    pub(crate) staged: usize,
    pub(crate) state: BatchState,
}

impl Workspace {
    /// Allocates a workspace for `kernel`.
    pub fn new(kernel: Kernel) -> Result<Self, WpapskError> {
        Self::with_allocator(kernel, &BufferAllocator::new())
    }

    /// Allocates a workspace for `kernel` from `allocator`.
    pub fn with_allocator(
        kernel: Kernel,
        allocator: &BufferAllocator,
    ) -> Result<Self, WpapskError> {
        let capacity = kernel.capacity();
        let group = kernel.lane_group();

        let mut workspace = Self {
            kernel,
            slots: allocator.allocate(capacity)?,
            message: LaneBuffer::new(allocator, capacity, BLOCK_WORDS, group)?,
            inner_chain: LaneBuffer::new(allocator, capacity, STATE_WORDS, group)?,
            outer_chain: LaneBuffer::new(allocator, capacity, STATE_WORDS, group)?,
            accum: LaneBuffer::new(allocator, capacity, STATE_WORDS, group)?,
            pmk_words: LaneBuffer::new(allocator, capacity, 8, group)?,
            outputs: allocator.allocate(capacity)?,
            active: SlotMask::EMPTY,
            truncated: SlotMask::EMPTY,
            computed: SlotMask::EMPTY,
            staged: 0,
            state: BatchState::Empty,
        };
        workspace.preset_padding();

        Ok(workspace)
    }

    /// Kernel this workspace was laid out for.
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// Slots allocated: a full batch rounded up to whole lane groups.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Current batch state.
    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Passphrases passed to the last stage call, empty ones included.
    pub fn staged_len(&self) -> usize {
        self.staged
    }

    /// Staged slot `slot`, if it is within the last batch.
    pub fn slot(&self, slot: usize) -> Option<&CandidateSlot> {
        (slot < self.staged).then(|| &self.slots[slot])
    }

    /// PMK derived for `slot` in the current batch.
    ///
    /// `None` for empty slots, slots a cancellation skipped, and after
    /// [`Workspace::take_results`].
    pub fn pmk(&self, slot: usize) -> Option<&Pmk> {
        match self.state {
            BatchState::Complete | BatchState::Cancelled if self.computed.contains(slot) => {
                Some(&self.outputs[slot])
            }
            _ => None,
        }
    }

    /// Output region of the last batch, one entry per staged passphrase.
    /// Slots that were not derived read as zero.
    pub fn outputs(&self) -> &[Pmk] {
        &self.outputs[..self.staged]
    }

    /// Slots derived in the current batch.
    pub fn computed(&self) -> SlotMask {
        self.computed
    }

    /// Moves the batch's results out, one entry per staged passphrase, and
    /// zeroizes the output region.
    pub fn take_results(&mut self) -> Vec<Option<Pmk>> {
        let results = (0..self.staged)
            .map(|slot| self.pmk(slot).cloned())
            .collect();

        self.outputs.zeroize();
        if self.staged > 0 {
            self.state = BatchState::Consumed;
        }

        results
    }

    /// Zeroizes every buffer and returns to [`BatchState::Empty`].
    pub fn clear(&mut self) {
        self.slots.zeroize();
        self.outputs.zeroize();
        self.wipe_working_buffers();

        self.active = SlotMask::EMPTY;
        self.truncated = SlotMask::EMPTY;
        self.computed = SlotMask::EMPTY;
        self.staged = 0;
        self.state = BatchState::Empty;
    }

    /// Zeroizes and frees the buffers.
    pub fn release(self) {
        drop(self);
    }

    /// Whether every secret-bearing buffer is zero, padding aside.
    pub fn is_zeroized(&self) -> bool {
        self.slots.is_zeroized()
            && self.inner_chain.is_zeroized()
            && self.outer_chain.is_zeroized()
            && self.accum.is_zeroized()
            && self.pmk_words.is_zeroized()
            && self.outputs.is_zeroized()
            && (0..self.capacity()).all(|slot| self.message.read::<5>(slot) == [0; 5])
    }

    /// Writes the fixed tail of every round message: the `0x80` marker after
    /// the 20-byte digest and the 672-bit message length.
    fn preset_padding(&mut self) {
        for slot in 0..self.capacity() {
            self.message.write(slot, STATE_WORDS, &[0x80000000]);
            self.message.write(slot, BLOCK_WORDS - 1, &[ROUND_MESSAGE_BITS]);
        }
    }

    /// Derives every active slot for `essid`.
    ///
    /// Expects staged slots and zeroed working buffers. Working buffers are
    /// wiped again before returning, whether the batch completed or not.
    pub(crate) fn run_batch(
        &mut self,
        essid: Essid<'_>,
        cancel: Option<&CancelToken>,
    ) -> Result<(), WpapskError> {
        debug_assert_eq!(self.state, BatchState::Staged);

        for slot in self.active.iter() {
            let pads = HmacPads::new(self.slots[slot].as_bytes());
            self.inner_chain.write(slot, 0, pads.inner());
            self.outer_chain.write(slot, 0, pads.outer());
        }
        self.state = BatchState::Precomputed;

        let group = self.kernel.lane_group();
        for index in 0..self.capacity() / group {
            if !self.active.any_in(index * group, group) {
                continue;
            }

            if cancel.is_some_and(CancelToken::poll) {
                self.wipe_working_buffers();
                self.state = BatchState::Cancelled;
                return Err(WpapskError::Cancelled);
            }

            self.derive_group(index, essid);
        }

        self.wipe_working_buffers();
        self.state = BatchState::Complete;
        Ok(())
    }

    fn derive_group(&mut self, index: usize, essid: Essid<'_>) {
        let group = self.kernel.lane_group();
        let active = self.active;
        let lanes = (index * group..(index + 1) * group).filter(move |slot| active.contains(*slot));

        for (block_index, first_word, kept) in PMK_BLOCKS {
            for slot in lanes.clone() {
                let pads = HmacPads::from_chains(
                    self.inner_chain.read(slot),
                    self.outer_chain.read(slot),
                );
                let mut u1 = pads.first_iteration(essid.as_bytes(), block_index);

                self.message.write(slot, 0, &u1);
                self.accum.write(slot, 0, &u1);
                u1.zeroize();
            }

            self.kernel.run_rounds(GroupWords {
                inner: self.inner_chain.group(index),
                outer: self.outer_chain.group(index),
                message: self.message.group_mut(index),
                accum: self.accum.group_mut(index),
            });

            for slot in lanes.clone() {
                let mut t: [u32; STATE_WORDS] = self.accum.read(slot);
                self.pmk_words.write(slot, first_word, &t[..kept]);
                t.zeroize();
            }
        }

        for slot in lanes {
            let mut words: [u32; 8] = self.pmk_words.read(slot);
            self.outputs[slot] = Pmk::from_be_words(&words);
            self.computed.insert(slot);
            words.zeroize();
        }
    }

    fn wipe_working_buffers(&mut self) {
        self.message.zeroize();
        self.inner_chain.zeroize();
        self.outer_chain.zeroize();
        self.accum.zeroize();
        self.pmk_words.zeroize();
        self.preset_padding();
    }
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workspace")
            .field("kernel", &self.kernel)
            .field("capacity", &self.capacity())
            .field("state", &self.state)
            .field("active", &self.active)
            .field("computed", &self.computed)
            .field("slots", &"REDACTED")
            .finish()
    }
}
