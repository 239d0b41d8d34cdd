// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-slot word buffers in lane-group layout.
//!
//! Slots are split into groups of `group` consecutive slots. Within a
//! group, word `w` of every slot is stored contiguously, so one lane word
//! load fetches word `w` for the whole group:
//!
//! ```text
//! group 0: [w0 s0..sG] [w1 s0..sG] ... [wN s0..sG]
//! group 1: [w0 sG..s2G] ...
//! ```

use wpapsk_alloc::{AlignedBuffer, AllocError, BufferAllocator};

pub(crate) struct LaneBuffer {
    words: AlignedBuffer<u32>,
    words_per_slot: usize,
    group: usize,
}

impl LaneBuffer {
    pub(crate) fn new(
        allocator: &BufferAllocator,
        slots: usize,
        words_per_slot: usize,
        group: usize,
    ) -> Result<Self, AllocError> {
        debug_assert!(group > 0 && slots % group == 0);

        let len = slots
            .checked_mul(words_per_slot)
            .ok_or(AllocError::LayoutOverflow)?;

        Ok(Self {
            words: allocator.allocate(len)?,
            words_per_slot,
            group,
        })
    }

    #[inline(always)]
    fn index(&self, slot: usize, word: usize) -> usize {
        let (group, lane) = (slot / self.group, slot % self.group);
        (group * self.words_per_slot + word) * self.group + lane
    }

    pub(crate) fn read<const W: usize>(&self, slot: usize) -> [u32; W] {
        debug_assert!(W <= self.words_per_slot);
        core::array::from_fn(|word| self.words[self.index(slot, word)])
    }

    pub(crate) fn write(&mut self, slot: usize, first_word: usize, values: &[u32]) {
        debug_assert!(first_word + values.len() <= self.words_per_slot);

        for (offset, value) in values.iter().enumerate() {
            let index = self.index(slot, first_word + offset);
            self.words[index] = *value;
        }
    }

    /// Words of one lane group, word-major.
    pub(crate) fn group(&self, group: usize) -> &[u32] {
        let len = self.words_per_slot * self.group;
        &self.words[group * len..(group + 1) * len]
    }

    pub(crate) fn group_mut(&mut self, group: usize) -> &mut [u32] {
        let len = self.words_per_slot * self.group;
        &mut self.words[group * len..(group + 1) * len]
    }

    pub(crate) fn zeroize(&mut self) {
        self.words.zeroize();
    }

    pub(crate) fn is_zeroized(&self) -> bool {
        self.words.is_zeroized()
    }
}
