// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-1 with resumable chaining value.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::compress::compress;
use crate::consts::{BLOCK_LEN, BLOCK_WORDS, DIGEST_LEN, H0, STATE_WORDS};

/// SHA-1 streaming state.
///
/// Zeroized on drop, including the partial block buffer.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sha1State {
    h: [u32; STATE_WORDS],
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    total_len: u64,
}

impl Default for Sha1State {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Sha1State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sha1State")
            .field("h", &"REDACTED")
            .field("buffer_len", &self.buffer_len)
            .field("total_len", &self.total_len)
            .finish()
    }
}

impl Sha1State {
    /// Create new SHA-1 state seeded with H(0)
    pub fn new() -> Self {
        Self::resume(H0, 0)
    }

    /// Resume from a chaining value after `processed_len` bytes.
    ///
    /// `processed_len` must be a multiple of [`BLOCK_LEN`]: a chaining value
    /// only exists at block boundaries. It feeds the length field of the
    /// final padding.
    pub fn resume(h: [u32; STATE_WORDS], processed_len: u64) -> Self {
        debug_assert_eq!(processed_len % BLOCK_LEN as u64, 0);

        Self {
            h,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: processed_len,
        }
    }

    /// Current chaining value. Only meaningful at a block boundary.
    pub fn chaining_value(&self) -> [u32; STATE_WORDS] {
        self.h
    }

    /// Update state with data
    pub fn update(&mut self, data: &[u8]) {
        let mut offset = 0;
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        // Fill buffer if partially filled
        if self.buffer_len > 0 {
            let space = BLOCK_LEN - self.buffer_len;
            let copy_len = core::cmp::min(space, data.len());

            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            offset = copy_len;

            if self.buffer_len == BLOCK_LEN {
                let mut block = words_from_bytes(&self.buffer);
                compress(&mut self.h, &block);
                block.zeroize();
                self.buffer_len = 0;
            }
        }

        // Process full blocks
        for chunk in data[offset..].chunks_exact(BLOCK_LEN) {
            let mut block = words_from_bytes(chunk);
            compress(&mut self.h, &block);
            block.zeroize();
            offset += BLOCK_LEN;
        }

        // Buffer remaining
        if offset < data.len() {
            let remaining = data.len() - offset;
            self.buffer[..remaining].copy_from_slice(&data[offset..]);
            self.buffer_len = remaining;
        }
    }

    /// Finalize and return the digest as five big-endian words
    pub fn finalize_words(mut self) -> [u32; STATE_WORDS] {
        let bit_len = self.total_len.wrapping_mul(8);

        // Append 0x80
        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // Not enough room for the 64-bit length: pad and compress
        if self.buffer_len > BLOCK_LEN - 8 {
            self.buffer[self.buffer_len..].fill(0);

            let mut block = words_from_bytes(&self.buffer);
            compress(&mut self.h, &block);
            block.zeroize();
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..BLOCK_LEN - 8].fill(0);
        self.buffer[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_be_bytes());

        let mut block = words_from_bytes(&self.buffer);
        compress(&mut self.h, &block);
        block.zeroize();

        self.h
    }

    /// Finalize and output the digest bytes
    pub fn finalize(self, out: &mut [u8; DIGEST_LEN]) {
        let mut words = self.finalize_words();

        for (chunk, word) in out.chunks_exact_mut(4).zip(words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        words.zeroize();
    }
}

/// One-shot SHA-1
pub fn sha1(data: &[u8], out: &mut [u8; DIGEST_LEN]) {
    let mut state = Sha1State::new();
    state.update(data);
    state.finalize(out);
}

#[inline(always)]
fn words_from_bytes(bytes: &[u8]) -> [u32; BLOCK_WORDS] {
    debug_assert_eq!(bytes.len(), BLOCK_LEN);

    let mut words = [0u32; BLOCK_WORDS];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    words
}
