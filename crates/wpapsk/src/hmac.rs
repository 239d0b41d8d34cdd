// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA1 pad precompute per RFC 2104.
//!
//! HMAC(K, m) = H((K ^ opad) || H((K ^ ipad) || m)). With a key of at most
//! one block, `K ^ ipad` and `K ^ opad` are each exactly one block, so both
//! hashes can start from a chaining value computed once per key.

use wpapsk_sha1::{BLOCK_LEN, DIGEST_LEN, STATE_WORDS, Sha1State};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Chaining values after absorbing `K ^ ipad` and `K ^ opad`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct HmacPads {
    inner: [u32; STATE_WORDS],
    outer: [u32; STATE_WORDS],
}

impl HmacPads {
    /// Precomputes both pads for `key`, which must fit in one block.
    pub(crate) fn new(key: &[u8]) -> Self {
        debug_assert!(key.len() <= BLOCK_LEN);

        Self {
            inner: pad_chaining_value(key, 0x36),
            outer: pad_chaining_value(key, 0x5c),
        }
    }

    /// Restores pads previously read out with [`HmacPads::inner`] and
    /// [`HmacPads::outer`].
    pub(crate) fn from_chains(inner: [u32; STATE_WORDS], outer: [u32; STATE_WORDS]) -> Self {
        Self { inner, outer }
    }

    pub(crate) fn inner(&self) -> &[u32; STATE_WORDS] {
        &self.inner
    }

    pub(crate) fn outer(&self) -> &[u32; STATE_WORDS] {
        &self.outer
    }

    /// First PBKDF2 iteration: `U1 = HMAC(K, salt || BE32(block_index))`.
    ///
    /// The salt may push the inner message past one block, so this runs on
    /// the streaming hasher rather than a fixed-layout block.
    pub(crate) fn first_iteration(&self, salt: &[u8], block_index: u32) -> [u32; STATE_WORDS] {
        let mut inner = Sha1State::resume(self.inner, BLOCK_LEN as u64);
        inner.update(salt);
        inner.update(&block_index.to_be_bytes());

        let mut digest = [0u8; DIGEST_LEN];
        inner.finalize(&mut digest);

        let mut outer = Sha1State::resume(self.outer, BLOCK_LEN as u64);
        outer.update(&digest);
        digest.zeroize();

        outer.finalize_words()
    }
}

fn pad_chaining_value(key: &[u8], pad: u8) -> [u32; STATE_WORDS] {
    let mut block = [pad; BLOCK_LEN];
    for (b, k) in block.iter_mut().zip(key) {
        *b ^= k;
    }

    let mut state = Sha1State::new();
    state.update(&block);
    block.zeroize();

    state.chaining_value()
}
