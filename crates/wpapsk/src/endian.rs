// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Conversions between SHA-1 words and the big-endian byte layout.
//!
//! The kernel works on host-order `u32` words whose values are the
//! big-endian interpretation of the hashed bytes. Output must be the
//! big-endian byte image regardless of host.

/// Rewrites host-order words in place so their in-memory bytes are
/// big-endian. No-op on big-endian hosts.
pub fn alter_endianity_to_be(words: &mut [u32]) {
    for word in words {
        *word = word.to_be();
    }
}

/// Writes `words` to `out` as consecutive big-endian bytes.
///
/// # Panics
/// If `out` is not exactly `4 * words.len()` bytes long.
pub fn be_words_to_bytes(words: &[u32], out: &mut [u8]) {
    assert_eq!(out.len(), words.len() * 4);

    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        let mut be = *word;
        alter_endianity_to_be(core::slice::from_mut(&mut be));
        chunk.copy_from_slice(&be.to_ne_bytes());
    }
}
