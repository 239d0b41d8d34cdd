// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{H0, compress};

/// "abc" padded to one block, as big-endian words
fn abc_block() -> [u32; 16] {
    let mut block = [0u32; 16];
    block[0] = 0x61626380;
    block[15] = 24;
    block
}

// =============================================================================
// compress()
// =============================================================================

#[test]
fn test_compress_abc_single_block() {
    let mut state = H0;
    compress(&mut state, &abc_block());

    assert_eq!(
        state,
        [0xa9993e36, 0x4706816a, 0xba3e2571, 0x7850c26c, 0x9cd0d89d]
    );
}

#[test]
fn test_compress_empty_message_block() {
    let mut block = [0u32; 16];
    block[0] = 0x80000000;

    let mut state = H0;
    compress(&mut state, &block);

    assert_eq!(
        state,
        [0xda39a3ee, 0x5e6b4b0d, 0x3255bfef, 0x95601890, 0xafd80709]
    );
}

#[test]
fn test_compress_is_chaining() {
    let block = abc_block();

    let mut once = H0;
    compress(&mut once, &block);

    let mut twice = once;
    compress(&mut twice, &block);

    assert_ne!(once, twice);
    assert_ne!(once, H0);
}
