// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// SHA-1 block size in bytes
pub const BLOCK_LEN: usize = 64;

/// SHA-1 block size in 32-bit words
pub const BLOCK_WORDS: usize = 16;

/// SHA-1 output size in bytes
pub const DIGEST_LEN: usize = 20;

/// SHA-1 chaining value size in 32-bit words
pub const STATE_WORDS: usize = 5;

/// Initial hash value H(0) per FIPS 180-4 Section 5.3.1
pub const H0: [u32; STATE_WORDS] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Round constants per FIPS 180-4 Section 4.2.1, one per group of 20 rounds
pub(crate) const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];
