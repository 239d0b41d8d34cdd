// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Scalar SHA-1 compression per FIPS 180-4 Section 6.1.2

use zeroize::Zeroize;

use crate::consts::{BLOCK_WORDS, K, STATE_WORDS};

/// Ch(b, c, d) without the complement: d ^ (b & (c ^ d))
#[inline(always)]
const fn ch(b: u32, c: u32, d: u32) -> u32 {
    d ^ (b & (c ^ d))
}

#[inline(always)]
const fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

/// Maj(b, c, d) as (b & c) | (d & (b | c))
#[inline(always)]
const fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (d & (b | c))
}

/// Compresses one 16-word block into `state`.
///
/// Words are the big-endian interpretation of the 64 block bytes. The message
/// schedule is kept in a 16-word ring and zeroized on return.
pub fn compress(state: &mut [u32; STATE_WORDS], block: &[u32; BLOCK_WORDS]) {
    let mut w = *block;

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for t in 0..80 {
        if t >= 16 {
            // W(t) = ROTL1(W(t-3) ^ W(t-8) ^ W(t-14) ^ W(t-16))
            let s = t & 15;
            w[s] = (w[(t + 13) & 15] ^ w[(t + 8) & 15] ^ w[(t + 2) & 15] ^ w[s]).rotate_left(1);
        }

        let (f, k) = match t / 20 {
            0 => (ch(b, c, d), K[0]),
            1 => (parity(b, c, d), K[1]),
            2 => (maj(b, c, d), K[2]),
            _ => (parity(b, c, d), K[3]),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(w[t & 15]);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);

    w.zeroize();
}
