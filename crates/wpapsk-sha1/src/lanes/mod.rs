// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Lane-parallel SHA-1.
//!
//! A [`LaneWord`] packs one 32-bit word from each of `LANES` independent
//! messages. [`compress_lanes`] runs the FIPS 180-4 compression on every
//! lane at once, so the lane layout never leaks into the caller: it loads
//! lane words from contiguous `u32` runs and stores them back.

mod portable;

#[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
mod x86;

#[cfg(all(target_arch = "aarch64", not(feature = "portable")))]
mod aarch64;

pub use portable::Portable;

#[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
pub use x86::{Avx2, Sse2};

#[cfg(all(target_arch = "aarch64", not(feature = "portable")))]
pub use aarch64::Neon;

use crate::backend::Backend;
use crate::consts::{BLOCK_WORDS, K, STATE_WORDS};

/// One 32-bit word per lane, with the operations SHA-1 needs.
///
/// Constructors are `unsafe`: a value of a lane word type is the proof that
/// the CPU supports [`LaneWord::BACKEND`], so every operation on an existing
/// value is safe.
pub trait LaneWord: Copy {
    /// Lanes carried by one word.
    const LANES: usize;

    /// Backend this word belongs to.
    const BACKEND: Backend;

    /// Broadcast `value` to every lane.
    ///
    /// # Safety
    /// The CPU must support `Self::BACKEND`.
    unsafe fn splat(value: u32) -> Self;

    /// Lane `i` takes `src[i]`.
    ///
    /// # Safety
    /// The CPU must support `Self::BACKEND`.
    ///
    /// # Panics
    /// If `src` holds fewer than `LANES` words.
    unsafe fn load(src: &[u32]) -> Self;

    /// Writes lane `i` to `dst[i]`.
    ///
    /// # Panics
    /// If `dst` holds fewer than `LANES` words.
    fn store(self, dst: &mut [u32]);

    /// Lane-wise wrapping addition.
    fn add(self, rhs: Self) -> Self;

    /// Adds the same constant to every lane.
    fn add_const(self, k: u32) -> Self;

    /// Lane-wise XOR.
    fn xor(self, rhs: Self) -> Self;

    /// Lane-wise AND.
    fn and(self, rhs: Self) -> Self;

    /// Lane-wise OR.
    fn or(self, rhs: Self) -> Self;

    /// Lane-wise rotate left, `0 < n < 32`.
    fn rotl(self, n: u32) -> Self;
}

/// `K` lane words driven as one wider word.
///
/// Interleaving independent lane words gives the CPU unrelated dependency
/// chains to overlap, which hides instruction latency on wide cores.
#[derive(Clone, Copy)]
pub struct Interleaved<V, const N: usize>(pub [V; N]);

impl<V: LaneWord, const N: usize> LaneWord for Interleaved<V, N> {
    const LANES: usize = V::LANES * N;
    const BACKEND: Backend = V::BACKEND;

    #[inline(always)]
    unsafe fn splat(value: u32) -> Self {
        Self(core::array::from_fn(|_| unsafe { V::splat(value) }))
    }

    #[inline(always)]
    unsafe fn load(src: &[u32]) -> Self {
        Self(core::array::from_fn(|k| unsafe { V::load(&src[k * V::LANES..]) }))
    }

    #[inline(always)]
    fn store(self, dst: &mut [u32]) {
        for (k, word) in self.0.into_iter().enumerate() {
            word.store(&mut dst[k * V::LANES..]);
        }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|k| self.0[k].add(rhs.0[k])))
    }

    #[inline(always)]
    fn add_const(self, c: u32) -> Self {
        Self(self.0.map(|word| word.add_const(c)))
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|k| self.0[k].xor(rhs.0[k])))
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|k| self.0[k].and(rhs.0[k])))
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|k| self.0[k].or(rhs.0[k])))
    }

    #[inline(always)]
    fn rotl(self, n: u32) -> Self {
        Self(self.0.map(|word| word.rotl(n)))
    }
}

/// Compresses one block per lane into `state`.
///
/// Same round structure as [`compress`](crate::compress): `Ch` and `Maj` use
/// complement-free forms so every backend needs only AND, OR, XOR, ADD and
/// rotates. The message schedule is not zeroized; callers own the buffers
/// their lane words came from.
#[inline(always)]
pub fn compress_lanes<V: LaneWord>(state: &mut [V; STATE_WORDS], block: &[V; BLOCK_WORDS]) {
    let mut w = *block;

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for t in 0..80 {
        if t >= 16 {
            let s = t & 15;
            w[s] = w[(t + 13) & 15]
                .xor(w[(t + 8) & 15])
                .xor(w[(t + 2) & 15])
                .xor(w[s])
                .rotl(1);
        }

        let (f, k) = if t < 20 {
            (d.xor(b.and(c.xor(d))), K[0])
        } else if t < 40 {
            (b.xor(c).xor(d), K[1])
        } else if t < 60 {
            (b.and(c).or(d.and(b.or(c))), K[2])
        } else {
            (b.xor(c).xor(d), K[3])
        };

        let temp = a.rotl(5).add(f).add(e).add_const(k).add(w[t & 15]);

        e = d;
        d = c;
        c = b.rotl(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].add(a);
    state[1] = state[1].add(b);
    state[2] = state[2].add(c);
    state[3] = state[3].add(d);
    state[4] = state[4].add(e);
}
