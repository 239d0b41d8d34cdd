// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use wpapsk_sha1::{Backend, Interleaved, LaneWord, Portable, STATE_WORDS, compress_lanes};

#[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
use wpapsk_sha1::{Avx2, Sse2};

#[cfg(all(target_arch = "aarch64", not(feature = "portable")))]
use wpapsk_sha1::Neon;

use super::Interleave;
use crate::consts::ITERATIONS;

/// One lane group's slice of each workspace buffer, word-major.
pub(crate) struct GroupWords<'a> {
    /// `ipad` chaining values, 5 words.
    pub(crate) inner: &'a [u32],
    /// `opad` chaining values, 5 words.
    pub(crate) outer: &'a [u32],
    /// Round message block, 16 words: `U(i)` then preset padding.
    pub(crate) message: &'a mut [u32],
    /// Running XOR of every `U(i)`, 5 words.
    pub(crate) accum: &'a mut [u32],
}

/// Iterations 2..=4096 on lane word `V`.
///
/// Expects `U(1)` in message words 0..5 and in `accum`. Leaves `U(4096)`
/// in the message and `T` in `accum`.
///
/// # Safety
/// The CPU must support `V::BACKEND`.
#[inline(always)]
unsafe fn rounds<V: LaneWord>(words: GroupWords<'_>) {
    let lanes = V::LANES;
    let load = |src: &[u32], word: usize| unsafe { V::load(&src[word * lanes..]) };

    let inner: [V; STATE_WORDS] = core::array::from_fn(|w| load(words.inner, w));
    let outer: [V; STATE_WORDS] = core::array::from_fn(|w| load(words.outer, w));
    let mut block: [V; 16] = core::array::from_fn(|w| load(words.message, w));
    let mut accum: [V; STATE_WORDS] = core::array::from_fn(|w| load(words.accum, w));

    for _ in 1..ITERATIONS {
        let mut state = inner;
        compress_lanes(&mut state, &block);
        block[..STATE_WORDS].copy_from_slice(&state);

        let mut state = outer;
        compress_lanes(&mut state, &block);
        block[..STATE_WORDS].copy_from_slice(&state);

        for (acc, u) in accum.iter_mut().zip(state) {
            *acc = acc.xor(u);
        }
    }

    for (w, word) in block.iter().enumerate() {
        word.store(&mut words.message[w * lanes..]);
    }
    for (w, word) in accum.iter().enumerate() {
        word.store(&mut words.accum[w * lanes..]);
    }
}

/// # Safety
/// The CPU must support AVX2.
#[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
#[target_feature(enable = "avx2")]
unsafe fn rounds_avx2<V: LaneWord>(words: GroupWords<'_>) {
    unsafe { rounds::<V>(words) }
}

pub(super) fn dispatch(backend: Backend, interleave: Interleave, words: GroupWords<'_>) {
    // Kernel only admits backends the CPU supports; scalar and portable
    // words run everywhere, SSE2 and NEON are their targets' baselines.
    unsafe {
        match (backend, interleave) {
            (Backend::Scalar, Interleave::X1) => rounds::<u32>(words),
            (Backend::Scalar, Interleave::X2) => rounds::<Interleaved<u32, 2>>(words),
            (Backend::Portable, Interleave::X1) => rounds::<Portable>(words),
            (Backend::Portable, Interleave::X2) => rounds::<Interleaved<Portable, 2>>(words),

            #[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
            (Backend::Sse2, Interleave::X1) => rounds::<Sse2>(words),
            #[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
            (Backend::Sse2, Interleave::X2) => rounds::<Interleaved<Sse2, 2>>(words),
            #[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
            (Backend::Avx2, Interleave::X1) => rounds_avx2::<Avx2>(words),
            #[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
            (Backend::Avx2, Interleave::X2) => rounds_avx2::<Interleaved<Avx2, 2>>(words),

            #[cfg(all(target_arch = "aarch64", not(feature = "portable")))]
            (Backend::Neon, Interleave::X1) => rounds::<Neon>(words),
            #[cfg(all(target_arch = "aarch64", not(feature = "portable")))]
            (Backend::Neon, Interleave::X2) => rounds::<Interleaved<Neon, 2>>(words),

            // Backends compiled out of this build never pass Kernel::new.
            #[allow(unreachable_patterns)]
            (_, Interleave::X1) => rounds::<Portable>(words),
            #[allow(unreachable_patterns)]
            (_, Interleave::X2) => rounds::<Interleaved<Portable, 2>>(words),
        }
    }
}
